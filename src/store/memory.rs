//! In-memory store for tests and embedding.

use std::collections::HashMap;

use super::{PlayerStore, StoreError, StoreResult, TournamentStore};
use crate::roster::{Player, PlayerId};
use crate::tournament::{RoundId, Tournament, TournamentId};

/// A store backed by plain maps. Reference semantics for the trait
/// contracts; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    players: HashMap<PlayerId, Player>,
    tournaments: HashMap<TournamentId, Tournament>,
    next_player_id: PlayerId,
    next_tournament_id: TournamentId,
    next_round_id: RoundId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerStore for MemoryStore {
    fn load_players(&self) -> StoreResult<Vec<Player>> {
        let mut players: Vec<Player> = self.players.values().cloned().collect();
        players.sort_by_key(|p| p.id);
        Ok(players)
    }

    fn load_player(&self, id: PlayerId) -> StoreResult<Player> {
        self.players
            .get(&id)
            .cloned()
            .ok_or(StoreError::PlayerNotFound(id))
    }

    fn save_player(&mut self, player: Player) -> StoreResult<()> {
        self.players.insert(player.id, player);
        Ok(())
    }

    fn next_player_id(&mut self) -> StoreResult<PlayerId> {
        self.next_player_id += 1;
        Ok(self.next_player_id)
    }
}

impl TournamentStore for MemoryStore {
    fn load_tournaments(&self) -> StoreResult<Vec<Tournament>> {
        let mut tournaments: Vec<Tournament> = self.tournaments.values().cloned().collect();
        tournaments.sort_by_key(|t| t.id);
        Ok(tournaments)
    }

    fn load_tournament(&self, id: TournamentId) -> StoreResult<Tournament> {
        self.tournaments
            .get(&id)
            .cloned()
            .ok_or(StoreError::TournamentNotFound(id))
    }

    fn save_tournament(&mut self, tournament: &Tournament) -> StoreResult<()> {
        self.tournaments.insert(tournament.id, tournament.clone());
        Ok(())
    }

    fn next_tournament_id(&mut self) -> StoreResult<TournamentId> {
        self.next_tournament_id += 1;
        Ok(self.next_tournament_id)
    }

    fn next_round_id(&mut self) -> StoreResult<RoundId> {
        self.next_round_id += 1;
        Ok(self.next_round_id)
    }
}
