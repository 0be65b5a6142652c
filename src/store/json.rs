//! JSON-file store.
//!
//! One document per collection under a data directory: `players.json`
//! and `tournaments.json`. Saves rewrite the whole document through a
//! temp-file rename, so readers only ever see a complete snapshot.
//! Tournaments are serialized with player identifiers only; no player
//! records are embedded.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{PlayerStore, StoreError, StoreResult, TournamentStore};
use crate::roster::{Player, PlayerId};
use crate::tournament::{RoundId, Tournament, TournamentId};

const PLAYERS_FILE: &str = "players.json";
const TOURNAMENTS_FILE: &str = "tournaments.json";

/// A store persisting JSON documents under a data directory.
///
/// Collections are read once at open and kept in memory; every save
/// rewrites the owning document. ID counters are seeded from the stored
/// maxima at open and monotonic for the life of the store.
#[derive(Debug)]
pub struct JsonStore {
    data_dir: PathBuf,
    players: Vec<Player>,
    tournaments: Vec<Tournament>,
    next_player_id: PlayerId,
    next_tournament_id: TournamentId,
    next_round_id: RoundId,
}

impl JsonStore {
    /// Open (and create if needed) a store at `data_dir`
    pub fn open(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;

        let players: Vec<Player> = read_collection(&data_dir.join(PLAYERS_FILE))?;
        let tournaments: Vec<Tournament> = read_collection(&data_dir.join(TOURNAMENTS_FILE))?;

        let next_player_id = players.iter().map(|p| p.id).max().unwrap_or(0);
        let next_tournament_id = tournaments.iter().map(|t| t.id).max().unwrap_or(0);
        let next_round_id = tournaments
            .iter()
            .flat_map(|t| t.rounds.iter().map(|r| r.id))
            .max()
            .unwrap_or(0);

        info!(
            "opened store at {} ({} players, {} tournaments)",
            data_dir.display(),
            players.len(),
            tournaments.len(),
        );
        Ok(Self {
            data_dir,
            players,
            tournaments,
            next_player_id,
            next_tournament_id,
            next_round_id,
        })
    }

    fn persist_players(&self) -> StoreResult<()> {
        write_collection(&self.data_dir.join(PLAYERS_FILE), &self.players)
    }

    fn persist_tournaments(&self) -> StoreResult<()> {
        write_collection(&self.data_dir.join(TOURNAMENTS_FILE), &self.tournaments)
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> StoreResult<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(items)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

impl PlayerStore for JsonStore {
    fn load_players(&self) -> StoreResult<Vec<Player>> {
        Ok(self.players.clone())
    }

    fn load_player(&self, id: PlayerId) -> StoreResult<Player> {
        self.players
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::PlayerNotFound(id))
    }

    fn save_player(&mut self, player: Player) -> StoreResult<()> {
        match self.players.iter_mut().find(|p| p.id == player.id) {
            Some(existing) => *existing = player,
            None => self.players.push(player),
        }
        self.persist_players()
    }

    fn next_player_id(&mut self) -> StoreResult<PlayerId> {
        self.next_player_id += 1;
        Ok(self.next_player_id)
    }
}

impl TournamentStore for JsonStore {
    fn load_tournaments(&self) -> StoreResult<Vec<Tournament>> {
        Ok(self.tournaments.clone())
    }

    fn load_tournament(&self, id: TournamentId) -> StoreResult<Tournament> {
        self.tournaments
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::TournamentNotFound(id))
    }

    fn save_tournament(&mut self, tournament: &Tournament) -> StoreResult<()> {
        match self.tournaments.iter_mut().find(|t| t.id == tournament.id) {
            Some(existing) => *existing = tournament.clone(),
            None => self.tournaments.push(tournament.clone()),
        }
        self.persist_tournaments()
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
