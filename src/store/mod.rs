//! Persistence collaborator interface.
//!
//! The core treats storage as an external collaborator reached through
//! these traits: whole-record snapshot loads and replaces, never
//! partial patches, plus monotonic ID allocation. Callers must not
//! interleave two load-modify-save cycles for the same tournament; the
//! engine itself is free of shared state.
//!
//! Two implementations ship with the crate: [`MemoryStore`] for tests
//! and embedding, and [`JsonStore`] persisting JSON documents on disk.

use thiserror::Error;

use crate::roster::{Player, PlayerId};
use crate::tournament::{RoundId, Tournament, TournamentId};

pub mod json;
pub mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("tournament {0} not found")]
    TournamentNotFound(TournamentId),

    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Durable roster of players
pub trait PlayerStore {
    /// Load every registered player
    fn load_players(&self) -> StoreResult<Vec<Player>>;

    /// Load one player by identifier
    fn load_player(&self, id: PlayerId) -> StoreResult<Player>;

    /// Insert or replace a player record
    fn save_player(&mut self, player: Player) -> StoreResult<()>;

    /// Allocate the next player identifier (monotonic)
    fn next_player_id(&mut self) -> StoreResult<PlayerId>;
}

/// Durable collection of tournaments
pub trait TournamentStore {
    /// Load every tournament
    fn load_tournaments(&self) -> StoreResult<Vec<Tournament>>;

    /// Load one tournament by identifier
    fn load_tournament(&self, id: TournamentId) -> StoreResult<Tournament>;

    /// Replace a tournament wholesale (atomic snapshot semantics)
    fn save_tournament(&mut self, tournament: &Tournament) -> StoreResult<()>;

    /// Allocate the next tournament identifier (monotonic)
    fn next_tournament_id(&mut self) -> StoreResult<TournamentId>;

    /// Allocate the next round identifier (monotonic, shared across
    /// tournaments)
    fn next_round_id(&mut self) -> StoreResult<RoundId>;
}
