//! # Swiss Rounds
//!
//! A Swiss-system chess tournament engine: enrollment, round pairing,
//! result entry, and cumulative standings.
//!
//! The core is deliberately small. Round 1 is a random shuffle split
//! into pairs; every later round sorts players by cumulative points and
//! greedily pairs neighbors who have not yet met, forcing a rematch
//! only when no fresh opponent remains. Odd fields hand the leftover
//! player a bye worth a full point, preferring players who have never
//! had one. A tournament runs a fixed, pre-configured number of rounds.
//!
//! Everything operates on player identifiers; display data lives in the
//! [`roster`] and is resolved at presentation time. Persistence is an
//! external collaborator behind the [`store`] traits.
//!
//! ## Core Modules
//!
//! - [`tournament`]: models, score ledger, pairing engine, round lifecycle
//! - [`roster`]: player records and identifiers
//! - [`store`]: persistence traits plus in-memory and JSON-file stores
//!
//! ## Example
//!
//! ```
//! use swiss_rounds::{MatchOutcome, Tournament, tournament};
//!
//! let mut t = Tournament::new(1, "City Blitz", "Nantes", "", "2026-06-01", "2026-06-01", 3);
//! for player in [10, 11, 12, 13, 14] {
//!     tournament::enroll_player(&mut t, player).unwrap();
//! }
//!
//! let round = tournament::start_first_round(&mut t, 1).unwrap();
//! assert_eq!(round.matches.len(), 2);
//! assert!(round.bye.is_some());
//! ```

/// Player records and identifiers.
pub mod roster;
pub use roster::{Player, PlayerId};

/// Tournament models, score ledger, pairing, and round lifecycle.
pub mod tournament;
pub use tournament::{
    MatchOutcome, Opponent, Points, RoundAdvance, ScoreLedger, Standing, Tournament,
    TournamentError, TournamentPhase, TournamentResult,
};

/// Persistence collaborator traits and bundled stores.
pub mod store;
pub use store::{JsonStore, MemoryStore, PlayerStore, StoreError, StoreResult, TournamentStore};
