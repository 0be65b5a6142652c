//! Swiss tournament core.
//!
//! This module provides the pairing and scoring engine:
//! - Tournament, round, and match models
//! - The per-tournament score ledger (points + opponent history)
//! - Round pairing (random round 1, greedy Swiss afterwards)
//! - The round lifecycle driving pairing and result entry
//!
//! ## Example
//!
//! ```
//! use swiss_rounds::tournament::{self, MatchOutcome, RoundAdvance, Tournament};
//!
//! let mut t = Tournament::new(1, "Club Open", "Lyon", "", "2026-04-01", "2026-04-02", 2);
//! for player in [1, 2, 3, 4] {
//!     tournament::enroll_player(&mut t, player)?;
//! }
//!
//! tournament::start_first_round(&mut t, 1)?;
//! for i in 0..t.current_round().unwrap().matches.len() {
//!     tournament::record_match_result(&mut t, i, MatchOutcome::Draw)?;
//! }
//! assert_eq!(
//!     tournament::close_round_and_advance(&mut t, 2)?,
//!     RoundAdvance::NextRound(2),
//! );
//! # Ok::<(), swiss_rounds::tournament::TournamentError>(())
//! ```

pub mod errors;
pub mod ledger;
pub mod manager;
pub mod models;
pub mod pairing;

pub use errors::{TournamentError, TournamentResult};
pub use ledger::{LedgerEntry, ScoreLedger, Standing};
pub use manager::{
    RoundAdvance, close_round_and_advance, enroll_player, record_match_result, start_first_round,
    start_first_round_with_rng,
};
pub use models::{
    DEFAULT_TOTAL_ROUNDS, Match, MatchOutcome, Opponent, Points, Round, RoundId, Tournament,
    TournamentId, TournamentPhase,
};
pub use pairing::{RoundPairings, pair_first_round, pair_swiss_round};
