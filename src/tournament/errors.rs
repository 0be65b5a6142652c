//! Tournament error types.

use thiserror::Error;

use crate::roster::PlayerId;

/// Tournament errors
///
/// All of these are recoverable conditions surfaced to the caller; a
/// rejected operation leaves the tournament untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TournamentError {
    #[error("need 2+ enrolled players, have {have}")]
    InsufficientPlayers { have: usize },

    #[error("tournament has reached its configured round count")]
    TournamentComplete,

    #[error("result for match {index} already recorded")]
    MatchAlreadyResolved { index: usize },

    #[error("no match at index {index} in the open round")]
    MatchNotFound { index: usize },

    #[error("player {0} is already enrolled")]
    AlreadyEnrolled(PlayerId),

    #[error("registration is closed once the first round has started")]
    RegistrationClosed,

    #[error("tournament has already started")]
    AlreadyStarted,

    #[error("no round is open for result entry")]
    NoOpenRound,

    #[error("{unresolved} match(es) still unresolved in the open round")]
    RoundStillOpen { unresolved: usize },
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
