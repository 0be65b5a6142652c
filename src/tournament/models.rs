//! Tournament data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ledger::{ScoreLedger, Standing};
use crate::roster::PlayerId;

/// Tournament ID type
pub type TournamentId = i64;

/// Round ID type
pub type RoundId = i64;

/// Points are always awarded in half-point steps: 1.0 win, 0.5 draw,
/// 0.0 loss, 1.0 bye.
pub type Points = f32;

/// Default number of rounds for a new tournament
pub const DEFAULT_TOTAL_ROUNDS: u32 = 4;

/// An entry in a player's opponent history.
///
/// The bye is a typed variant rather than a magic identifier so it can
/// never collide with a real player ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opponent {
    Player(PlayerId),
    Bye,
}

/// Outcome of a single match, as entered by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    PlayerAWins,
    PlayerBWins,
    Draw,
}

impl MatchOutcome {
    /// Score pair awarded to (player_a, player_b)
    pub fn scores(self) -> (Points, Points) {
        match self {
            Self::PlayerAWins => (1.0, 0.0),
            Self::PlayerBWins => (0.0, 1.0),
            Self::Draw => (0.5, 0.5),
        }
    }
}

/// A head-to-head pairing within a round.
///
/// Matches hold player identifiers only; display data is resolved at
/// presentation time. `scores` stays `None` until a result is entered,
/// and a resolved pair always sums to exactly 1.0 because it is only
/// ever set from a [`MatchOutcome`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub player_a: PlayerId,
    pub player_b: PlayerId,
    /// Resolved (score_a, score_b), or `None` while pending
    pub scores: Option<(Points, Points)>,
}

impl Match {
    /// Create a pending match between two players
    pub fn new(player_a: PlayerId, player_b: PlayerId) -> Self {
        Self {
            player_a,
            player_b,
            scores: None,
        }
    }

    /// Whether a result has been recorded
    pub fn is_resolved(&self) -> bool {
        self.scores.is_some()
    }

    /// Whether the given player plays in this match
    pub fn involves(&self, player: PlayerId) -> bool {
        self.player_a == player || self.player_b == player
    }

    pub(crate) fn resolve(&mut self, outcome: MatchOutcome) {
        self.scores = Some(outcome.scores());
    }
}

/// One complete cycle of matches.
///
/// A round is open until every match has a result; closing stamps
/// `finished_at`, after which its matches are immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    /// 1-indexed position within the tournament
    pub number: u32,
    pub matches: Vec<Match>,
    /// Player left unmatched this round, if the field was odd. The bye
    /// is not a match; its point is recorded directly in the ledger.
    pub bye: Option<PlayerId>,
    pub started_at: DateTime<Utc>,
    /// `None` while the round is open
    pub finished_at: Option<DateTime<Utc>>,
}

impl Round {
    /// Create an open round from pairings
    pub fn new(id: RoundId, number: u32, matches: Vec<Match>, bye: Option<PlayerId>) -> Self {
        Self {
            id,
            number,
            matches,
            bye,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Display name (e.g. "Round 3")
    pub fn name(&self) -> String {
        format!("Round {}", self.number)
    }

    pub fn is_open(&self) -> bool {
        self.finished_at.is_none()
    }

    /// Number of matches still awaiting a result
    pub fn unresolved_count(&self) -> usize {
        self.matches.iter().filter(|m| !m.is_resolved()).count()
    }
}

/// Tournament phase, derived from the round history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TournamentPhase {
    /// No rounds exist; enrollment is permitted
    NotStarted,
    /// The latest round is awaiting results
    RoundOpen,
    /// The latest round is closed and more rounds remain
    RoundClosed,
    /// The configured round count has been played out
    Finished,
}

/// A chess tournament: configuration, enrolled players, round history,
/// and the score ledger.
///
/// Enrolled players and match participants are stored as identifiers;
/// full [`crate::roster::Player`] records are never embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub location: String,
    pub description: String,
    /// Start date, YYYY-MM-DD (display data)
    pub start_date: String,
    /// End date, YYYY-MM-DD (display data)
    pub end_date: String,
    /// Configured number of rounds; never exceeded
    pub total_rounds: u32,
    /// Enrolled player identifiers, in enrollment order
    pub players: Vec<PlayerId>,
    /// Completed and in-progress rounds, oldest first
    pub rounds: Vec<Round>,
    /// Cumulative points and opponent history
    pub ledger: ScoreLedger,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create a new tournament with no enrollments
    pub fn new(
        id: TournamentId,
        name: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        total_rounds: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            description: description.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
            total_rounds,
            players: Vec::new(),
            rounds: Vec::new(),
            ledger: ScoreLedger::default(),
            created_at: Utc::now(),
        }
    }

    /// [`Tournament::new`] with [`DEFAULT_TOTAL_ROUNDS`]
    pub fn with_default_rounds(
        id: TournamentId,
        name: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            name,
            location,
            description,
            start_date,
            end_date,
            DEFAULT_TOTAL_ROUNDS,
        )
    }

    pub fn is_enrolled(&self, player: PlayerId) -> bool {
        self.players.contains(&player)
    }

    /// The latest round, if any
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub(crate) fn current_round_mut(&mut self) -> Option<&mut Round> {
        self.rounds.last_mut()
    }

    /// Number of rounds that have been played to completion
    pub fn completed_rounds(&self) -> u32 {
        self.rounds.iter().filter(|r| !r.is_open()).count() as u32
    }

    /// Derive the current phase from the round history.
    ///
    /// Derived rather than stored so a tournament loaded from any
    /// closed-round boundary resumes in the right state.
    pub fn phase(&self) -> TournamentPhase {
        match self.rounds.last() {
            None => TournamentPhase::NotStarted,
            Some(round) if round.is_open() => TournamentPhase::RoundOpen,
            Some(_) if self.completed_rounds() >= self.total_rounds => TournamentPhase::Finished,
            Some(_) => TournamentPhase::RoundClosed,
        }
    }

    /// Current standings: enrolled players sorted by points descending,
    /// ties by ascending player ID
    pub fn standings(&self) -> Vec<Standing> {
        self.ledger.standings(&self.players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_round(number: u32) -> Round {
        Round::new(number as RoundId, number, vec![Match::new(1, 2)], None)
    }

    fn closed_round(number: u32) -> Round {
        let mut round = open_round(number);
        round.matches[0].resolve(MatchOutcome::Draw);
        round.finished_at = Some(Utc::now());
        round
    }

    #[test]
    fn test_outcome_scores_sum_to_one() {
        for outcome in [
            MatchOutcome::PlayerAWins,
            MatchOutcome::PlayerBWins,
            MatchOutcome::Draw,
        ] {
            let (a, b) = outcome.scores();
            assert_eq!(a + b, 1.0);
        }
    }

    #[test]
    fn test_match_resolution() {
        let mut m = Match::new(1, 2);
        assert!(!m.is_resolved());
        assert!(m.involves(1));
        assert!(m.involves(2));
        assert!(!m.involves(3));

        m.resolve(MatchOutcome::PlayerBWins);
        assert!(m.is_resolved());
        assert_eq!(m.scores, Some((0.0, 1.0)));
    }

    #[test]
    fn test_round_name_and_open_state() {
        let round = open_round(3);
        assert_eq!(round.name(), "Round 3");
        assert!(round.is_open());
        assert_eq!(round.unresolved_count(), 1);

        let round = closed_round(3);
        assert!(!round.is_open());
        assert_eq!(round.unresolved_count(), 0);
    }

    #[test]
    fn test_phase_derivation() {
        let mut t = Tournament::new(1, "Open", "Lyon", "", "2026-01-10", "2026-01-12", 2);
        assert_eq!(t.phase(), TournamentPhase::NotStarted);

        t.rounds.push(open_round(1));
        assert_eq!(t.phase(), TournamentPhase::RoundOpen);

        t.rounds[0] = closed_round(1);
        assert_eq!(t.phase(), TournamentPhase::RoundClosed);

        t.rounds.push(closed_round(2));
        assert_eq!(t.phase(), TournamentPhase::Finished);
    }

    #[test]
    fn test_tournament_serialization_round_trip() {
        let mut t =
            Tournament::with_default_rounds(5, "Club Cup", "Paris", "Annual", "2026-03-01", "2026-03-02");
        assert_eq!(t.total_rounds, DEFAULT_TOTAL_ROUNDS);
        t.players = vec![1, 2, 3];
        t.rounds.push(closed_round(1));
        t.ledger.add_points(1, 1.0);
        t.ledger.record_opponent(1, Opponent::Player(2));
        t.ledger.record_opponent(3, Opponent::Bye);

        let json = serde_json::to_string(&t).unwrap();
        let back: Tournament = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
