//! Round lifecycle for a tournament.
//!
//! State machine: not started → round open → round closed → next round
//! or finished. Operations validate everything before touching the
//! tournament, so a rejected call leaves it exactly as it was.
//!
//! Results feed the ledger one match at a time: entering a result
//! immediately awards both players' points and records both directions
//! of opponent history. Byes are applied the moment the round that
//! grants them is materialized.

use chrono::Utc;
use log::{info, warn};
use rand::Rng;

use super::errors::{TournamentError, TournamentResult};
use super::models::{Match, MatchOutcome, Opponent, Round, RoundId, Tournament, TournamentPhase};
use super::pairing::{self, RoundPairings};
use crate::roster::PlayerId;

/// What [`close_round_and_advance`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAdvance {
    /// A new round was opened; its 1-indexed number
    NextRound(u32),
    /// The configured round count has been played out
    Finished,
}

/// Enroll a player. Permitted only before the first round exists;
/// registration closes permanently once the tournament has started.
pub fn enroll_player(tournament: &mut Tournament, player: PlayerId) -> TournamentResult<()> {
    if tournament.phase() != TournamentPhase::NotStarted {
        return Err(TournamentError::RegistrationClosed);
    }
    if tournament.is_enrolled(player) {
        return Err(TournamentError::AlreadyEnrolled(player));
    }

    tournament.players.push(player);
    tournament.ledger.entry_mut(player);
    Ok(())
}

/// Start the tournament by creating round 1 with random pairing.
///
/// The round ID is allocated by the caller (normally from the store's
/// monotonic counter).
pub fn start_first_round(
    tournament: &mut Tournament,
    round_id: RoundId,
) -> TournamentResult<&Round> {
    start_first_round_with_rng(tournament, round_id, &mut rand::rng())
}

/// [`start_first_round`] with an injected RNG for deterministic tests
pub fn start_first_round_with_rng<'a, R: Rng + ?Sized>(
    tournament: &'a mut Tournament,
    round_id: RoundId,
    rng: &mut R,
) -> TournamentResult<&'a Round> {
    if tournament.phase() != TournamentPhase::NotStarted {
        return Err(TournamentError::AlreadyStarted);
    }
    if tournament.total_rounds == 0 {
        return Err(TournamentError::TournamentComplete);
    }

    let pairings = pairing::pair_first_round(&tournament.players, rng)?;
    Ok(open_round(tournament, round_id, 1, pairings))
}

/// Record the result of one match of the open round.
///
/// `match_index` addresses the match within the open round's list. Each
/// match accepts exactly one result; the first submission stands.
pub fn record_match_result(
    tournament: &mut Tournament,
    match_index: usize,
    outcome: MatchOutcome,
) -> TournamentResult<()> {
    match tournament.phase() {
        TournamentPhase::Finished => return Err(TournamentError::TournamentComplete),
        TournamentPhase::RoundOpen => {}
        _ => return Err(TournamentError::NoOpenRound),
    }

    let round = tournament
        .current_round()
        .ok_or(TournamentError::NoOpenRound)?;
    let m = round
        .matches
        .get(match_index)
        .ok_or(TournamentError::MatchNotFound { index: match_index })?;
    if m.is_resolved() {
        warn!(
            "duplicate result for match {match_index} of {}",
            round.name()
        );
        return Err(TournamentError::MatchAlreadyResolved { index: match_index });
    }
    let (player_a, player_b) = (m.player_a, m.player_b);
    let (score_a, score_b) = outcome.scores();

    // Validation done; apply the result everywhere at once.
    if let Some(round) = tournament.current_round_mut() {
        round.matches[match_index].resolve(outcome);
    }
    tournament.ledger.add_points(player_a, score_a);
    tournament.ledger.add_points(player_b, score_b);
    tournament
        .ledger
        .record_opponent(player_a, Opponent::Player(player_b));
    tournament
        .ledger
        .record_opponent(player_b, Opponent::Player(player_a));

    Ok(())
}

/// Close the open round once every match is resolved, then either open
/// the next round with Swiss pairing or finish the tournament.
///
/// Also advances a tournament loaded at a closed-round boundary (its
/// latest round already closed but not yet followed up).
pub fn close_round_and_advance(
    tournament: &mut Tournament,
    next_round_id: RoundId,
) -> TournamentResult<RoundAdvance> {
    match tournament.phase() {
        TournamentPhase::Finished => return Err(TournamentError::TournamentComplete),
        TournamentPhase::NotStarted => return Err(TournamentError::NoOpenRound),
        TournamentPhase::RoundOpen => {
            let unresolved = tournament
                .current_round()
                .map_or(0, Round::unresolved_count);
            if unresolved > 0 {
                return Err(TournamentError::RoundStillOpen { unresolved });
            }
            if let Some(round) = tournament.current_round_mut() {
                round.finished_at = Some(Utc::now());
                info!("{} closed", round.name());
            }
        }
        TournamentPhase::RoundClosed => {}
    }

    if tournament.completed_rounds() >= tournament.total_rounds {
        info!("tournament {} finished", tournament.id);
        return Ok(RoundAdvance::Finished);
    }

    let pairings = pairing::pair_swiss_round(&tournament.players, &tournament.ledger)?;
    let number = tournament.rounds.len() as u32 + 1;
    let round = open_round(tournament, next_round_id, number, pairings);
    Ok(RoundAdvance::NextRound(round.number))
}

/// Materialize a round from pairings and apply the bye award
fn open_round(
    tournament: &mut Tournament,
    round_id: RoundId,
    number: u32,
    pairings: RoundPairings,
) -> &Round {
    let matches = pairings
        .pairs
        .iter()
        .map(|&(a, b)| Match::new(a, b))
        .collect();
    let round = Round::new(round_id, number, matches, pairings.bye);
    if let Some(player) = round.bye {
        debug_assert!(
            !round.matches.iter().any(|m| m.involves(player)),
            "bye player {player} is also paired in {}",
            round.name()
        );
    }
    info!(
        "{} opened with {} match(es){}",
        round.name(),
        round.matches.len(),
        round
            .bye
            .map(|p| format!(", bye to player {p}"))
            .unwrap_or_default(),
    );
    tournament.rounds.push(round);

    if let Some(player) = pairings.bye {
        tournament.ledger.add_points(player, 1.0);
        tournament.ledger.record_opponent(player, Opponent::Bye);
    }

    // Just pushed, so last() is this round.
    &tournament.rounds[tournament.rounds.len() - 1]
}
