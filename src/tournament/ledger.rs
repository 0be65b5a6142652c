//! Per-tournament score ledger.
//!
//! The ledger tracks each player's cumulative points and the set of
//! opponents they have faced, which is what the Swiss pairing pass needs
//! to avoid rematches and repeat byes. Entries are created lazily on
//! first touch and live exactly as long as the owning tournament.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::models::{Opponent, Points};
use crate::roster::PlayerId;

/// A single player's cumulative record within one tournament
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Sum of awards: 1.0 win, 0.5 draw, 0.0 loss, 1.0 bye
    pub points: Points,
    /// Opponents faced so far, including the bye marker. Membership is
    /// the only operation pairing needs; duplicates never accumulate.
    pub opponents: HashSet<Opponent>,
}

/// A row of the standings table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub points: Points,
}

/// Map of player identifier to cumulative record.
///
/// Side effects are confined to the owning tournament; there is no
/// global state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreLedger {
    entries: HashMap<PlayerId, LedgerEntry>,
}

impl ScoreLedger {
    /// Get or lazily initialize a player's entry
    pub fn entry_mut(&mut self, player: PlayerId) -> &mut LedgerEntry {
        self.entries.entry(player).or_default()
    }

    /// Read a player's entry without initializing one
    pub fn entry(&self, player: PlayerId) -> Option<&LedgerEntry> {
        self.entries.get(&player)
    }

    /// A player's cumulative points (0.0 for players never touched)
    pub fn points(&self, player: PlayerId) -> Points {
        self.entries.get(&player).map_or(0.0, |e| e.points)
    }

    /// Add to a player's total. `amount` is one of 0.0, 0.5, 1.0.
    pub fn add_points(&mut self, player: PlayerId, amount: Points) {
        self.entry_mut(player).points += amount;
    }

    /// Record an opponent in a player's history. Idempotent: recording
    /// the same opponent twice has no additional effect.
    pub fn record_opponent(&mut self, player: PlayerId, opponent: Opponent) {
        debug_assert!(
            opponent != Opponent::Player(player),
            "a player cannot face themselves"
        );
        self.entry_mut(player).opponents.insert(opponent);
    }

    /// Whether `player` has already faced `other`
    pub fn has_played(&self, player: PlayerId, other: PlayerId) -> bool {
        self.entries
            .get(&player)
            .is_some_and(|e| e.opponents.contains(&Opponent::Player(other)))
    }

    /// Whether `player` has already received a bye
    pub fn has_had_bye(&self, player: PlayerId) -> bool {
        self.entries
            .get(&player)
            .is_some_and(|e| e.opponents.contains(&Opponent::Bye))
    }

    /// Standings for the given players: descending points, ties broken
    /// by ascending player ID for a stable, deterministic order.
    pub fn standings(&self, players: &[PlayerId]) -> Vec<Standing> {
        let mut standings: Vec<Standing> = players
            .iter()
            .map(|&player| Standing {
                player,
                points: self.points(player),
            })
            .collect();
        standings.sort_by(|a, b| b.points.total_cmp(&a.points).then(a.player.cmp(&b.player)));
        standings
    }

    /// Total points awarded across all players
    pub fn total_points(&self) -> Points {
        self.entries.values().map(|e| e.points).sum()
    }
}
