//! Round and schedule models.
//!
//! A round is a batch of pairings played simultaneously; a schedule is
//! the ordered sequence of rounds covering the whole pairing pool.

use serde::{Deserialize, Serialize};

use super::{Pairing, Slot};

/// A batch of pairings in which no slot appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// The pairings played in this round.
    pub pairings: Vec<Pairing>,
}

impl Round {
    /// Creates a round from its pairings.
    pub fn new(pairings: Vec<Pairing>) -> Self {
        Self { pairings }
    }

    /// Number of pairings in the round.
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// Whether the round holds no pairings.
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }

    /// Whether the given slot plays (or idles) in this round.
    pub fn contains(&self, slot: Slot) -> bool {
        self.pairings.iter().any(|p| p.involves(slot))
    }
}

/// An ordered sequence of rounds.
///
/// Concatenating the rounds reproduces exactly the pairing multiset the
/// schedule was packed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Rounds in playing order.
    pub rounds: Vec<Round>,
}

impl Schedule {
    /// Creates a schedule from its rounds.
    pub fn new(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }

    /// Number of rounds.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Total pairings across all rounds.
    pub fn pairing_count(&self) -> usize {
        self.rounds.iter().map(Round::len).sum()
    }

    /// Iterates over all pairings in round order.
    pub fn pairings(&self) -> impl Iterator<Item = &Pairing> {
        self.rounds.iter().flat_map(|r| r.pairings.iter())
    }
}
