//! Pairing model.
//!
//! A pairing is an ordered meeting of two slots. Slots are either real
//! competitors (1-based team ids) or the bye sentinel inserted when the
//! team count is odd, so every round has an even number of participants.

use serde::{Deserialize, Serialize};

/// One side of a pairing: a competitor or the idle sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// A competitor, identified by a 1-based team id.
    Team(u32),
    /// The "no opponent" sentinel for odd team counts. The bye never
    /// plays; a pairing containing it marks its opponent as idle.
    Bye,
}

impl Slot {
    /// Whether this slot is the bye sentinel.
    pub fn is_bye(self) -> bool {
        matches!(self, Slot::Bye)
    }

    /// The team id, or `None` for the bye.
    pub fn team(self) -> Option<u32> {
        match self {
            Slot::Team(id) => Some(id),
            Slot::Bye => None,
        }
    }
}

/// An ordered pairing of two slots.
///
/// `home`/`away` carries orientation for single-cycle pairings, where a
/// coin flip decides the order. Double-cycle pairings enumerate both
/// orders explicitly, so the order is the identity of the pairing itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing {
    /// First-listed (home) side.
    pub home: Slot,
    /// Second-listed (away) side.
    pub away: Slot,
}

impl Pairing {
    /// Creates a pairing in the given order.
    pub fn new(home: Slot, away: Slot) -> Self {
        Self { home, away }
    }

    /// Whether the given slot takes part in this pairing.
    pub fn involves(&self, slot: Slot) -> bool {
        self.home == slot || self.away == slot
    }

    /// Whether two pairings share a slot.
    ///
    /// The bye counts as shared: two idle pairings cannot occupy the
    /// same round any more than two pairings of one team can.
    pub fn conflicts_with(&self, other: &Pairing) -> bool {
        other.involves(self.home) || other.involves(self.away)
    }

    /// Whether one side of this pairing is the bye.
    pub fn is_idle(&self) -> bool {
        self.home.is_bye() || self.away.is_bye()
    }
}
