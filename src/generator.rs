//! Pairing generation.
//!
//! Produces the full pairing multiset for a round-robin competition.
//! The meeting multiplicity decomposes into full double cycles plus an
//! optional single-cycle remainder.
//!
//! # Algorithm
//!
//! A double cycle enumerates every ordered slot pair directly, so each
//! team meets each opponent once at home and once away per cycle; it is
//! deterministic and consumes no randomness. The single cycle uses the
//! circle construction: one slot is fixed as an anchor, the remaining
//! slots rotate around it, and each of the resulting rounds pairs the
//! anchor with the slot opposite it and reflects the rest of the ring
//! onto itself. Every unordered pair occurs exactly once across the
//! pass; a fair coin flip per pairing decides which side is home.
//!
//! # Reference
//! - de Werra (1981), "Scheduling in Sports"
//! - Rasmussen & Trick (2008), "Round robin scheduling - a survey"

use rand::Rng;

use crate::models::{OrientationMatrix, Pairing, Slot};

/// Generates the pairing multiset for `team_count` teams meeting
/// `meetings` times. Single-cycle pairings come first, then the full
/// double cycles; the packer reshuffles, so the order carries no meaning.
pub(crate) fn generate_matches<R: Rng>(
    team_count: u32,
    meetings: u32,
    rng: &mut R,
) -> Vec<Pairing> {
    let slots = slot_list(team_count);
    let per_cycle = slots.len() * (slots.len() - 1) / 2;
    let mut pairings = Vec::with_capacity(meetings as usize * per_cycle);

    if meetings % 2 == 1 {
        single_cycle_into(&slots, rng, &mut pairings);
    }
    for _ in 0..meetings / 2 {
        double_cycle_into(&slots, &mut pairings);
    }
    pairings
}

/// Runs one single-cycle pass and records its home/away draws.
///
/// Uses the same construction and the same per-pairing coin flips as
/// [`generate_matches`], so for equal rng state the matrix agrees with
/// the single-cycle portion of the match list.
pub(crate) fn generate_matrix<R: Rng>(team_count: u32, rng: &mut R) -> OrientationMatrix {
    let slots = slot_list(team_count);
    let mut pairings = Vec::with_capacity(slots.len() * (slots.len() - 1) / 2);
    single_cycle_into(&slots, rng, &mut pairings);
    OrientationMatrix::from_pairings(slots.len(), &pairings)
}

/// The competitor slots in ascending order, padded with the bye to an
/// even count when `team_count` is odd.
fn slot_list(team_count: u32) -> Vec<Slot> {
    let mut slots: Vec<Slot> = (1..=team_count).map(Slot::Team).collect();
    if team_count % 2 == 1 {
        slots.push(Slot::Bye);
    }
    slots
}

/// One complete directed round-robin: every ordered pair, ascending.
fn double_cycle_into(slots: &[Slot], out: &mut Vec<Pairing>) {
    for &home in slots {
        for &away in slots {
            if home != away {
                out.push(Pairing::new(home, away));
            }
        }
    }
}

/// One complete undirected round-robin via the circle construction,
/// with a random home side per pairing.
fn single_cycle_into<R: Rng>(slots: &[Slot], rng: &mut R, out: &mut Vec<Pairing>) {
    let anchor = slots[0];
    let mut ring: Vec<Slot> = slots[1..].to_vec();
    let len = ring.len(); // odd: slots.len() is even
    let mid = len / 2;

    for _ in 0..len {
        out.push(orient(anchor, ring[mid], rng));
        for k in 0..mid {
            out.push(orient(ring[k], ring[len - 1 - k], rng));
        }
        ring.rotate_right(1);
    }
}

/// Orders an unordered pair by a fair coin flip.
fn orient<R: Rng>(a: Slot, b: Slot, rng: &mut R) -> Pairing {
    if rng.random() {
        Pairing::new(a, b)
    } else {
        Pairing::new(b, a)
    }
}
