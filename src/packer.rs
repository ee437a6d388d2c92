//! Round packing.
//!
//! Partitions a pairing multiset into rounds in which no slot appears
//! twice.
//!
//! # Algorithm
//!
//! Each attempt shuffles the full pool, then fills rounds greedily: a
//! forward scan accepts the first pairing that shares no slot with the
//! pairings already in the round, until the round is full. Pairings
//! skipped over stay in the pool for later rounds of the same attempt.
//! A scan that exhausts the pool before the round fills is a dead end;
//! the attempt is discarded wholesale and a fresh shuffle starts over.
//! This is a Las Vegas loop: termination is probabilistic, so callers
//! in latency-sensitive paths should pass `try_once` and retry under
//! their own deadline.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{NoUniqueMatch, ScheduleGenerationFailed};
use crate::models::{Pairing, Round, Schedule};

/// Position of the first pool pairing that conflicts with nothing in
/// `accepted`, or [`NoUniqueMatch`] when the scan exhausts the pool.
pub fn find_first_nonconflicting(
    accepted: &[Pairing],
    pool: &[Pairing],
) -> Result<usize, NoUniqueMatch> {
    pool.iter()
        .position(|candidate| !accepted.iter().any(|taken| taken.conflicts_with(candidate)))
        .ok_or(NoUniqueMatch)
}

/// Fills one round from the pool, removing only the accepted pairings.
///
/// The cursor keeps skipped pairings in place, so a pairing rejected
/// for this round remains available for the next one.
fn fill_round(pool: &mut Vec<Pairing>, round_size: usize) -> Result<Round, NoUniqueMatch> {
    let mut accepted = Vec::with_capacity(round_size);
    let mut cursor = 0;
    while accepted.len() < round_size {
        cursor += find_first_nonconflicting(&accepted, &pool[cursor..])?;
        accepted.push(pool.remove(cursor));
    }
    Ok(Round::new(accepted))
}

/// Packs the whole pool into rounds, or dead-ends with [`NoUniqueMatch`].
fn pack_attempt(mut pool: Vec<Pairing>, round_size: usize) -> Result<Vec<Round>, NoUniqueMatch> {
    let mut rounds = Vec::with_capacity(pool.len() / round_size.max(1));
    while !pool.is_empty() {
        rounds.push(fill_round(&mut pool, round_size)?);
    }
    Ok(rounds)
}

/// Partitions `pairings` into rounds of exactly `round_size`.
///
/// Every attempt works on a fresh shuffle of the full multiset; nothing
/// carries over from a failed attempt. With `try_once` a dead end is
/// returned as [`ScheduleGenerationFailed`], otherwise attempts repeat
/// until one succeeds. `round_size` must evenly divide the pool length
/// and each slot may appear at most once per `round_size` pairings,
/// otherwise no attempt can ever succeed.
pub fn generate_schedule<R: Rng>(
    pairings: Vec<Pairing>,
    round_size: usize,
    try_once: bool,
    rng: &mut R,
) -> Result<Schedule, ScheduleGenerationFailed> {
    let mut attempt: u64 = 0;
    loop {
        attempt += 1;
        let mut pool = pairings.clone();
        pool.shuffle(rng);
        match pack_attempt(pool, round_size) {
            Ok(rounds) => {
                debug!(attempt, rounds = rounds.len(), "packed schedule");
                return Ok(Schedule::new(rounds));
            }
            Err(NoUniqueMatch) if try_once => return Err(ScheduleGenerationFailed),
            Err(NoUniqueMatch) => {
                debug!(attempt, "round fill dead-ended, reshuffling pool");
            }
        }
    }
}
