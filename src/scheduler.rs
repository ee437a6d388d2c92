//! Round-robin configuration and generation entry points.
//!
//! `RoundRobin` holds the two recognized options, team count and
//! meeting multiplicity, validates them at construction, and exposes
//! the generation operations. Each operation comes in a convenience
//! form drawing from the process rng and a `_with` form threading a
//! caller-supplied source for reproducible output.

use rand::Rng;

use crate::error::{ConfigError, ScheduleGenerationFailed};
use crate::generator;
use crate::models::{OrientationMatrix, Pairing, Schedule};
use crate::packer;

/// Configuration for a round-robin competition.
///
/// The multiplicity presets ([`single`](Self::single) through
/// [`quadruple`](Self::quadruple)) are plain constructors over
/// [`new`](Self::new); any meeting count of one or more is accepted.
///
/// # Example
///
/// ```
/// use u_fixture::scheduler::RoundRobin;
///
/// let fixture = RoundRobin::double(6).unwrap();
/// let schedule = fixture.generate_schedule(false).unwrap();
/// assert_eq!(schedule.round_count(), 10);
/// assert!(schedule.rounds.iter().all(|round| round.len() == 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    team_count: u32,
    meetings: u32,
}

impl RoundRobin {
    /// Creates a configuration where every pair of teams meets
    /// `meetings` times.
    ///
    /// Rejects fewer than two teams and zero meetings; nothing else is
    /// validated because nothing else can be invalid.
    pub fn new(team_count: u32, meetings: u32) -> Result<Self, ConfigError> {
        if team_count < 2 {
            return Err(ConfigError::TooFewTeams(team_count));
        }
        if meetings == 0 {
            return Err(ConfigError::ZeroMeetings);
        }
        Ok(Self {
            team_count,
            meetings,
        })
    }

    /// Every pair meets once.
    pub fn single(team_count: u32) -> Result<Self, ConfigError> {
        Self::new(team_count, 1)
    }

    /// Every pair meets twice (once home, once away).
    pub fn double(team_count: u32) -> Result<Self, ConfigError> {
        Self::new(team_count, 2)
    }

    /// Every pair meets three times.
    pub fn triple(team_count: u32) -> Result<Self, ConfigError> {
        Self::new(team_count, 3)
    }

    /// Every pair meets four times.
    pub fn quadruple(team_count: u32) -> Result<Self, ConfigError> {
        Self::new(team_count, 4)
    }

    /// Number of competing teams.
    pub fn team_count(&self) -> u32 {
        self.team_count
    }

    /// Times each pair of teams meets.
    pub fn meetings(&self) -> u32 {
        self.meetings
    }

    /// Team count rounded up to even; the bye fills the odd slot.
    pub fn padded_count(&self) -> u32 {
        self.team_count + self.team_count % 2
    }

    /// Pairings per round.
    pub fn round_size(&self) -> usize {
        (self.padded_count() / 2) as usize
    }

    /// Rounds in a complete schedule.
    pub fn round_count(&self) -> usize {
        (self.meetings * (self.padded_count() - 1)) as usize
    }

    /// Total pairings across a complete schedule, idle pairings included.
    pub fn match_count(&self) -> usize {
        self.round_count() * self.round_size()
    }

    /// Generates the pairing multiset using the process rng.
    pub fn generate_matches(&self) -> Vec<Pairing> {
        self.generate_matches_with(&mut rand::rng())
    }

    /// Generates the pairing multiset from the given random source.
    pub fn generate_matches_with<R: Rng>(&self, rng: &mut R) -> Vec<Pairing> {
        generator::generate_matches(self.team_count, self.meetings, rng)
    }

    /// Draws a home-advantage matrix using the process rng.
    pub fn generate_matrix(&self) -> OrientationMatrix {
        self.generate_matrix_with(&mut rand::rng())
    }

    /// Draws a home-advantage matrix from the given random source.
    pub fn generate_matrix_with<R: Rng>(&self, rng: &mut R) -> OrientationMatrix {
        generator::generate_matrix(self.team_count, rng)
    }

    /// Generates pairings and packs them into rounds using the process
    /// rng.
    ///
    /// With `try_once` a dead-ended packing attempt surfaces as
    /// [`ScheduleGenerationFailed`]; otherwise attempts repeat until one
    /// succeeds, which for a valid configuration happens with
    /// probability one but without a worst-case bound.
    pub fn generate_schedule(&self, try_once: bool) -> Result<Schedule, ScheduleGenerationFailed> {
        self.generate_schedule_with(try_once, &mut rand::rng())
    }

    /// Generates pairings and packs them into rounds from the given
    /// random source.
    pub fn generate_schedule_with<R: Rng>(
        &self,
        try_once: bool,
        rng: &mut R,
    ) -> Result<Schedule, ScheduleGenerationFailed> {
        let pairings = self.generate_matches_with(rng);
        packer::generate_schedule(pairings, self.round_size(), try_once, rng)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::models::Slot;

    /// Counts schedule pairings per unordered team pair.
    fn unordered_counts(schedule: &Schedule) -> HashMap<(Slot, Slot), usize> {
        let rank = |slot: Slot| slot.team().unwrap_or(u32::MAX);
        let mut counts = HashMap::new();
        for p in schedule.pairings() {
            let key = if rank(p.home) <= rank(p.away) {
                (p.home, p.away)
            } else {
                (p.away, p.home)
            };
            *counts.entry(key).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_rejects_too_few_teams() {
        assert_eq!(RoundRobin::new(0, 1), Err(ConfigError::TooFewTeams(0)));
        assert_eq!(RoundRobin::new(1, 2), Err(ConfigError::TooFewTeams(1)));
    }

    #[test]
    fn test_rejects_zero_meetings() {
        assert_eq!(RoundRobin::new(4, 0), Err(ConfigError::ZeroMeetings));
    }

    #[test]
    fn test_presets() {
        assert_eq!(RoundRobin::single(8).unwrap().meetings(), 1);
        assert_eq!(RoundRobin::double(8).unwrap().meetings(), 2);
        assert_eq!(RoundRobin::triple(8).unwrap().meetings(), 3);
        assert_eq!(RoundRobin::quadruple(8).unwrap().meetings(), 4);
    }

    #[test]
    fn test_derived_sizes_even() {
        let fixture = RoundRobin::single(8).unwrap();
        assert_eq!(fixture.padded_count(), 8);
        assert_eq!(fixture.round_size(), 4);
        assert_eq!(fixture.round_count(), 7);
        assert_eq!(fixture.match_count(), 28);
    }

    #[test]
    fn test_derived_sizes_odd() {
        let fixture = RoundRobin::triple(5).unwrap();
        assert_eq!(fixture.padded_count(), 6);
        assert_eq!(fixture.round_size(), 3);
        assert_eq!(fixture.round_count(), 15);
        assert_eq!(fixture.match_count(), 45);
    }

    #[test]
    fn test_double_four_teams_is_deterministic() {
        // An even meeting count involves no coin flips: any two seeds
        // produce the identical ordered-pair enumeration.
        let fixture = RoundRobin::double(4).unwrap();
        let first = fixture.generate_matches_with(&mut SmallRng::seed_from_u64(0));
        let second = fixture.generate_matches_with(&mut SmallRng::seed_from_u64(99));
        assert_eq!(first, second);

        let expected: Vec<Pairing> = [
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 1),
            (2, 3),
            (2, 4),
            (3, 1),
            (3, 2),
            (3, 4),
            (4, 1),
            (4, 2),
            (4, 3),
        ]
        .iter()
        .map(|&(h, a)| Pairing::new(Slot::Team(h), Slot::Team(a)))
        .collect();
        assert_eq!(first, expected);
    }

    #[test]
    fn test_matrix_is_antisymmetric() {
        let fixture = RoundRobin::single(8).unwrap();
        let matrix = fixture.generate_matrix_with(&mut SmallRng::seed_from_u64(4));

        assert_eq!(matrix.side(), 8);
        for i in 0..8 {
            assert_eq!(matrix.get(i, i), None);
            for j in 0..8 {
                if i != j {
                    let forward = matrix.get(i, j).unwrap();
                    let backward = matrix.get(j, i).unwrap();
                    assert_ne!(forward, backward);
                }
            }
        }
    }

    #[test]
    fn test_matrix_pads_odd_team_counts() {
        let fixture = RoundRobin::single(3).unwrap();
        let matrix = fixture.generate_matrix_with(&mut SmallRng::seed_from_u64(4));
        assert_eq!(matrix.side(), 4);
    }

    #[test]
    fn test_schedule_eight_teams() {
        let fixture = RoundRobin::single(8).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let schedule = fixture.generate_schedule_with(false, &mut rng).unwrap();

        assert_eq!(schedule.round_count(), 7);
        for round in &schedule.rounds {
            assert_eq!(round.len(), 4);
            let mut seen = HashSet::new();
            for pairing in &round.pairings {
                assert!(seen.insert(pairing.home), "slot played twice in a round");
                assert!(seen.insert(pairing.away), "slot played twice in a round");
            }
        }
        let counts = unordered_counts(&schedule);
        assert_eq!(counts.len(), 28);
        assert!(counts.values().all(|&n| n == 1));
    }

    #[test]
    fn test_schedule_idles_each_team_once_per_cycle() {
        let fixture = RoundRobin::single(5).unwrap();
        let mut rng = SmallRng::seed_from_u64(13);
        let schedule = fixture.generate_schedule_with(false, &mut rng).unwrap();

        assert_eq!(schedule.round_count(), 5);
        for round in &schedule.rounds {
            assert_eq!(round.len(), 3);
            assert_eq!(round.pairings.iter().filter(|p| p.is_idle()).count(), 1);
        }
        for team in 1..=5 {
            let idle_rounds = schedule
                .rounds
                .iter()
                .filter(|r| r.pairings.iter().any(|p| p.is_idle() && p.involves(Slot::Team(team))))
                .count();
            assert_eq!(idle_rounds, 1, "team {team} should idle exactly once");
        }
    }

    #[test]
    fn test_schedule_multiset_matches_meetings() {
        let fixture = RoundRobin::double(6).unwrap();
        let mut rng = SmallRng::seed_from_u64(21);
        let schedule = fixture.generate_schedule_with(false, &mut rng).unwrap();

        assert_eq!(schedule.round_count(), 10);
        assert_eq!(schedule.pairing_count(), fixture.match_count());
        let counts = unordered_counts(&schedule);
        assert_eq!(counts.len(), 15);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_try_once_can_fail_and_succeed() {
        // Whether one greedy pass completes depends entirely on the
        // shuffle; across a seed sweep both outcomes must show up.
        let fixture = RoundRobin::single(8).unwrap();
        let mut failures = 0;
        let mut successes = 0;
        for seed in 0..200 {
            let mut rng = SmallRng::seed_from_u64(seed);
            match fixture.generate_schedule_with(true, &mut rng) {
                Ok(schedule) => {
                    successes += 1;
                    assert_eq!(schedule.round_count(), 7);
                }
                Err(ScheduleGenerationFailed) => failures += 1,
            }
        }
        assert!(successes > 0, "no seed produced a schedule");
        assert!(failures > 0, "no seed dead-ended");
    }
}
