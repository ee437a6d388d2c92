//! Error types for fixture generation.

use thiserror::Error;

/// Rejected configuration, caught before any generation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A round-robin needs at least two teams.
    #[error("at least two teams are required, got {0}")]
    TooFewTeams(u32),

    /// Every pair of teams has to meet at least once.
    #[error("meeting count must be at least one")]
    ZeroMeetings,
}

/// No pairing in the pool fits the round under construction.
///
/// Round-fill dead-end signal. It fails the surrounding packing attempt
/// and is never returned by `generate_schedule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no pairing without a shared competitor is left in the pool")]
pub struct NoUniqueMatch;

/// A packing attempt dead-ended and retrying was disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("schedule generation failed: the shuffled pairing pool dead-ended")]
pub struct ScheduleGenerationFailed;
