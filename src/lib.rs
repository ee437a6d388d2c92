//! Round-robin fixture generation.
//!
//! Builds the pairing list for a round-robin competition, where every
//! pair of teams meets a configured number of times, and packs those
//! pairings into rounds in which no team appears twice. Odd team counts
//! get a bye slot, so every round has the same size and exactly one
//! team idles per round.
//!
//! # Modules
//!
//! - **`models`**: Domain types - `Slot`, `Pairing`, `Round`,
//!   `Schedule`, `OrientationMatrix`
//! - **`scheduler`**: `RoundRobin` configuration and generation entry
//!   points
//! - **`packer`**: Randomized greedy packing of pairings into rounds
//! - **`error`**: Typed failures for configuration and packing
//!
//! # Algorithm
//!
//! The meeting multiplicity decomposes into full double cycles plus an
//! optional single-cycle remainder. A double cycle enumerates every
//! ordered pair directly; the single cycle uses the circle construction
//! with a coin flip per pairing for home advantage. Packing shuffles
//! the pairing pool and fills rounds greedily, reshuffling and starting
//! over whenever a round cannot be completed.
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in Sports"
//! - Rasmussen & Trick (2008), "Round robin scheduling - a survey"

pub mod error;
mod generator;
pub mod models;
pub mod packer;
pub mod scheduler;
