//! Fixture domain models.
//!
//! Core data types for round-robin fixture lists: the slots that meet,
//! the ordered pairings they form, the rounds a schedule packs them
//! into, and the orientation matrix recording home-advantage draws.

mod matrix;
mod pairing;
mod round;

pub use matrix::OrientationMatrix;
pub use pairing::{Pairing, Slot};
pub use round::{Round, Schedule};
