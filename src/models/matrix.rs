//! Home-advantage orientation matrix.
//!
//! Records which side of each pairing was drawn as home in one single
//! round-robin pass. Inspection tooling: the round packer does not need
//! it, but it makes the coin-flip orientation auditable.

use serde::{Deserialize, Serialize};

use super::{Pairing, Slot};

/// A square home/away designation matrix.
///
/// The side length is the team count rounded up to even; for odd team
/// counts the last row and column belong to the bye. Cell `(i, j)` is
/// `Some(true)` when slot `i` was drawn home against slot `j`,
/// `Some(false)` when it was drawn away, and `None` on the diagonal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientationMatrix {
    cells: Vec<Vec<Option<bool>>>,
}

impl OrientationMatrix {
    /// Builds the matrix from one single-cycle pass.
    ///
    /// Every pairing sets its home cell to `Some(true)` and the mirrored
    /// cell to `Some(false)`; untouched cells stay `None`.
    pub fn from_pairings(side: usize, pairings: &[Pairing]) -> Self {
        let mut cells = vec![vec![None; side]; side];
        for pairing in pairings {
            let home = slot_index(pairing.home, side);
            let away = slot_index(pairing.away, side);
            cells[home][away] = Some(true);
            cells[away][home] = Some(false);
        }
        Self { cells }
    }

    /// Side length of the matrix (padded team count).
    pub fn side(&self) -> usize {
        self.cells.len()
    }

    /// Cell at (`home`, `away`), both 0-based slot indices.
    ///
    /// # Panics
    /// Panics if either index is outside `0..side()`.
    pub fn get(&self, home: usize, away: usize) -> Option<bool> {
        self.cells[home][away]
    }

    /// The full matrix, row by row.
    pub fn rows(&self) -> &[Vec<Option<bool>>] {
        &self.cells
    }
}

/// 0-based matrix index of a slot; the bye takes the last index.
fn slot_index(slot: Slot, side: usize) -> usize {
    match slot {
        Slot::Team(id) => (id - 1) as usize,
        Slot::Bye => side - 1,
    }
}
