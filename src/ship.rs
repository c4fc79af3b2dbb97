//! Vessel definitions: geometry derived from bow, orientation and length.

use rand::Rng;

use crate::common::BoardError;
use crate::config::MAX_VESSEL_LENGTH;
use crate::coord::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells run along the row (increasing `y`).
    Horizontal,
    /// Cells run down the column (increasing `x`).
    Vertical,
}

impl Orientation {
    /// Per-cell step `(dx, dy)` from the bow.
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A vessel: a straight run of `length` cells starting at its bow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    bow: Coordinate,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Vessel {
    /// Build an undamaged vessel. Lengths outside `1..=MAX_VESSEL_LENGTH`
    /// are rejected; bounds are checked when it is added to a board.
    pub fn new(length: usize, bow: Coordinate, orientation: Orientation) -> Result<Self, BoardError> {
        if !(1..=MAX_VESSEL_LENGTH).contains(&length) {
            return Err(BoardError::InvalidLength(length));
        }
        Ok(Vessel {
            length,
            bow,
            orientation,
            remaining_hits: length,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Hits still needed to sink the vessel.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    /// Occupied cells, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dx, dy) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(dx * i, dy * i))
    }

    pub fn occupies(&self, c: Coordinate) -> bool {
        self.cells().any(|cell| cell == c)
    }

    /// Record a confirmed hit and return the hits still remaining.
    pub(crate) fn register_hit(&mut self) -> usize {
        self.remaining_hits = self.remaining_hits.saturating_sub(1);
        self.remaining_hits
    }
}
