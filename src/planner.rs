//! Random fleet placement.
//!
//! Vessels are dropped at random bows and orientations; a collision just
//! draws a new candidate for the same length. There is no backtracking: once
//! the attempt budget for the whole fleet is spent the board is thrown away
//! and [`PlacementPlanner::generate`] starts again on a fresh one.

use log::{debug, trace};
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, FLEET, PLACEMENT_ATTEMPT_LIMIT};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Vessel};

/// Generates complete, non-touching fleets.
#[derive(Debug, Clone, Copy)]
pub struct PlacementPlanner {
    attempt_limit: usize,
}

impl PlacementPlanner {
    pub fn new() -> Self {
        Self {
            attempt_limit: PLACEMENT_ATTEMPT_LIMIT,
        }
    }

    /// Planner with a custom attempt budget. The budget never drops below
    /// one attempt per vessel.
    pub fn with_attempt_limit(limit: usize) -> Self {
        Self {
            attempt_limit: limit.max(FLEET.len()),
        }
    }

    pub fn attempt_limit(&self) -> usize {
        self.attempt_limit
    }

    /// Vessel lengths placed on every board.
    pub fn fleet(&self) -> &'static [usize] {
        &FLEET
    }

    /// One placement pass on a fresh board.
    ///
    /// Returns `PlacementExhausted` when the attempt budget runs out. On
    /// success the placement buffers are already cleared.
    pub fn try_generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, BoardError> {
        let mut board = Board::new();
        let mut attempts = 0;
        for &length in FLEET.iter() {
            loop {
                attempts += 1;
                if attempts > self.attempt_limit {
                    debug!("placement exhausted after {} attempts", self.attempt_limit);
                    return Err(BoardError::PlacementExhausted {
                        attempts: self.attempt_limit,
                    });
                }
                let bow = Coordinate::new(
                    rng.random_range(0..BOARD_SIZE as i32),
                    rng.random_range(0..BOARD_SIZE as i32),
                );
                let vessel = Vessel::new(length, bow, Orientation::random(rng))?;
                match board.add_vessel(vessel) {
                    Ok(()) => break,
                    Err(BoardError::InvalidPlacement(cell)) => {
                        trace!("length {} at {} rejected at {}", length, bow, cell);
                    }
                    Err(e) => return Err(e),
                }
            }
        }
        board.begin_battle();
        debug!("fleet placed in {} attempts", attempts);
        Ok(board)
    }

    /// Generate a board, regenerating from scratch whenever a pass is
    /// exhausted. Other errors are returned as-is.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, BoardError> {
        loop {
            match self.try_generate(rng) {
                Err(BoardError::PlacementExhausted { .. }) => continue,
                other => return other,
            }
        }
    }
}

impl Default for PlacementPlanner {
    fn default() -> Self {
        Self::new()
    }
}
