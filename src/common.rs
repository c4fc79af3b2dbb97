//! Common types for the game: board errors and shot outcomes.

use crate::coord::Coordinate;
use crate::mask::MaskError;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// No vessel at the target.
    Miss,
    /// A vessel was damaged but still floats.
    Hit,
    /// The shot took a vessel's last hit point.
    Sunk,
}

impl ShotOutcome {
    /// A damaging but non-lethal hit lets the shooter fire again.
    pub fn keeps_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

/// Errors returned by board, vessel and planner operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying mask error.
    Mask(MaskError),
    /// Vessel length outside the supported range.
    InvalidLength(usize),
    /// Vessel cell is off the grid, overlaps or touches another vessel.
    InvalidPlacement(Coordinate),
    /// The board already holds a full fleet.
    FleetComplete,
    /// Shot target is off the grid.
    OutOfBounds(Coordinate),
    /// Shot target was already fired upon or borders a sunk vessel.
    AlreadyTargeted(Coordinate),
    /// Random placement gave up after the attempt limit.
    PlacementExhausted { attempts: usize },
}

impl BoardError {
    /// Shot errors that are answered by asking the shooter again.
    pub fn is_retryable_shot(&self) -> bool {
        matches!(self, BoardError::OutOfBounds(_) | BoardError::AlreadyTargeted(_))
    }
}

impl From<MaskError> for BoardError {
    fn from(err: MaskError) -> Self {
        BoardError::Mask(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::Mask(e) => write!(f, "mask error: {}", e),
            BoardError::InvalidLength(len) => write!(f, "vessel length {} is not supported", len),
            BoardError::InvalidPlacement(c) => write!(f, "vessel cannot occupy {}", c),
            BoardError::FleetComplete => write!(f, "board already holds a full fleet"),
            BoardError::OutOfBounds(c) => write!(f, "shot at {} is outside the battlefield", c),
            BoardError::AlreadyTargeted(c) => write!(f, "cell {} has already been fired upon", c),
            BoardError::PlacementExhausted { attempts } => {
                write!(f, "fleet placement gave up after {} attempts", attempts)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
