use crate::mask::CellMask;

/// Side length of the square grid.
pub const BOARD_SIZE: usize = 6;
/// Vessels per fleet.
pub const NUM_VESSELS: usize = 7;
/// Vessel lengths in placement order, longest first.
pub const FLEET: [usize; NUM_VESSELS] = [3, 2, 2, 1, 1, 1, 1];
pub const MAX_VESSEL_LENGTH: usize = 3;

/// Random placement attempts allowed for a whole fleet before the board is
/// abandoned and regenerated.
pub const PLACEMENT_ATTEMPT_LIMIT: usize = 1800;

/// Total number of vessel cells in a fleet.
pub const TOTAL_VESSEL_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Mask type sized for the board.
pub type BoardMask = CellMask<u64, BOARD_SIZE>;
