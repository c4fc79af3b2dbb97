//! Board state: vessel placement, forbidden cells and shot resolution.

use alloc::vec::Vec;
use log::debug;

use crate::common::{BoardError, ShotOutcome};
use crate::config::{BoardMask, BOARD_SIZE, NUM_VESSELS};
use crate::coord::Coordinate;
use crate::ship::Vessel;

/// Display state of a single cell, consumed by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
    /// Cell bordering a sunk vessel.
    SunkBuffer,
}

/// Row-major grid of cell states.
pub type DisplayGrid = [[CellState; BOARD_SIZE]; BOARD_SIZE];

/// One side's board: its own fleet plus everything fired at it.
///
/// During placement the forbidden set holds vessel cells and their one-cell
/// buffer so that no two vessels touch, not even diagonally. Once the fleet
/// is complete [`Board::begin_battle`] clears it, and from then on it holds
/// shot cells and the borders of sunk vessels.
#[derive(Clone, Debug)]
pub struct Board {
    vessels: Vec<Vessel>,
    ship_map: BoardMask,
    forbidden: BoardMask,
    cells: DisplayGrid,
    live_vessels: usize,
}

impl Board {
    /// Empty board with no vessels.
    pub fn new() -> Self {
        Board {
            vessels: Vec::with_capacity(NUM_VESSELS),
            ship_map: BoardMask::new(),
            forbidden: BoardMask::new(),
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
            live_vessels: 0,
        }
    }

    /// Place the given vessels and open the board for shooting.
    pub fn from_vessels<I>(vessels: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Vessel>,
    {
        let mut board = Board::new();
        for vessel in vessels {
            board.add_vessel(vessel)?;
        }
        board.begin_battle();
        Ok(board)
    }

    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Whether `c` lies on the grid.
    pub fn contains(&self, c: Coordinate) -> bool {
        c.is_within(BOARD_SIZE)
    }

    /// Vessels in placement order, sunk ones included.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Vessels with at least one hit point left.
    pub fn live_vessel_count(&self) -> usize {
        self.live_vessels
    }

    pub fn all_sunk(&self) -> bool {
        self.live_vessels == 0
    }

    pub fn is_forbidden(&self, c: Coordinate) -> bool {
        self.forbidden.contains(c)
    }

    pub fn forbidden(&self) -> BoardMask {
        self.forbidden
    }

    /// Occupancy mask of all vessel cells.
    pub fn ship_map(&self) -> BoardMask {
        self.ship_map
    }

    pub fn cell(&self, c: Coordinate) -> Option<CellState> {
        c.grid_index(BOARD_SIZE).map(|(r, col)| self.cells[r][col])
    }

    /// Place a vessel. Every cell must be on the grid and not forbidden;
    /// on success the vessel's one-cell buffer becomes forbidden too.
    pub fn add_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if self.vessels.len() >= NUM_VESSELS {
            return Err(BoardError::FleetComplete);
        }
        if let Some(cell) = vessel.cells().find(|&c| !self.contains(c)) {
            return Err(BoardError::InvalidPlacement(cell));
        }
        let footprint = BoardMask::from_cells(vessel.cells())?;
        // vessel cells run in row-major order, so this is the first clash
        if let Some(cell) = (footprint & self.forbidden).cells().next() {
            return Err(BoardError::InvalidPlacement(cell));
        }
        for cell in footprint.cells() {
            self.set_cell(cell, CellState::Ship);
        }
        self.ship_map |= footprint;
        self.forbidden |= footprint;
        self.vessels.push(vessel);
        self.live_vessels += 1;
        self.contour(&vessel, false)
    }

    /// Forget the placement buffers so every cell can be targeted.
    pub fn begin_battle(&mut self) {
        self.forbidden.clear();
    }

    /// Fire at `target`.
    ///
    /// Off-grid targets fail with `OutOfBounds` and forbidden ones with
    /// `AlreadyTargeted`; neither changes the board. Sinking a vessel
    /// forbids its border and marks the newly forbidden cells as
    /// [`CellState::SunkBuffer`].
    pub fn shot(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        if !self.contains(target) {
            return Err(BoardError::OutOfBounds(target));
        }
        if self.forbidden.contains(target) {
            return Err(BoardError::AlreadyTargeted(target));
        }
        self.forbidden.insert(target)?;

        let Some(idx) = self.vessels.iter().position(|v| v.occupies(target)) else {
            self.set_cell(target, CellState::Miss);
            debug!("shot at {} missed", target);
            return Ok(ShotOutcome::Miss);
        };

        self.set_cell(target, CellState::Hit);
        if self.vessels[idx].register_hit() > 0 {
            debug!("shot at {} hit vessel {}", target, idx);
            return Ok(ShotOutcome::Hit);
        }

        self.live_vessels -= 1;
        let vessel = self.vessels[idx];
        self.contour(&vessel, true)?;
        debug!(
            "shot at {} sank vessel {}, {} still afloat",
            target, idx, self.live_vessels
        );
        Ok(ShotOutcome::Sunk)
    }

    /// Cell states for rendering. With `reveal_ships == false` undamaged
    /// vessel cells read as empty.
    pub fn display_grid(&self, reveal_ships: bool) -> DisplayGrid {
        if reveal_ships {
            return self.cells;
        }
        let mut grid = self.cells;
        for row in grid.iter_mut() {
            for cell in row.iter_mut() {
                if *cell == CellState::Ship {
                    *cell = CellState::Empty;
                }
            }
        }
        grid
    }

    /// Forbid every on-grid, non-vessel cell around `vessel` that is not
    /// forbidden yet.
    fn contour(&mut self, vessel: &Vessel, sunk: bool) -> Result<(), BoardError> {
        for cell in vessel.cells() {
            for around in cell.neighbourhood() {
                if !self.contains(around)
                    || self.forbidden.contains(around)
                    || self.ship_map.contains(around)
                {
                    continue;
                }
                if sunk {
                    self.set_cell(around, CellState::SunkBuffer);
                }
                self.forbidden.insert(around)?;
            }
        }
        Ok(())
    }

    fn set_cell(&mut self, c: Coordinate, state: CellState) {
        if let Some((r, col)) = c.grid_index(BOARD_SIZE) {
            self.cells[r][col] = state;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
