//! Grid positions.

use core::fmt;

/// A position on the grid: `x` is the row, `y` the column.
///
/// Components are signed so that off-grid input can be expressed and then
/// rejected by the board instead of being unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether both components lie in `[0, size)`.
    pub fn is_within(self, size: usize) -> bool {
        self.grid_index(size).is_some()
    }

    /// `(row, col)` indices on a grid of side `size`, if the coordinate is on it.
    pub fn grid_index(self, size: usize) -> Option<(usize, usize)> {
        let row = usize::try_from(self.x).ok()?;
        let col = usize::try_from(self.y).ok()?;
        (row < size && col < size).then_some((row, col))
    }

    /// The 3×3 block centred on this coordinate, itself included.
    pub fn neighbourhood(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1).flat_map(move |dx| (-1..=1).map(move |dy| self.offset(dx, dy)))
    }

    /// King-move distance between two coordinates.
    pub fn chebyshev_distance(self, other: Coordinate) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
