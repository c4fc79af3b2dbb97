//! A fixed-size cell mask over an `N×N` grid, packed into an unsigned integer.
//!
//! Masks are `no_std` friendly and `Copy`; the board keeps its ship
//! footprint and its forbidden cells in two of them. Cells are addressed by
//! [`Coordinate`], with `x` selecting the row and `y` the column.

use core::fmt;
use core::ops::{BitAnd, BitOrAssign};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coord::Coordinate;

/// Errors returned by mask operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {
    /// Coordinate lies outside `[0, N)`.
    OutOfBounds(Coordinate),
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::OutOfBounds(c) => write!(f, "cell {} is outside the mask", c),
        }
    }
}

/// Set of cells on an `N×N` grid stored in the bits of `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellMask<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Empty mask. `T` must hold at least `N*N` bits.
    #[inline]
    pub fn new() -> Self {
        CellMask { bits: T::zero() }
    }

    #[inline]
    fn index(c: Coordinate) -> Option<usize> {
        c.grid_index(N).map(|(row, col)| row * N + col)
    }

    /// Number of cells in the mask.
    pub fn count(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `c` is in the mask. Off-grid coordinates are never members.
    pub fn contains(&self, c: Coordinate) -> bool {
        match Self::index(c) {
            Some(idx) => ((self.bits >> idx) & T::one()) != T::zero(),
            None => false,
        }
    }

    /// Adds `c` to the mask.
    pub fn insert(&mut self, c: Coordinate) -> Result<(), MaskError> {
        let idx = Self::index(c).ok_or(MaskError::OutOfBounds(c))?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    #[inline]
    pub fn clear(&mut self) {
        self.bits = T::zero();
    }

    /// Builds a mask from coordinates, failing on the first off-grid one.
    pub fn from_cells<I>(cells: I) -> Result<Self, MaskError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut mask = Self::new();
        for c in cells {
            mask.insert(c)?;
        }
        Ok(mask)
    }

    /// Iterator over member cells in row-major order.
    pub fn cells(&self) -> Cells<'_, T, N> {
        Cells { mask: self, idx: 0 }
    }
}

impl<T, const N: usize> Default for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask<{}>:", N)?;
        fmt::Display::fmt(self, f)
    }
}

impl<T, const N: usize> fmt::Display for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..N {
            for c in 0..N {
                let set = self.contains(Coordinate::new(r as i32, c as i32));
                write!(f, "{} ", if set { '■' } else { '□' })?;
            }
            if r + 1 < N {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the cells of a [`CellMask`].
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    mask: &'a CellMask<T, N>,
    idx: usize,
}

impl<T, const N: usize> Iterator for Cells<'_, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.mask.bits >> idx) & T::one()) != T::zero() {
                return Some(Coordinate::new((idx / N) as i32, (idx % N) as i32));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellMask { bits: self.bits & rhs.bits }
    }
}

impl<T, const N: usize> BitOrAssign for CellMask<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
