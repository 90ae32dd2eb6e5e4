//! A fixed-capacity set of board cells packed into an unsigned integer.
//!
//! Cells are stored row-major with a stride of the const capacity `N`, so a
//! `CellSet<u128, 11>` can hold any board up to 11×11 regardless of the
//! runtime grid size. The type is `no_std` friendly and never allocates.

use core::ops::{BitAnd, BitOr, BitOrAssign, Not};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::MAX_BOARD_SIZE;
use crate::grid::Coordinate;

/// Cell set wide enough for every supported board size.
pub type Cells = CellSet<u128, MAX_BOARD_SIZE>;

/// Errors returned by cell set operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellSetError {
    /// Capacity N*N exceeds the bit width of `T`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Coordinate lies outside the `N×N` capacity.
    OutOfRange(Coordinate),
}

impl fmt::Display for CellSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSetError::SizeTooLarge { n, capacity } => {
                write!(f, "cell set of {}x{} exceeds {} bits", n, n, capacity)
            }
            CellSetError::OutOfRange(c) => {
                write!(f, "cell ({}, {}) outside cell set capacity", c.row, c.col)
            }
        }
    }
}

/// Set of coordinates inside an `N×N` square, one bit per cell.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CellSet<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    const CELLS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Empty set without a capacity check.
    #[inline]
    pub fn new() -> Self {
        CellSet { bits: T::zero() }
    }

    /// Empty set, failing if `N*N` cells do not fit in `T`.
    pub fn try_new() -> Result<Self, CellSetError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::CELLS > capacity {
            Err(CellSetError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(Self::new())
        }
    }

    #[inline]
    fn bit(coord: Coordinate) -> Result<T, CellSetError> {
        if coord.row >= N || coord.col >= N {
            return Err(CellSetError::OutOfRange(coord));
        }
        Ok(T::one() << (coord.row * N + coord.col))
    }

    /// Number of cells in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test; coordinates beyond capacity are never members.
    pub fn contains(&self, coord: Coordinate) -> bool {
        match Self::bit(coord) {
            Ok(bit) => !(self.bits & bit).is_zero(),
            Err(_) => false,
        }
    }

    /// Add a cell, returning `true` if it was not already present.
    pub fn insert(&mut self, coord: Coordinate) -> Result<bool, CellSetError> {
        let bit = Self::bit(coord)?;
        let fresh = (self.bits & bit).is_zero();
        self.bits = self.bits | bit;
        Ok(fresh)
    }

    /// Remove a cell, returning `true` if it was present.
    pub fn remove(&mut self, coord: Coordinate) -> Result<bool, CellSetError> {
        let bit = Self::bit(coord)?;
        let present = !(self.bits & bit).is_zero();
        self.bits = self.bits & !bit;
        Ok(present)
    }

    /// True if the two sets share at least one cell.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// Build a set from coordinates.
    pub fn from_cells<I>(iter: I) -> Result<Self, CellSetError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut set = Self::new();
        for c in iter {
            set.insert(c)?;
        }
        Ok(set)
    }

    /// Iterate members in row-major order.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter { set: self, idx: 0 }
    }
}

impl<T, const N: usize> Default for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet<{}, {}>:", any::type_name::<T>(), N)?;
        for r in 0..N {
            for c in 0..N {
                let mark = if self.contains(Coordinate::new(r, c)) { '■' } else { '□' };
                write!(f, "{} ", mark)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Row-major iterator over the members of a [`CellSet`].
pub struct Iter<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    set: &'a CellSet<T, N>,
    idx: usize,
}

impl<T, const N: usize> Iterator for Iter<'_, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if !((self.set.bits >> idx) & T::one()).is_zero() {
                return Some(Coordinate::new(idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        CellSet { bits: self.bits & rhs.bits }
    }
}

impl<T, const N: usize> BitOr for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        CellSet { bits: self.bits | rhs.bits }
    }
}

/// Complement within the `N×N` capacity.
impl<T, const N: usize> Not for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn not(self) -> Self {
        CellSet { bits: !self.bits & Self::mask() }
    }
}

impl<T, const N: usize> BitOrAssign for CellSet<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
