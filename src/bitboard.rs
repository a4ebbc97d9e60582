//! A fixed-size cell set using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as an `N×N` grid packed into an unsigned integer `T`, one bit
//! per cell in row-major order. Fleet occupancy, ship hits and shot records
//! are all [`Grid`]s, the 8×8 instance keyed by [`Coordinate`].

use core::ops::{BitOrAssign, Not};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

use crate::config::BOARD_SIZE;
use crate::coord::Coordinate;

/// A fixed-size N×N bit set stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

/// The game board's cell set.
pub type Grid = BitBoard<u64, { BOARD_SIZE }>;

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`N * N`).
    pub const CELLS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::CELLS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::CELLS) - T::one()
        }
    }

    /// Create a new empty set.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no cell is set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns true if every cell is set.
    pub fn is_full(&self) -> bool {
        self.bits == Self::mask()
    }

    /// Returns true if the two sets share at least one cell.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.bits & other.bits).is_zero()
    }

    /// Iterator over the indices of set cells, ascending.
    #[inline]
    pub fn indices(&self) -> SetBits<T, N> {
        SetBits {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T> BitBoard<T, { BOARD_SIZE }>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Whether `coord` is in the set.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        ((self.bits >> coord.index()) & T::one()) != T::zero()
    }

    /// Add `coord`, returning `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        let fresh = !self.contains(coord);
        self.bits = self.bits | (T::one() << coord.index());
        fresh
    }

    /// Cells in the set, row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.indices().filter_map(Coordinate::from_index)
    }

    /// Cells not in the set, row by row.
    pub fn free_coords(&self) -> impl Iterator<Item = Coordinate> + '_ {
        Coordinate::all().filter(move |c| !self.contains(*c))
    }
}

impl<T> FromIterator<Coordinate> for BitBoard<T, { BOARD_SIZE }>
where
    T: PrimInt + Unsigned + Zero,
{
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        let mut board = Self::new();
        for c in iter {
            board.insert(c);
        }
        board
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitBoard<{}>[", N)?;
        for (i, idx) in self.indices().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", idx)?;
        }
        write!(f, "]")
    }
}

/// Iterator over the set cells of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<T, const N: usize> {
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for SetBits<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some(idx);
            }
        }
        None
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}

/// Complement within the board's `N*N` cells.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        BitBoard {
            bits: !self.bits & Self::mask(),
        }
    }
}
