//! Grid geometry: board coordinates, cardinal directions and position text.
//!
//! Columns are lettered `A..H` and stored zero-based; rows are numbered
//! `1..8` and stored as written. A [`Coordinate`] can only be built for a
//! cell on the board, so every coordinate held by a ship, fleet or shot
//! record is in bounds by construction.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;
use crate::config::BOARD_SIZE;

/// Returns `true` if a zero-based `column` and one-based `row` lie on the board.
pub const fn is_valid(column: i32, row: i32) -> bool {
    column >= 0 && column < BOARD_SIZE as i32 && row >= 1 && row <= BOARD_SIZE as i32
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "std",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Coordinate {
    column: u8,
    row: u8,
}

impl Coordinate {
    /// Number of cells on the board.
    pub const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

    /// Build a coordinate from a zero-based column and a one-based row.
    pub const fn new(column: u8, row: u8) -> Option<Self> {
        if is_valid(column as i32, row as i32) {
            Some(Self { column, row })
        } else {
            None
        }
    }

    /// Zero-based column index (`A` = 0).
    pub const fn column(&self) -> u8 {
        self.column
    }

    /// One-based row number.
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Column letter, upper case.
    pub const fn column_letter(&self) -> char {
        (b'A' + self.column) as char
    }

    /// Row-major cell index in `0..BOARD_SIZE * BOARD_SIZE`.
    pub const fn index(&self) -> usize {
        (self.row as usize - 1) * BOARD_SIZE + self.column as usize
    }

    /// Inverse of [`Coordinate::index`].
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= Self::CELLS {
            return None;
        }
        Some(Self {
            column: (index % BOARD_SIZE) as u8,
            row: (index / BOARD_SIZE) as u8 + 1,
        })
    }

    /// Every cell on the board, row by row.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..Self::CELLS).filter_map(Coordinate::from_index)
    }

    /// The cell `n` steps away in `direction`, if it is still on the board.
    pub fn step(self, direction: Direction, n: usize) -> Option<Self> {
        let (dc, dr) = direction.offset();
        let n = i32::try_from(n).ok()?;
        let column = self.column as i32 + dc * n;
        let row = self.row as i32 + dr * n;
        if is_valid(column, row) {
            Some(Self {
                column: column as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    /// Whether both coordinates share a row or a column.
    pub fn is_collinear_with(&self, other: &Coordinate) -> bool {
        self.row == other.row || self.column == other.column
    }

    /// Direction of travel from `self` towards a collinear `other`.
    ///
    /// Returns `None` when the cells are not collinear or are the same cell.
    pub fn direction_to(&self, other: &Coordinate) -> Option<Direction> {
        if self == other {
            return None;
        }
        if self.row == other.row {
            Some(if other.column > self.column {
                Direction::East
            } else {
                Direction::West
            })
        } else if self.column == other.column {
            Some(if other.row > self.row {
                Direction::South
            } else {
                Direction::North
            })
        } else {
            None
        }
    }
}

/// Distance between two cells along their shared row or column.
///
/// `None` when the cells share neither.
pub fn distance(a: &Coordinate, b: &Coordinate) -> Option<usize> {
    if a.row == b.row {
        Some(a.column.abs_diff(b.column) as usize)
    } else if a.column == b.column {
        Some(a.row.abs_diff(b.row) as usize)
    } else {
        None
    }
}

/// Parse a two-character position such as `"A1"` or `"h8"`.
///
/// Anything else, including out-of-range letters and digits, yields `None`.
pub fn parse_position(text: &str) -> Option<Coordinate> {
    text.parse().ok()
}

impl FromStr for Coordinate {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (col_ch, row_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(c), Some(r), None) => (c.to_ascii_uppercase(), r),
            _ => return Err(BoardError::InvalidInputFormat),
        };
        if !col_ch.is_ascii_uppercase() || !row_ch.is_ascii_digit() {
            return Err(BoardError::InvalidInputFormat);
        }
        let column = col_ch as u8 - b'A';
        let row = row_ch as u8 - b'0';
        Coordinate::new(column, row).ok_or(BoardError::OutOfBounds)
    }
}

impl TryFrom<String> for Coordinate {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Coordinate> for String {
    fn from(c: Coordinate) -> Self {
        use core::fmt::Write;
        let mut s = String::with_capacity(2);
        let _ = write!(s, "{}", c);
        s
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row)
    }
}

/// One of the four cardinal directions a ship can extend in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 1.
    North,
    /// Towards column H.
    East,
    /// Towards row 8.
    South,
    /// Towards column A.
    West,
}

impl Direction {
    /// All four directions in clockwise order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// `(column, row)` delta of a single step.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}
