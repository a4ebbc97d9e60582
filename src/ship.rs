//! Ship definitions, endpoint geometry and damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::Grid;
use crate::common::BoardError;
use crate::coord::{distance, Coordinate, Direction};

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Lifecycle of a single ship. No transition ever goes backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum ShipStatus {
    /// No positions assigned yet.
    Unplaced,
    /// Positioned, no hits.
    Placed,
    /// Positioned, some but not all cells hit.
    Damaged,
    /// Every cell hit.
    Destroyed,
}

/// Cells from `start` to `end` inclusive for a ship of `length` cells.
///
/// The endpoints must share a row or column and span exactly `length` cells.
/// Cells are returned in order of travel from `start`.
pub fn line_between(
    start: Coordinate,
    end: Coordinate,
    length: usize,
) -> Result<Vec<Coordinate>, BoardError> {
    let span = distance(&start, &end).ok_or(BoardError::NotCollinear)? + 1;
    if length == 0 || span != length {
        return Err(BoardError::WrongLength {
            expected: length,
            actual: span,
        });
    }
    let Some(direction) = start.direction_to(&end) else {
        return Ok(alloc::vec![start]);
    };
    run_from(start, direction, length).ok_or(BoardError::OutOfBounds)
}

/// `length` contiguous cells starting at `start` and heading `direction`.
///
/// `None` if any cell would fall off the board.
pub fn run_from(start: Coordinate, direction: Direction, length: usize) -> Option<Vec<Coordinate>> {
    (0..length).map(|i| start.step(direction, i)).collect()
}

/// A ship with its assigned cells and the subset of them that has been hit.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    positions: Vec<Coordinate>,
    footprint: Grid,
    hits: Grid,
}

impl Ship {
    /// An unplaced ship of the given type.
    pub fn new(ship_type: ShipType) -> Self {
        Self {
            ship_type,
            positions: Vec::new(),
            footprint: Grid::new(),
            hits: Grid::new(),
        }
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn size(&self) -> usize {
        self.ship_type.length()
    }

    /// Assigned cells in placement order; empty until placed.
    pub fn positions(&self) -> &[Coordinate] {
        &self.positions
    }

    /// Occupancy of the ship on the board.
    pub fn footprint(&self) -> Grid {
        self.footprint
    }

    pub fn is_placed(&self) -> bool {
        !self.positions.is_empty()
    }

    /// Whether the ship occupies `coord`.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.footprint.contains(coord)
    }

    /// Place the ship between two endpoints.
    ///
    /// On error the ship is left unplaced.
    pub fn try_place(&mut self, start: Coordinate, end: Coordinate) -> Result<(), BoardError> {
        if self.is_placed() {
            return Err(BoardError::AlreadyPlaced);
        }
        let cells = line_between(start, end, self.size())?;
        self.commit(cells);
        Ok(())
    }

    /// Store validated cells. Callers guarantee `cells` came from [`line_between`].
    pub(crate) fn commit(&mut self, cells: Vec<Coordinate>) {
        debug_assert_eq!(cells.len(), self.size());
        self.footprint = cells.iter().copied().collect();
        self.positions = cells;
    }

    /// Record a hit at `coord`.
    ///
    /// Returns `true` only when `coord` is one of the ship's cells and had not
    /// been hit before; repeated hits are ignored.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        self.contains(coord) && self.hits.insert(coord)
    }

    /// Number of distinct cells hit.
    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    /// Hit cells, in placement order.
    pub fn hit_positions(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.positions.iter().copied().filter(|c| self.hits.contains(*c))
    }

    /// Check if the ship is destroyed (placed and every cell hit).
    pub fn is_destroyed(&self) -> bool {
        self.is_placed() && self.hit_count() == self.positions.len()
    }

    pub fn status(&self) -> ShipStatus {
        if !self.is_placed() {
            ShipStatus::Unplaced
        } else if self.is_destroyed() {
            ShipStatus::Destroyed
        } else if self.hits.is_empty() {
            ShipStatus::Placed
        } else {
            ShipStatus::Damaged
        }
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship {{ name: \"{}\", positions: [", self.name())?;
        for (i, p) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p)?;
        }
        write!(f, "], hits: {}, status: {:?} }}", self.hit_count(), self.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    #[test]
    fn line_between_follows_start_to_end() {
        let cells = line_between(c("D4"), c("D1"), 4).unwrap();
        assert_eq!(cells, alloc::vec![c("D4"), c("D3"), c("D2"), c("D1")]);
        let cells = line_between(c("B2"), c("E2"), 4).unwrap();
        assert_eq!(cells, alloc::vec![c("B2"), c("C2"), c("D2"), c("E2")]);
    }

    #[test]
    fn single_cell_ship() {
        assert_eq!(line_between(c("C3"), c("C3"), 1).unwrap(), alloc::vec![c("C3")]);
        assert_eq!(
            line_between(c("C3"), c("C3"), 2),
            Err(BoardError::WrongLength {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn run_from_rejects_edges() {
        assert!(run_from(c("A1"), Direction::North, 2).is_none());
        assert!(run_from(c("E1"), Direction::East, 5).is_none());
        assert_eq!(run_from(c("D1"), Direction::East, 5).unwrap().len(), 5);
    }
}
