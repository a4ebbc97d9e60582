//! A player's fleet: ordered ships, the fleet-wide occupancy map, and shot
//! resolution against it.

use alloc::vec::Vec;

use crate::bitboard::Grid;
use crate::common::{BoardError, ShotOutcome};
use crate::config::{PRESET_LAYOUT, SHIPS};
use crate::coord::Coordinate;
use crate::ship::{line_between, Ship, ShipStatus, ShipType};
use crate::shots::ShotRecord;

/// Display classification of a single cell, derived from a fleet and the
/// shots fired at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Not fired upon and not revealed.
    Unknown,
    /// Revealed empty cell.
    Water,
    /// Revealed ship cell not yet hit.
    Ship,
    /// Fired upon, ship present.
    Hit,
    /// Fired upon, empty.
    Miss,
}

/// Serializable view of one ship.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct ShipSummary {
    pub name: &'static str,
    pub size: usize,
    pub positions: Vec<Coordinate>,
    pub hits: usize,
    pub status: ShipStatus,
}

/// Ships in roster order. No two ships ever share a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
    occupied: Grid,
}

impl Fleet {
    /// An unplaced fleet with one ship per roster entry.
    pub fn new(roster: &[ShipType]) -> Self {
        Self {
            ships: roster.iter().copied().map(Ship::new).collect(),
            occupied: Grid::new(),
        }
    }

    /// An unplaced fleet of the standard roster.
    pub fn standard() -> Self {
        Self::new(&SHIPS)
    }

    /// The standard roster placed at the fixed preset layout.
    pub fn preset() -> Result<Self, BoardError> {
        let mut fleet = Self::standard();
        for (index, (start, end)) in PRESET_LAYOUT.iter().enumerate() {
            fleet.place(index, start.parse()?, end.parse()?)?;
        }
        Ok(fleet)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Board occupancy mask of all placed ships.
    pub fn occupied(&self) -> Grid {
        self.occupied
    }

    /// Sum of ship sizes across the roster.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(Ship::size).sum()
    }

    pub fn is_fully_placed(&self) -> bool {
        self.ships.iter().all(Ship::is_placed)
    }

    /// Index of the first ship still waiting for positions.
    pub fn next_unplaced(&self) -> Option<usize> {
        self.ships.iter().position(|s| !s.is_placed())
    }

    /// Validate placing ship `index` between `start` and `end` without
    /// committing anything. Returns the cells the ship would occupy.
    pub fn check_placement(
        &self,
        index: usize,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Vec<Coordinate>, BoardError> {
        let ship = self.ships.get(index).ok_or(BoardError::InvalidIndex)?;
        if ship.is_placed() {
            return Err(BoardError::AlreadyPlaced);
        }
        if ship.size() == 0 {
            return Err(BoardError::EmptyShip { ship: ship.name() });
        }
        let cells = line_between(start, end, ship.size())?;
        let candidate: Grid = cells.iter().copied().collect();
        if self.occupied.intersects(&candidate) {
            return Err(BoardError::Overlap);
        }
        Ok(cells)
    }

    /// Place ship `index` between `start` and `end`.
    ///
    /// The fleet is unchanged on error.
    pub fn place(
        &mut self,
        index: usize,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<(), BoardError> {
        let cells = self.check_placement(index, start, end)?;
        let ship = &mut self.ships[index];
        ship.commit(cells);
        self.occupied |= ship.footprint();
        log::debug!("placed {} from {} to {}", ship.name(), start, end);
        Ok(())
    }

    /// The ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coordinate) -> Option<&Ship> {
        if !self.occupied.contains(coord) {
            return None;
        }
        self.ships.iter().find(|s| s.contains(coord))
    }

    /// Fire at `coord`, registering a hit on whichever ship occupies it.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> ShotOutcome {
        if !self.occupied.contains(coord) {
            return ShotOutcome::Miss;
        }
        match self.ships.iter_mut().find(|s| s.contains(coord)) {
            Some(ship) => {
                ship.register_hit(coord);
                if ship.is_destroyed() {
                    ShotOutcome::Destroyed { ship: ship.name() }
                } else {
                    ShotOutcome::Hit { ship: ship.name() }
                }
            }
            None => ShotOutcome::Miss,
        }
    }

    /// Returns `true` when every ship is destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.ships.iter().all(Ship::is_destroyed)
    }

    /// Ships not yet destroyed.
    pub fn afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_destroyed()).count()
    }

    /// Classify `coord` given the shots fired at this fleet.
    ///
    /// With `reveal` unset, cells that were never fired upon stay `Unknown`.
    pub fn cell_state(&self, shots: &ShotRecord, coord: Coordinate, reveal: bool) -> CellState {
        let occupied = self.occupied.contains(coord);
        match (shots.contains(coord), occupied, reveal) {
            (true, true, _) => CellState::Hit,
            (true, false, _) => CellState::Miss,
            (false, true, true) => CellState::Ship,
            (false, false, true) => CellState::Water,
            (false, _, false) => CellState::Unknown,
        }
    }

    pub fn summary(&self) -> Vec<ShipSummary> {
        self.ships
            .iter()
            .map(|s| ShipSummary {
                name: s.name(),
                size: s.size(),
                positions: s.positions().to_vec(),
                hits: s.hit_count(),
                status: s.status(),
            })
            .collect()
    }
}
