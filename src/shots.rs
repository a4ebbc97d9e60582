//! Per-shooter shot history.

use alloc::vec::Vec;
use rand::Rng;

use crate::bitboard::Grid;
use crate::common::BoardError;
use crate::coord::Coordinate;

/// Append-only, duplicate-free log of positions one side has fired at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotRecord {
    shots: Vec<Coordinate>,
    seen: Grid,
}

impl ShotRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `coord`, rejecting a position already fired at.
    pub fn record(&mut self, coord: Coordinate) -> Result<(), BoardError> {
        if !self.seen.insert(coord) {
            return Err(BoardError::AlreadyGuessed);
        }
        self.shots.push(coord);
        Ok(())
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.seen.contains(coord)
    }

    /// Shots in the order they were fired.
    pub fn shots(&self) -> &[Coordinate] {
        &self.shots
    }

    pub fn len(&self) -> usize {
        self.shots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shots.is_empty()
    }

    /// Every cell on the board has been fired at.
    pub fn is_exhausted(&self) -> bool {
        self.seen.is_full()
    }

    /// A uniformly random cell not yet fired at, or `None` once the board is
    /// exhausted. Does not record the shot.
    pub fn random_unguessed<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coordinate> {
        let free = (!self.seen).count_ones();
        if free == 0 {
            return None;
        }
        let pick = rng.random_range(0..free);
        self.seen.free_coords().nth(pick)
    }
}
