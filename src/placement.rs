//! Fleet placement: the text entry point used for human setup and the
//! randomized search that lays out the computer's fleet.
//!
//! The random search works one ship at a time, in roster order. For each
//! ship it samples a free start cell, then tries the four directions from
//! that cell in a random order, each at most once, and keeps the first run of
//! cells that stays on the board and clear of the ships already placed. When
//! no direction fits, a fresh start cell is sampled. Every sampled start cell
//! is charged against a budget shared by the whole fleet; running out is
//! reported as [`BoardError::PlacementExhausted`].

use rand::seq::SliceRandom;
use rand::Rng;

use crate::common::BoardError;
use crate::config::PlacementConfig;
use crate::coord::{Coordinate, Direction};
use crate::fleet::Fleet;
use crate::ship::ShipType;

/// Place ship `index` from two position strings such as `"A1"` and `"A5"`.
///
/// Malformed text is `InvalidInputFormat`, an off-board cell is `OutOfBounds`;
/// after parsing, the geometry and overlap checks of [`Fleet::place`] apply.
pub fn try_place_ship(
    fleet: &mut Fleet,
    index: usize,
    start: &str,
    end: &str,
) -> Result<(), BoardError> {
    let start: Coordinate = start.trim().parse()?;
    let end: Coordinate = end.trim().parse()?;
    fleet.place(index, start, end)
}

/// A uniformly random cell not occupied by any ship, or `None` on a full board.
pub fn random_free_cell<R: Rng + ?Sized>(fleet: &Fleet, rng: &mut R) -> Option<Coordinate> {
    let occupied = fleet.occupied();
    if occupied.is_full() {
        return None;
    }
    loop {
        let Some(cell) = Coordinate::from_index(rng.random_range(0..Coordinate::CELLS)) else {
            continue;
        };
        if !occupied.contains(cell) {
            return Some(cell);
        }
    }
}

/// Try to place ship `index` with one end at `start`, testing each direction
/// once in random order.
///
/// Returns the direction used, or `None` if no direction fits. The fleet is
/// unchanged when `None` or an error is returned.
pub fn place_from<R: Rng + ?Sized>(
    fleet: &mut Fleet,
    index: usize,
    start: Coordinate,
    rng: &mut R,
) -> Result<Option<Direction>, BoardError> {
    let ship = fleet.ship(index).ok_or(BoardError::InvalidIndex)?;
    if ship.is_placed() {
        return Err(BoardError::AlreadyPlaced);
    }
    let reach = ship.size().saturating_sub(1);

    let mut directions = Direction::ALL;
    directions.shuffle(rng);
    for direction in directions {
        let Some(end) = start.step(direction, reach) else {
            continue;
        };
        match fleet.place(index, start, end) {
            Ok(()) => return Ok(Some(direction)),
            Err(BoardError::Overlap) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(None)
}

/// Randomly place ship `index`, drawing start cells from `budget`.
pub fn place_randomly<R: Rng + ?Sized>(
    fleet: &mut Fleet,
    index: usize,
    rng: &mut R,
    budget: &mut usize,
) -> Result<(), BoardError> {
    let ship = fleet.ship(index).ok_or(BoardError::InvalidIndex)?;
    let name = ship.name();
    if ship.size() == 0 {
        return Err(BoardError::EmptyShip { ship: name });
    }
    loop {
        if *budget == 0 {
            log::warn!("placement budget exhausted while placing {}", name);
            return Err(BoardError::PlacementExhausted { ship: name });
        }
        *budget -= 1;

        let Some(start) = random_free_cell(fleet, rng) else {
            log::warn!("no free cell left for {}", name);
            return Err(BoardError::PlacementExhausted { ship: name });
        };
        if let Some(direction) = place_from(fleet, index, start, rng)? {
            log::debug!("{} starts at {} heading {:?}", name, start, direction);
            return Ok(());
        }
        log::debug!("no direction fits {} at {}, resampling", name, start);
    }
}

/// Randomly place every ship of `fleet` that has no positions yet.
pub fn fill_fleet<R: Rng + ?Sized>(
    fleet: &mut Fleet,
    rng: &mut R,
    config: &PlacementConfig,
) -> Result<(), BoardError> {
    let mut budget = config.max_attempts;
    while let Some(index) = fleet.next_unplaced() {
        place_randomly(fleet, index, rng, &mut budget)?;
    }
    log::debug!(
        "fleet placed using {} of {} attempts",
        config.max_attempts - budget,
        config.max_attempts
    );
    Ok(())
}

/// Lay out a fresh fleet for `roster` using the supplied randomness.
pub fn place_computer_fleet_with<R: Rng + ?Sized>(
    roster: &[ShipType],
    rng: &mut R,
    config: &PlacementConfig,
) -> Result<Fleet, BoardError> {
    let mut fleet = Fleet::new(roster);
    fill_fleet(&mut fleet, rng, config)?;
    Ok(fleet)
}

/// Lay out a fresh fleet for `roster` from the thread-local generator.
#[cfg(feature = "std")]
pub fn place_computer_fleet(roster: &[ShipType]) -> Result<Fleet, BoardError> {
    place_computer_fleet_with(roster, &mut rand::rng(), &PlacementConfig::default())
}
