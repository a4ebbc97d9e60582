//! Commonly used types and utilities for ease of import.

pub use crate::{
    parse_position, place_computer_fleet_with, try_place_ship, BoardError, Coordinate, Direction,
    Fleet, GameSession, GameStatus, PlacementConfig, Ship, ShipType, ShotOutcome, ShotRecord,
    SHIPS,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, place_computer_fleet};
