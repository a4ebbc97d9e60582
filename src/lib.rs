#![cfg_attr(not(feature = "std"), no_std)]
//! Fleet placement and combat resolution for an 8×8 naval combat game.

extern crate alloc;

mod bitboard;
mod common;
mod config;
mod coord;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod placement;
pub mod prelude;
mod ship;
mod shots;

pub use bitboard::{BitBoard, Grid, SetBits};
pub use common::*;
pub use config::*;
pub use coord::{distance, is_valid, parse_position, Coordinate, Direction};
pub use fleet::{CellState, Fleet, ShipSummary};
pub use game::{GameSession, GameStatus};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use placement::place_computer_fleet;
pub use placement::{place_computer_fleet_with, try_place_ship};
pub use ship::{line_between, run_from, Ship, ShipStatus, ShipType};
pub use shots::ShotRecord;
