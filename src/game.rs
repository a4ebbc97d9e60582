//! A single human-vs-computer game session.

use alloc::vec::Vec;
use rand::Rng;

use crate::{
    common::{BoardError, ShotOutcome},
    config::PlacementConfig,
    coord::Coordinate,
    fleet::{CellState, Fleet},
    placement::place_computer_fleet_with,
    ship::{Ship, ShipType},
    shots::ShotRecord,
};

/// Current status of a game, from the human player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One human-vs-computer game: both fleets and both shot records.
///
/// Sessions share nothing; every engine call goes through the session that
/// owns the state it touches.
#[derive(Debug, Clone)]
pub struct GameSession {
    my_fleet: Fleet,
    enemy_fleet: Fleet,
    my_shots: ShotRecord,
    enemy_shots: ShotRecord,
    round: usize,
}

impl GameSession {
    /// Start a game with the player's placed fleet; the computer's fleet uses
    /// the same roster and is laid out randomly.
    pub fn new<R: Rng + ?Sized>(
        my_fleet: Fleet,
        rng: &mut R,
        config: &PlacementConfig,
    ) -> Result<Self, BoardError> {
        let roster: Vec<ShipType> = my_fleet.ships().iter().map(Ship::ship_type).collect();
        let enemy_fleet = place_computer_fleet_with(&roster, rng, config)?;
        Self::from_fleets(my_fleet, enemy_fleet)
    }

    /// Start a game from two fully placed fleets.
    pub fn from_fleets(my_fleet: Fleet, enemy_fleet: Fleet) -> Result<Self, BoardError> {
        if !my_fleet.is_fully_placed() || !enemy_fleet.is_fully_placed() {
            return Err(BoardError::FleetNotPlaced);
        }
        Ok(Self {
            my_fleet,
            enemy_fleet,
            my_shots: ShotRecord::new(),
            enemy_shots: ShotRecord::new(),
            round: 1,
        })
    }

    pub fn my_fleet(&self) -> &Fleet {
        &self.my_fleet
    }

    pub fn enemy_fleet(&self) -> &Fleet {
        &self.enemy_fleet
    }

    /// The player's shots at the computer's fleet.
    pub fn my_shots(&self) -> &ShotRecord {
        &self.my_shots
    }

    /// The computer's shots at the player's fleet.
    pub fn enemy_shots(&self) -> &ShotRecord {
        &self.enemy_shots
    }

    /// Rounds start at 1 and advance after each computer shot.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.enemy_fleet.is_destroyed() {
            GameStatus::Won
        } else if self.my_fleet.is_destroyed() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    fn ensure_in_progress(&self) -> Result<(), BoardError> {
        match self.status() {
            GameStatus::InProgress => Ok(()),
            _ => Err(BoardError::GameOver),
        }
    }

    /// Fire the player's shot at `coord`. Repeat positions are rejected
    /// without changing any state.
    pub fn player_shoot(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        self.ensure_in_progress()?;
        self.my_shots.record(coord)?;
        let outcome = self.enemy_fleet.resolve_shot(coord);
        log::info!(
            target: "shots",
            "player_shoot position={} hit={}",
            coord,
            outcome.is_hit()
        );
        Ok(outcome)
    }

    /// Fire the computer's shot at a uniformly random cell it has not tried.
    pub fn computer_shoot<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Coordinate, ShotOutcome), BoardError> {
        self.ensure_in_progress()?;
        let coord = self
            .enemy_shots
            .random_unguessed(rng)
            .ok_or(BoardError::GameOver)?;
        let outcome = self.computer_shoot_at(coord)?;
        Ok((coord, outcome))
    }

    /// Fire the computer's shot at a chosen cell.
    pub fn computer_shoot_at(&mut self, coord: Coordinate) -> Result<ShotOutcome, BoardError> {
        self.ensure_in_progress()?;
        self.enemy_shots.record(coord)?;
        let outcome = self.my_fleet.resolve_shot(coord);
        log::info!(
            target: "shots",
            "computer_shoot position={} hit={}",
            coord,
            outcome.is_hit()
        );
        self.round += 1;
        Ok(outcome)
    }

    /// The player's own board with every ship shown.
    pub fn my_cell(&self, coord: Coordinate) -> CellState {
        self.my_fleet.cell_state(&self.enemy_shots, coord, true)
    }

    /// The computer's board as the player sees it.
    pub fn enemy_cell(&self, coord: Coordinate) -> CellState {
        self.enemy_fleet.cell_state(&self.my_shots, coord, false)
    }
}
