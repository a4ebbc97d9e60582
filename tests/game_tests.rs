use battleship_engine::{
    parse_position, BoardError, CellState, Coordinate, Fleet, GameSession, GameStatus,
    PlacementConfig, ShipType, ShotOutcome, TOTAL_SHIP_CELLS,
};
use rand::{rngs::SmallRng, SeedableRng};

fn c(s: &str) -> Coordinate {
    parse_position(s).unwrap()
}

fn destroyer_at(start: &str, end: &str) -> Fleet {
    let mut fleet = Fleet::new(&[ShipType::new("Destroyer", 2)]);
    fleet.place(0, c(start), c(end)).unwrap();
    fleet
}

#[test]
fn test_new_session_places_enemy_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let session =
        GameSession::new(Fleet::preset().unwrap(), &mut rng, &PlacementConfig::default()).unwrap();
    assert!(session.enemy_fleet().is_fully_placed());
    assert_eq!(session.enemy_fleet().occupied().count_ones(), TOTAL_SHIP_CELLS);
    assert_eq!(session.status(), GameStatus::InProgress);
    assert_eq!(session.round(), 1);
}

#[test]
fn test_session_requires_placed_fleet() {
    let mut rng = SmallRng::seed_from_u64(1);
    let err = GameSession::new(Fleet::standard(), &mut rng, &PlacementConfig::default())
        .unwrap_err();
    assert_eq!(err, BoardError::FleetNotPlaced);
}

#[test]
fn test_player_wins() {
    let mut session =
        GameSession::from_fleets(destroyer_at("H7", "H8"), destroyer_at("A1", "A2")).unwrap();
    assert_eq!(session.player_shoot(c("B1")), Ok(ShotOutcome::Miss));
    assert_eq!(session.player_shoot(c("B1")), Err(BoardError::AlreadyGuessed));
    assert_eq!(
        session.player_shoot(c("A1")),
        Ok(ShotOutcome::Hit { ship: "Destroyer" })
    );
    assert_eq!(session.enemy_cell(c("A1")), CellState::Hit);
    assert_eq!(session.enemy_cell(c("A2")), CellState::Unknown);
    assert_eq!(
        session.player_shoot(c("A2")),
        Ok(ShotOutcome::Destroyed { ship: "Destroyer" })
    );
    assert_eq!(session.status(), GameStatus::Won);
    assert_eq!(session.player_shoot(c("C3")), Err(BoardError::GameOver));
    assert_eq!(session.my_shots().len(), 3);
}

#[test]
fn test_computer_wins() {
    let mut session =
        GameSession::from_fleets(destroyer_at("H7", "H8"), destroyer_at("A1", "A2")).unwrap();
    assert!(session.computer_shoot_at(c("H7")).unwrap().is_hit());
    assert_eq!(session.my_cell(c("H7")), CellState::Hit);
    assert_eq!(session.my_cell(c("H8")), CellState::Ship);
    assert_eq!(session.my_cell(c("G8")), CellState::Water);
    assert_eq!(session.round(), 2);
    assert_eq!(
        session.computer_shoot_at(c("H8")),
        Ok(ShotOutcome::Destroyed { ship: "Destroyer" })
    );
    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(session.computer_shoot_at(c("A1")), Err(BoardError::GameOver));
}

#[test]
fn test_random_game_terminates() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut session =
        GameSession::new(Fleet::preset().unwrap(), &mut rng, &PlacementConfig::default()).unwrap();
    while session.status() == GameStatus::InProgress {
        let target = session.my_shots().random_unguessed(&mut rng).unwrap();
        session.player_shoot(target).unwrap();
        if session.status() != GameStatus::InProgress {
            break;
        }
        let (cell, _) = session.computer_shoot(&mut rng).unwrap();
        assert!(session.enemy_shots().contains(cell));
    }
    assert!(session.my_shots().len() <= 64);
    assert!(session.enemy_shots().len() <= 64);
    match session.status() {
        GameStatus::Won => assert!(session.enemy_fleet().is_destroyed()),
        GameStatus::Lost => assert!(session.my_fleet().is_destroyed()),
        GameStatus::InProgress => unreachable!(),
    }
}

#[test]
fn test_sessions_are_independent() {
    let mut rng = SmallRng::seed_from_u64(8);
    let config = PlacementConfig::default();
    let mut a = GameSession::new(Fleet::preset().unwrap(), &mut rng, &config).unwrap();
    let b = GameSession::new(Fleet::preset().unwrap(), &mut rng, &config).unwrap();
    a.computer_shoot_at(c("A1")).unwrap();
    assert_eq!(a.my_fleet().ship(0).unwrap().hit_count(), 1);
    assert_eq!(b.my_fleet().ship(0).unwrap().hit_count(), 0);
    assert!(b.enemy_shots().is_empty());
}
