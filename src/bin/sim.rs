use battleship_engine::{
    init_logging, place_computer_fleet_with, GameSession, GameStatus, PlacementConfig, SHIPS,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);
    let config = PlacementConfig::default();

    let f1 = place_computer_fleet_with(&SHIPS, &mut rng1, &config).map_err(|e| anyhow::anyhow!(e))?;
    let f2 = place_computer_fleet_with(&SHIPS, &mut rng2, &config).map_err(|e| anyhow::anyhow!(e))?;
    let mut session = GameSession::from_fleets(f1, f2).map_err(|e| anyhow::anyhow!(e))?;

    while session.status() == GameStatus::InProgress {
        let target = session
            .my_shots()
            .random_unguessed(&mut rng1)
            .ok_or_else(|| anyhow::anyhow!("player1 ran out of targets"))?;
        session.player_shoot(target).map_err(|e| anyhow::anyhow!(e))?;
        if session.status() != GameStatus::InProgress {
            break;
        }
        session
            .computer_shoot(&mut rng2)
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    let winner = match session.status() {
        GameStatus::Won => Some("player1"),
        GameStatus::Lost => Some("player2"),
        GameStatus::InProgress => None,
    };

    let result = json!({
        "player1": {"guesses": session.my_shots().len(), "ships_afloat": session.my_fleet().afloat()},
        "player2": {"guesses": session.enemy_shots().len(), "ships_afloat": session.enemy_fleet().afloat()},
        "rounds": session.round(),
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
