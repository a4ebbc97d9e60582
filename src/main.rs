#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_engine::{
    init_logging, place_computer_fleet_with, try_place_ship, Fleet, GameSession, GameStatus,
    PlacementConfig, SHIPS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Lay out random computer fleets and print them.
    Deal {
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long, help = "Upper bound on start cells sampled per fleet")]
        max_attempts: Option<usize>,
        #[arg(long, help = "Print fleets as JSON")]
        json: bool,
    },
    /// Validate a player layout given as START-END pairs in roster order
    /// (Carrier, Battleship, Cruiser, Submarine, Destroyer).
    Place {
        #[arg(required = true, num_args = 1.., help = "Ship endpoints, e.g. A1-A5 F1-F4")]
        layout: Vec<String>,
    },
    /// Play the preset fleet against the computer with random shots on both sides.
    Simulate {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Deal {
            seed,
            count,
            max_attempts,
            json,
        } => {
            let mut rng = make_rng(seed);
            let config = max_attempts
                .map(|max_attempts| PlacementConfig { max_attempts })
                .unwrap_or_default();
            for n in 0..count {
                let fleet = place_computer_fleet_with(&SHIPS, &mut rng, &config)
                    .map_err(|e| anyhow::anyhow!(e))?;
                if json {
                    println!("{}", serde_json::to_string(&fleet.summary())?);
                } else {
                    println!("Fleet {} ({} cells)", n + 1, fleet.total_cells());
                    for ship in fleet.ships() {
                        let cells: Vec<String> =
                            ship.positions().iter().map(|p| p.to_string()).collect();
                        println!("  {:<10} {}", ship.name(), cells.join(" "));
                    }
                }
            }
        }
        Commands::Place { layout } => {
            let mut fleet = Fleet::standard();
            if layout.len() != fleet.len() {
                return Err(anyhow::anyhow!(
                    "expected {} placements, got {}",
                    fleet.len(),
                    layout.len()
                ));
            }
            for (index, pair) in layout.iter().enumerate() {
                let name = fleet.ships()[index].name();
                let (start, end) = pair
                    .split_once(['-', ':'])
                    .ok_or_else(|| anyhow::anyhow!("{}: expected START-END, got {:?}", name, pair))?;
                try_place_ship(&mut fleet, index, start, end)
                    .map_err(|e| anyhow::anyhow!("{}: {}", name, e))?;
                let cells: Vec<String> = fleet.ships()[index]
                    .positions()
                    .iter()
                    .map(|p| p.to_string())
                    .collect();
                println!("{:<10} {}", name, cells.join(" "));
            }
            println!("Layout is valid.");
        }
        Commands::Simulate { seed } => {
            let mut rng = make_rng(seed);
            let my_fleet = Fleet::preset().map_err(|e| anyhow::anyhow!(e))?;
            let mut session = GameSession::new(my_fleet, &mut rng, &PlacementConfig::default())
                .map_err(|e| anyhow::anyhow!(e))?;

            while session.status() == GameStatus::InProgress {
                let target = session
                    .my_shots()
                    .random_unguessed(&mut rng)
                    .ok_or_else(|| anyhow::anyhow!("player ran out of targets"))?;
                session
                    .player_shoot(target)
                    .map_err(|e| anyhow::anyhow!(e))?;
                if session.status() != GameStatus::InProgress {
                    break;
                }
                session
                    .computer_shoot(&mut rng)
                    .map_err(|e| anyhow::anyhow!(e))?;
            }

            let result = json!({
                "status": session.status(),
                "rounds": session.round(),
                "player_shots": session.my_shots().len(),
                "computer_shots": session.enemy_shots().len(),
                "my_fleet": session.my_fleet().summary(),
                "enemy_fleet": session.enemy_fleet().summary(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}
