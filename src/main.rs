use std::io;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use sea_battle::{
    init_logging, ui, ConsoleAgent, ConsoleObserver, Match, PlacementPlanner, RandomAgent, Side,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle on a 6x6 grid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer (default).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1000, help = "Pause after each shot, in milliseconds")]
        pace_ms: u64,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0, help = "Pause after each shot, in milliseconds")]
        pace_ms: u64,
    },
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn greet() {
    println!("*************************************************");
    println!("***             Welcome to Sea Battle!        ***");
    println!("***   Enter shots as: X Y                     ***");
    println!("***   X is the row, Y the column, both 1-6    ***");
    println!("*************************************************");
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        pace_ms: 1000,
    });
    let planner = PlacementPlanner::new();

    match command {
        Commands::Play { seed, pace_ms } => {
            greet();
            let mut rng = seeded_rng(seed);
            let mut game = Match::with_random_fleets(
                &mut rng,
                &planner,
                Box::new(ConsoleAgent::stdio()),
                Box::new(RandomAgent::new()),
            )?;
            let mut observer =
                ConsoleObserver::new(io::stdout(), Duration::from_millis(pace_ms));
            game.run(&mut rng, &mut observer)?;
            finish(&game, false);
        }
        Commands::Watch { seed, pace_ms } => {
            println!("Starting computer vs computer game...");
            let mut rng = seeded_rng(seed);
            let mut game = Match::with_random_fleets(
                &mut rng,
                &planner,
                Box::new(RandomAgent::new()),
                Box::new(RandomAgent::new()),
            )?;
            let mut observer = ConsoleObserver::new(io::stdout(), Duration::from_millis(pace_ms))
                .with_labels("Computer 1", "Computer 2")
                .reveal_opponent(true)
                .echo_rejections(true, true);
            game.run(&mut rng, &mut observer)?;
            finish(&game, true);
        }
    }
    Ok(())
}

fn finish(game: &Match, reveal: bool) {
    println!(
        "{}",
        ui::render_side_by_side(game.board(Side::Primary), game.board(Side::Secondary), reveal)
    );
    println!("Battle over after {} shots.", game.shots());
}
