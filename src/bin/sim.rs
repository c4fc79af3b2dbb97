use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

use sea_battle::{init_logging, Match, MatchSummary, PlacementPlanner, RandomAgent};

/// Play one computer-vs-computer match and print a JSON summary.
#[derive(Parser)]
struct Args {
    /// Seed for fleet placement and targeting.
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let mut game = Match::with_random_fleets(
        &mut rng,
        &PlacementPlanner::new(),
        Box::new(RandomAgent::new()),
        Box::new(RandomAgent::new()),
    )?;
    let mut summary = MatchSummary::new();
    let winner = game.run(&mut rng, &mut summary)?;

    let result = json!({
        "seed": args.seed,
        "winner": winner,
        "shots": game.shots(),
        "summary": summary,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
