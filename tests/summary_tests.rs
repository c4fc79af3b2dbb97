use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{Match, MatchSummary, PlacementPlanner, RandomAgent, Side, NUM_VESSELS, TOTAL_VESSEL_CELLS};

#[test]
fn test_summary_of_random_match() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut game = Match::with_random_fleets(
        &mut rng,
        &PlacementPlanner::new(),
        Box::new(RandomAgent::new()),
        Box::new(RandomAgent::new()),
    )
    .unwrap();
    let mut summary = MatchSummary::new();
    let winner = game.run(&mut rng, &mut summary).unwrap();

    assert_eq!(summary.winner, Some(winner));
    let won = summary.tally(winner);
    assert_eq!(won.sinks, NUM_VESSELS);
    assert_eq!(won.hits, TOTAL_VESSEL_CELLS);
    assert!(summary.tally(winner.other()).sinks < NUM_VESSELS);
    assert_eq!(summary.primary.shots + summary.secondary.shots, game.shots());
}

#[test]
fn test_summary_serializes() {
    let summary = MatchSummary {
        winner: Some(Side::Secondary),
        ..MatchSummary::default()
    };
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["winner"], "Secondary");
    assert_eq!(value["primary"]["shots"], 0);
    assert_eq!(value["secondary"]["rejected"], 0);
}
