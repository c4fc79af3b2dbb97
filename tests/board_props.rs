use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use sea_battle::{
    Board, BoardError, CellState, Coordinate, PlacementPlanner, ShotOutcome, BOARD_SIZE, FLEET,
    NUM_VESSELS,
};

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    PlacementPlanner::new().generate(&mut rng).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn vessels_never_touch(seed in any::<u64>()) {
        let board = random_board(seed);
        let vessels = board.vessels();
        for (i, a) in vessels.iter().enumerate() {
            for b in &vessels[i + 1..] {
                for ca in a.cells() {
                    for cb in b.cells() {
                        prop_assert!(ca.chebyshev_distance(cb) > 1, "{} touches {}", ca, cb);
                    }
                }
            }
        }
    }

    #[test]
    fn planner_fleet_composition(seed in any::<u64>()) {
        let board = random_board(seed);
        let lengths: Vec<usize> = board.vessels().iter().map(|v| v.length()).collect();
        prop_assert_eq!(lengths, FLEET.to_vec());
        prop_assert_eq!(board.live_vessel_count(), NUM_VESSELS);
        for v in board.vessels() {
            for c in v.cells() {
                prop_assert!(c.is_within(BOARD_SIZE));
            }
        }
    }

    #[test]
    fn second_shot_is_rejected(seed in any::<u64>(), x in 0..BOARD_SIZE as i32, y in 0..BOARD_SIZE as i32) {
        let mut board = random_board(seed);
        let target = Coordinate::new(x, y);
        board.shot(target).unwrap();
        let cells_after = board.display_grid(true);
        prop_assert_eq!(board.shot(target), Err(BoardError::AlreadyTargeted(target)));
        prop_assert_eq!(board.display_grid(true), cells_after);
    }

    #[test]
    fn sinking_every_vessel(seed in any::<u64>()) {
        let mut board = random_board(seed);
        let fleet: Vec<_> = board.vessels().to_vec();
        for (idx, vessel) in fleet.iter().enumerate() {
            let live_before = board.live_vessel_count();
            let cells: Vec<Coordinate> = vessel.cells().collect();
            for (n, c) in cells.iter().enumerate() {
                let outcome = board.shot(*c).unwrap();
                if n + 1 < cells.len() {
                    prop_assert_eq!(outcome, ShotOutcome::Hit);
                    prop_assert_eq!(board.vessels()[idx].remaining_hits(), vessel.length() - n - 1);
                } else {
                    prop_assert_eq!(outcome, ShotOutcome::Sunk);
                }
            }
            prop_assert!(board.vessels()[idx].is_sunk());
            prop_assert_eq!(board.live_vessel_count(), live_before - 1);
            for c in &cells {
                for around in c.neighbourhood().filter(|n| n.is_within(BOARD_SIZE)) {
                    prop_assert!(board.is_forbidden(around));
                    if !board.ship_map().contains(around) {
                        prop_assert_eq!(board.cell(around), Some(CellState::SunkBuffer));
                    }
                }
            }
        }
        prop_assert!(board.all_sunk());
    }

    #[test]
    fn live_count_matches_floating_vessels(seed in any::<u64>(), shots in 0..60usize) {
        let mut board = random_board(seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        for _ in 0..shots {
            let c = Coordinate::new(
                rng.random_range(-1..=BOARD_SIZE as i32),
                rng.random_range(-1..=BOARD_SIZE as i32),
            );
            let _ = board.shot(c);
            let floating = board.vessels().iter().filter(|v| !v.is_sunk()).count();
            prop_assert_eq!(board.live_vessel_count(), floating);
        }
    }
}
