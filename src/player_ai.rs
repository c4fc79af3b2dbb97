use rand::rngs::SmallRng;
use rand::Rng;

use crate::{coord::Coordinate, player::Agent, player::OpponentView};

/// Computer opponent that fires uniformly at random.
///
/// It keeps no memory of earlier shots and may propose a cell it already
/// hit; the match rejects the repeat and asks again.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for RandomAgent {
    fn next_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: OpponentView<'_>,
    ) -> anyhow::Result<Coordinate> {
        let size = opponent.size() as i32;
        Ok(Coordinate::new(
            rng.random_range(0..size),
            rng.random_range(0..size),
        ))
    }
}
