#![cfg(feature = "std")]

use serde::Serialize;

use crate::{
    common::{BoardError, ShotOutcome},
    coord::Coordinate,
    game::Side,
    observer::MatchObserver,
};

/// Per-side shot counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SideTally {
    /// Shots that resolved to an outcome.
    pub shots: usize,
    pub hits: usize,
    pub sinks: usize,
    /// Proposals rejected as off-grid or already targeted.
    pub rejected: usize,
}

/// Observer that tallies a match for reporting.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub primary: SideTally,
    pub secondary: SideTally,
    pub winner: Option<Side>,
}

impl MatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tally(&self, side: Side) -> &SideTally {
        match side {
            Side::Primary => &self.primary,
            Side::Secondary => &self.secondary,
        }
    }

    fn tally_mut(&mut self, side: Side) -> &mut SideTally {
        match side {
            Side::Primary => &mut self.primary,
            Side::Secondary => &mut self.secondary,
        }
    }
}

impl MatchObserver for MatchSummary {
    fn on_invalid_target(&mut self, side: Side, _error: &BoardError) {
        self.tally_mut(side).rejected += 1;
    }

    fn on_outcome(&mut self, side: Side, _target: Coordinate, outcome: ShotOutcome) {
        let tally = self.tally_mut(side);
        tally.shots += 1;
        match outcome {
            ShotOutcome::Miss => {}
            ShotOutcome::Hit => tally.hits += 1,
            ShotOutcome::Sunk => {
                tally.hits += 1;
                tally.sinks += 1;
            }
        }
    }

    fn on_match_end(&mut self, winner: Side) {
        self.winner = Some(winner);
    }
}
