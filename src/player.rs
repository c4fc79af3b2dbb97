use rand::rngs::SmallRng;

use crate::{
    board::{Board, DisplayGrid},
    common::{BoardError, ShotOutcome},
    coord::Coordinate,
};

/// What a shooter is allowed to see of the opposing board.
#[derive(Clone, Copy)]
pub struct OpponentView<'a> {
    board: &'a Board,
}

impl<'a> OpponentView<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// The board with undamaged vessel cells hidden.
    pub fn display_grid(&self) -> DisplayGrid {
        self.board.display_grid(false)
    }

    /// Cells that would be rejected as already targeted.
    pub fn is_forbidden(&self, c: Coordinate) -> bool {
        self.board.is_forbidden(c)
    }

    pub fn live_vessel_count(&self) -> usize {
        self.board.live_vessel_count()
    }
}

/// Interface implemented by the sources of shots.
///
/// An agent only proposes coordinates; legality (bounds, repeats) is decided
/// by the board, and rejected proposals are reported back through
/// [`Agent::report_invalid`] before the agent is asked again.
pub trait Agent {
    /// Choose the next target on the opposing board.
    ///
    /// An error means the agent can no longer play (its input is gone) and
    /// aborts the match.
    fn next_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: OpponentView<'_>,
    ) -> anyhow::Result<Coordinate>;

    /// The last proposal was rejected; another one will be requested.
    fn report_invalid(&mut self, _error: &BoardError) {}

    /// Inform the agent of the result of its own shot.
    fn handle_outcome(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the agent of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}
