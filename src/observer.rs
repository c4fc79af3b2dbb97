//! Match event hooks for renderers and recorders.

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coord::Coordinate,
    game::Side,
};

/// Receives match events. Every hook defaults to doing nothing.
pub trait MatchObserver {
    /// `side` is about to be asked for a target.
    fn on_turn(&mut self, _side: Side, _primary: &Board, _secondary: &Board) {}

    /// A proposal by `side` was rejected and will be asked for again.
    fn on_invalid_target(&mut self, _side: Side, _error: &BoardError) {}

    /// A shot by `side` at `target` resolved to `outcome`.
    fn on_outcome(&mut self, _side: Side, _target: Coordinate, _outcome: ShotOutcome) {}

    /// The match is over.
    fn on_match_end(&mut self, _winner: Side) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {}
