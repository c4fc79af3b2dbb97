//! Turn arbitration: two boards, two agents, one match.

use alloc::boxed::Box;
use log::{debug, info, trace};
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{BoardError, ShotOutcome},
    coord::Coordinate,
    observer::MatchObserver,
    planner::PlacementPlanner,
    player::{Agent, OpponentView},
};

/// One of the two participants. The primary side shoots first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Primary,
    Secondary,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Primary => Side::Secondary,
            Side::Secondary => Side::Primary,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Primary => 0,
            Side::Secondary => 1,
        }
    }
}

/// Where the match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// `Side` is to shoot.
    Turn(Side),
    /// Terminal: the winner sank the loser's whole fleet.
    Finished { winner: Side },
}

impl MatchState {
    pub fn is_finished(&self) -> bool {
        matches!(self, MatchState::Finished { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchState::Finished { winner } => Some(*winner),
            MatchState::Turn(_) => None,
        }
    }

    pub fn loser(&self) -> Option<Side> {
        self.winner().map(Side::other)
    }
}

/// Current status of a match from one side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// A single match.
///
/// Each side owns its board; the opposing agent only reads it through an
/// [`OpponentView`] and mutates it through [`Board::shot`].
pub struct Match {
    boards: [Board; 2],
    agents: [Box<dyn Agent>; 2],
    state: MatchState,
    shots: usize,
}

impl Match {
    /// Match between two prepared boards. The primary side moves first.
    pub fn new(
        primary_board: Board,
        primary_agent: Box<dyn Agent>,
        secondary_board: Board,
        secondary_agent: Box<dyn Agent>,
    ) -> Self {
        Self {
            boards: [primary_board, secondary_board],
            agents: [primary_agent, secondary_agent],
            state: MatchState::Turn(Side::Primary),
            shots: 0,
        }
    }

    /// Match with a freshly generated fleet on each side.
    pub fn with_random_fleets(
        rng: &mut SmallRng,
        planner: &PlacementPlanner,
        primary_agent: Box<dyn Agent>,
        secondary_agent: Box<dyn Agent>,
    ) -> Result<Self, BoardError> {
        let primary = planner.generate(rng)?;
        let secondary = planner.generate(rng)?;
        Ok(Self::new(primary, primary_agent, secondary, secondary_agent))
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// The board holding `side`'s own fleet.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    /// Successful shots so far, both sides combined.
    pub fn shots(&self) -> usize {
        self.shots
    }

    pub fn status(&self, side: Side) -> GameStatus {
        match self.state.winner() {
            None => GameStatus::InProgress,
            Some(winner) if winner == side => GameStatus::Won,
            Some(_) => GameStatus::Lost,
        }
    }

    /// Resolve exactly one shot by the active side.
    ///
    /// Out-of-bounds and repeated targets are reported to the agent and the
    /// agent is asked again without the turn being consumed. A hit keeps the
    /// turn; a miss or a sinking passes it. Once finished, further calls
    /// leave the match untouched.
    pub fn play_turn(
        &mut self,
        rng: &mut SmallRng,
        observer: &mut dyn MatchObserver,
    ) -> anyhow::Result<MatchState> {
        let attacker = match self.state {
            MatchState::Finished { .. } => return Ok(self.state),
            MatchState::Turn(side) => side,
        };
        let defender = attacker.other();
        observer.on_turn(attacker, &self.boards[0], &self.boards[1]);

        let (target, outcome) = loop {
            let view = OpponentView::new(&self.boards[defender.index()]);
            let target = self.agents[attacker.index()].next_target(rng, view)?;
            match self.boards[defender.index()].shot(target) {
                Ok(outcome) => break (target, outcome),
                Err(err) if err.is_retryable_shot() => {
                    trace!("{:?} target rejected: {}", attacker, err);
                    self.agents[attacker.index()].report_invalid(&err);
                    observer.on_invalid_target(attacker, &err);
                }
                Err(err) => return Err(anyhow::anyhow!(err)),
            }
        };

        self.shots += 1;
        self.record(attacker, target, outcome, observer);

        if self.boards[defender.index()].all_sunk() {
            info!("{:?} wins after {} shots", attacker, self.shots);
            self.state = MatchState::Finished { winner: attacker };
            observer.on_match_end(attacker);
        } else if !outcome.keeps_turn() {
            self.state = MatchState::Turn(defender);
        }
        Ok(self.state)
    }

    /// Play until one fleet is gone and return the winner.
    pub fn run(
        &mut self,
        rng: &mut SmallRng,
        observer: &mut dyn MatchObserver,
    ) -> anyhow::Result<Side> {
        loop {
            if let MatchState::Finished { winner } = self.play_turn(rng, observer)? {
                return Ok(winner);
            }
        }
    }

    fn record(
        &mut self,
        attacker: Side,
        target: Coordinate,
        outcome: ShotOutcome,
        observer: &mut dyn MatchObserver,
    ) {
        debug!("{:?} fired at {}: {:?}", attacker, target, outcome);
        self.agents[attacker.index()].handle_outcome(target, outcome);
        self.agents[attacker.other().index()].handle_opponent_shot(target, outcome);
        observer.on_outcome(attacker, target, outcome);
    }
}
