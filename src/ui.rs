#![cfg(feature = "std")]

//! Text rendering of boards and a console match observer.

use std::fmt::Write as _;
use std::io::Write;
use std::thread;
use std::time::Duration;

use log::warn;

use crate::{
    board::{Board, CellState, DisplayGrid},
    common::{BoardError, ShotOutcome},
    config::BOARD_SIZE,
    coord::Coordinate,
    game::Side,
    observer::MatchObserver,
};

/// Symbol used for a cell state.
pub fn symbol(state: CellState) -> char {
    match state {
        CellState::Empty => 'o',
        CellState::Ship => '■',
        CellState::Hit => 'x',
        CellState::Miss => 'T',
        CellState::SunkBuffer => '.',
    }
}

fn header() -> String {
    let mut line = String::from("    |");
    for c in 1..=BOARD_SIZE {
        let _ = write!(line, " {} |", c);
    }
    line
}

fn row(grid: &DisplayGrid, r: usize) -> String {
    let mut line = format!("  {} |", r + 1);
    for &cell in grid[r].iter() {
        let _ = write!(line, " {} |", symbol(cell));
    }
    line
}

/// A single grid with numbered rows and columns.
pub fn render_grid(grid: &DisplayGrid) -> String {
    let mut out = header();
    for r in 0..BOARD_SIZE {
        out.push('\n');
        out.push_str(&row(grid, r));
    }
    out
}

/// Two boards side by side: `own` revealed, `opponent` with its fleet
/// hidden unless `reveal_opponent` is set.
pub fn render_side_by_side(own: &Board, opponent: &Board, reveal_opponent: bool) -> String {
    const GAP: &str = "          ";
    let left = own.display_grid(true);
    let right = opponent.display_grid(reveal_opponent);
    let head = header();
    let width = head.chars().count();

    let mut out = format!(
        "{:<width$}{}{}\n",
        "  Own board",
        GAP,
        "  Opponent board",
        width = width
    );
    let _ = writeln!(out, "{}{}{}", head, GAP, head);
    for r in 0..BOARD_SIZE {
        let _ = writeln!(out, "{}{}{}", row(&left, r), GAP, row(&right, r));
    }
    out
}

/// Human-readable outcome line.
pub fn describe(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Miss => "Miss!",
        ShotOutcome::Hit => "Ship damaged!",
        ShotOutcome::Sunk => "Ship sunk!",
    }
}

/// 1-based `row column` form matching what a human types.
pub fn coord_to_string(c: Coordinate) -> String {
    format!("{} {}", c.x + 1, c.y + 1)
}

/// Rejection message with cells in the 1-based form players type.
pub fn describe_rejection(error: &BoardError) -> String {
    match *error {
        BoardError::OutOfBounds(c) => {
            format!("shot at {} is outside the battlefield", coord_to_string(c))
        }
        BoardError::AlreadyTargeted(c) => {
            format!("cell {} has already been fired upon", coord_to_string(c))
        }
        ref other => other.to_string(),
    }
}

/// Prints the match to a terminal, pausing between shots.
///
/// Boards are always drawn from the primary side's perspective.
pub struct ConsoleObserver<W> {
    out: W,
    pace: Duration,
    labels: [&'static str; 2],
    reveal_opponent: bool,
    echo_rejections: [bool; 2],
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W, pace: Duration) -> Self {
        Self {
            out,
            pace,
            labels: ["You", "Computer"],
            reveal_opponent: false,
            echo_rejections: [false, true],
        }
    }

    pub fn with_labels(mut self, primary: &'static str, secondary: &'static str) -> Self {
        self.labels = [primary, secondary];
        self
    }

    /// Show the secondary fleet too, for matches with no human player.
    pub fn reveal_opponent(mut self, reveal: bool) -> Self {
        self.reveal_opponent = reveal;
        self
    }

    /// Which sides get their rejected targets printed. A console agent
    /// already tells its player, so the primary side is off by default.
    pub fn echo_rejections(mut self, primary: bool, secondary: bool) -> Self {
        self.echo_rejections = [primary, secondary];
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn label(&self, side: Side) -> &'static str {
        match side {
            Side::Primary => self.labels[0],
            Side::Secondary => self.labels[1],
        }
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!("console output failed: {}", e);
        }
    }
}

impl<W: Write> MatchObserver for ConsoleObserver<W> {
    fn on_turn(&mut self, side: Side, primary: &Board, secondary: &Board) {
        let boards = render_side_by_side(primary, secondary, self.reveal_opponent);
        self.emit(&boards);
        let line = format!("{} to fire.", self.label(side));
        self.emit(&line);
    }

    fn on_invalid_target(&mut self, side: Side, error: &BoardError) {
        let echo = match side {
            Side::Primary => self.echo_rejections[0],
            Side::Secondary => self.echo_rejections[1],
        };
        if echo {
            let line = format!("{}: {}.", self.label(side), describe_rejection(error));
            self.emit(&line);
        }
    }

    fn on_outcome(&mut self, side: Side, target: Coordinate, outcome: ShotOutcome) {
        let line = format!(
            "{} fired at {}: {}",
            self.label(side),
            coord_to_string(target),
            describe(outcome)
        );
        self.emit(&line);
        if !self.pace.is_zero() {
            thread::sleep(self.pace);
        }
    }

    fn on_match_end(&mut self, winner: Side) {
        let line = format!("*** {} won the battle! ***", self.label(winner));
        self.emit(&line);
    }
}
