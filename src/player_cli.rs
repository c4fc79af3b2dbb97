#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::string::String;

use anyhow::anyhow;
use log::warn;
use rand::rngs::SmallRng;

use crate::{
    common::BoardError,
    coord::Coordinate,
    player::{Agent, OpponentView},
    ui::describe_rejection,
};

/// Why a line of input is not a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Not exactly two tokens.
    WrongCount(usize),
    /// Token is not a non-negative integer.
    NotANumber(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongCount(_) => {
                write!(f, "Two coordinates separated by a space are required")
            }
            InputError::NotANumber(token) => {
                write!(f, "'{}' is not a number; use digits 1-6", token)
            }
        }
    }
}

/// Parse `"row column"`, both 1-based, into a 0-based coordinate.
///
/// Only the shape of the input is checked here; whether the cell is on the
/// board is left to the board.
pub fn parse_coordinate(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens[..] else {
        return Err(InputError::WrongCount(tokens.len()));
    };
    Ok(Coordinate::new(parse_index(row)? - 1, parse_index(col)? - 1))
}

fn parse_index(token: &str) -> Result<i32, InputError> {
    if !token.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::NotANumber(token.to_string()));
    }
    token
        .parse()
        .map_err(|_| InputError::NotANumber(token.to_string()))
}

/// Human agent reading coordinates from a line-oriented input.
pub struct ConsoleAgent<R, W> {
    input: R,
    output: W,
}

impl ConsoleAgent<StdinLock<'static>, Stdout> {
    /// Agent bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the agent and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_target(&mut self) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Shot coordinates: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow!("input closed before a target was given"));
            }
            match parse_coordinate(&line) {
                Ok(target) => return Ok(target),
                Err(e) => writeln!(self.output, "{}.", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Agent for ConsoleAgent<R, W> {
    fn next_target(
        &mut self,
        _rng: &mut SmallRng,
        _opponent: OpponentView<'_>,
    ) -> anyhow::Result<Coordinate> {
        self.read_target()
    }

    fn report_invalid(&mut self, error: &BoardError) {
        let message = describe_rejection(error);
        if let Err(e) = writeln!(self.output, "Sorry, {}. Try again.", message) {
            warn!("could not report rejected target: {}", e);
        }
    }
}
