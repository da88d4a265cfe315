//! Turn order and the console game loop

use anyhow::{bail, Result};
use tracing::{debug, info};

use std::io::Write;

use crate::board::{Board, Mark};
use crate::player::Player;

/// How a finished game ended
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Winner(Mark),
    Tie,
}

/// Game setup for the console binary
#[derive(Copy, Clone, Debug)]
pub struct Options {
    pub human: Mark,
    pub computer: Mark,
    /// Colour the board when it is drawn
    pub color: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            human: Mark::O,
            computer: Mark::X,
            color: false,
        }
    }
}

pub struct Game {
    board: Board,
    players: [Box<dyn Player>; 2],
    current_player: usize,
}

impl Game {
    /// Creates a game on an empty board, `first` moving first
    pub fn new(first: Box<dyn Player>, second: Box<dyn Player>) -> Result<Self> {
        Self::from_board(Board::new(), first, second)
    }

    /// Creates a game continuing from `board`, `first` to move
    pub fn from_board(
        board: Board,
        first: Box<dyn Player>,
        second: Box<dyn Player>,
    ) -> Result<Self> {
        if first.mark() == second.mark() {
            bail!("both players use the mark {}", first.mark());
        }
        Ok(Self {
            board,
            players: [first, second],
            current_player: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.players[self.current_player].mark()
    }

    fn switch_player(&mut self) {
        self.current_player = 1 - self.current_player;
    }

    /// Asks the current player for columns until one is playable, plays
    /// it and hands the turn over
    ///
    /// Returns the column played.
    pub fn play_turn(&mut self) -> Result<usize> {
        let player = &mut self.players[self.current_player];
        let mark = player.mark();
        let played = loop {
            let column = player.choose_column(&self.board)?;
            match self.board.play_checked(column, mark) {
                Ok(row) => {
                    debug!(%mark, column, row, "disc dropped");
                    break column as usize;
                }
                // try the move again
                Err(err) => debug!(%mark, column, "{}", err),
            }
        };
        self.switch_player();
        Ok(played)
    }

    /// The outcome of the game, once the board is over
    pub fn outcome(&self) -> Option<Outcome> {
        match self.board.winner() {
            Some(mark) => Some(Outcome::Winner(mark)),
            None if self.board.is_full() => Some(Outcome::Tie),
            None => None,
        }
    }

    /// Plays the game to completion, printing the board before every turn
    pub fn run<W: Write>(&mut self, out: &mut W, options: &Options) -> Result<Outcome> {
        let colors = if options.color {
            Some((self.players[0].mark(), self.players[1].mark()))
        } else {
            None
        };

        info!(
            first = %self.players[0].mark(),
            second = %self.players[1].mark(),
            "starting game"
        );
        writeln!(out, "Welcome to Connect4!")?;

        while !self.board.is_over() {
            writeln!(out)?;
            self.board.display(out, colors)?;
            self.play_turn()?;
        }

        self.board.display(out, colors)?;
        let outcome = match self.outcome() {
            Some(outcome) => outcome,
            None => bail!("game loop ended without an outcome"),
        };
        match outcome {
            Outcome::Winner(mark) => writeln!(out, "Congrats {}! You win.", mark)?,
            Outcome::Tie => writeln!(out, "Tie game.")?,
        }
        info!(?outcome, "game over");
        Ok(outcome)
    }
}
