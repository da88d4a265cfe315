//! A one-ply heuristic opponent
//!
//! Every simulation happens on a copy of the board handed in, so the live
//! game state is never touched by the search.

use anyhow::Result;
use rand::Rng;
use tracing::{debug, trace};

use crate::board::{Board, Mark};
use crate::player::Player;
use crate::WIDTH;

/// Score of a column that cannot be played
pub const FULL_COLUMN_SCORE: i32 = -1000;
/// Score of a column that lets the opponent win on their next move
pub const UNSAFE_SCORE: i32 = -1;
/// Score of every other column
pub const SAFE_SCORE: i32 = 0;

/// Returns the first column (scanning left to right) where dropping `mark`
/// leaves a won position
pub fn winning_move(board: &Board, mark: Mark) -> Option<usize> {
    board.open_columns().find(|&column| {
        let mut trial = *board;
        trial.drop_disc(column, mark);
        trial.winner().is_some()
    })
}

/// Scores each column for `mark`, see [`FULL_COLUMN_SCORE`], [`UNSAFE_SCORE`]
/// and [`SAFE_SCORE`]
pub fn score_columns(board: &Board, mark: Mark, opponent: Mark) -> [i32; WIDTH] {
    let mut scores = [SAFE_SCORE; WIDTH];
    for (column, score) in scores.iter_mut().enumerate() {
        if board.is_column_full(column) {
            *score = FULL_COLUMN_SCORE;
            continue;
        }
        let mut trial = *board;
        trial.drop_disc(column, mark);
        if winning_move(&trial, opponent).is_some() {
            *score = UNSAFE_SCORE;
        }
    }
    scores
}

/// Picks the best scored column, the leftmost one on ties
///
/// When every column has the same score the pick is uniform over all
/// columns, full or not.
pub fn select_column<R: Rng>(scores: &[i32; WIDTH], rng: &mut R) -> usize {
    if scores.iter().all(|&score| score == scores[0]) {
        return rng.gen_range(0..WIDTH);
    }

    let mut best = 0;
    for column in 1..WIDTH {
        if scores[column] > scores[best] {
            best = column;
        }
    }
    best
}

/// The computer opponent
///
/// Takes an immediate win if one exists, otherwise avoids columns that give
/// the opponent an immediate win. It does not look any further ahead.
pub struct ComputerPlayer<R: Rng> {
    mark: Mark,
    opponent: Mark,
    rng: R,
}

impl<R: Rng> ComputerPlayer<R> {
    pub fn new(mark: Mark, opponent: Mark, rng: R) -> Self {
        Self {
            mark,
            opponent,
            rng,
        }
    }

    /// Chooses a column for the computer on `board`
    pub fn best_column(&mut self, board: &Board) -> usize {
        if let Some(column) = winning_move(board, self.mark) {
            debug!(mark = %self.mark, column, "taking immediate win");
            return column;
        }

        let scores = score_columns(board, self.mark, self.opponent);
        trace!(mark = %self.mark, ?scores, "scored columns");

        let column = select_column(&scores, &mut self.rng);
        debug!(mark = %self.mark, column, score = scores[column], "chose column");
        column
    }
}

impl<R: Rng> Player for ComputerPlayer<R> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn choose_column(&mut self, board: &Board) -> Result<isize> {
        Ok(self.best_column(board) as isize)
    }
}
