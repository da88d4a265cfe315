//! A console game of 'Connect 4' against a heuristic computer opponent
//!
//! The computer looks a single move ahead: it takes an immediate win when
//! one exists and otherwise avoids any column that hands the opponent a win
//! on the following move.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_heuristic::{board::{Board, Mark}, computer::ComputerPlayer, player::Player};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::new();
//! for _ in 0..3 {
//!     board.drop_disc(3, Mark::X);
//! }
//! let mut computer = ComputerPlayer::new(Mark::X, Mark::O, SmallRng::seed_from_u64(0));
//!
//! assert_eq!(computer.choose_column(&board)?, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod player;

pub mod computer;

pub mod game;


/// The width of the game board in columns
pub const WIDTH: usize = 7;

/// The height of the game board in rows
pub const HEIGHT: usize = 6;

/// The number of aligned discs needed to win
pub const LINE_LENGTH: usize = 4;

// every orientation must have room for at least one winning window
const_assert!(WIDTH >= LINE_LENGTH && HEIGHT >= LINE_LENGTH);
