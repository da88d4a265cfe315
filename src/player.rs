//! The player abstraction and the console-driven human player

use anyhow::{bail, Result};
use tracing::debug;

use std::io::{stdin, stdout, BufRead, BufReader, Stdin, Stdout, Write};

use crate::board::{Board, Mark};

/// Something that can pick a column to play in
pub trait Player {
    fn mark(&self) -> Mark;

    /// Picks a column for the current position
    ///
    /// The returned column is not guaranteed to be playable; the game
    /// keeps asking until it is.
    fn choose_column(&mut self, board: &Board) -> Result<isize>;
}

/// A player typing column numbers on a text console
pub struct HumanPlayer<R: BufRead, W: Write> {
    mark: Mark,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(mark: Mark, input: R, output: W) -> Self {
        Self {
            mark,
            input,
            output,
        }
    }
}

impl HumanPlayer<BufReader<Stdin>, Stdout> {
    /// Creates a human player reading from stdin and prompting on stdout
    pub fn stdio(mark: Mark) -> Self {
        Self::new(mark, BufReader::new(stdin()), stdout())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn choose_column(&mut self, _board: &Board) -> Result<isize> {
        writeln!(self.output, "Please enter a column:")?;
        self.output.flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            bail!("input closed before player {} chose a column", self.mark);
        }

        let column = parse_column(&buffer);
        debug!(input = %buffer.trim(), column, "read column");
        Ok(column)
    }
}

/// Reads the leading integer of `text`, ignoring anything after it
///
/// Text with no leading digits gives 0. A number too large for `isize`
/// saturates, so the board still rejects it as out of range.
pub fn parse_column(text: &str) -> isize {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut column: isize = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = (digit - b'0') as isize;
        let next = column.checked_mul(10).and_then(|value| {
            if negative {
                value.checked_sub(digit)
            } else {
                value.checked_add(digit)
            }
        });
        match next {
            Some(value) => column = value,
            None => return if negative { isize::MIN } else { isize::MAX },
        }
    }
    column
}
