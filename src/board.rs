use anyhow::{anyhow, bail, Result};
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::{HEIGHT, LINE_LENGTH, WIDTH};

/// The symbol rendered for an empty cell
pub const EMPTY_SYMBOL: char = '-';

/// A player's disc symbol
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Mark(char);

impl Mark {
    /// The human player's default mark
    pub const O: Mark = Mark('o');
    /// The computer player's default mark
    pub const X: Mark = Mark('x');

    pub fn new(symbol: char) -> Result<Self> {
        if symbol == EMPTY_SYMBOL || symbol.is_whitespace() {
            return Err(anyhow!("'{}' cannot be used as a mark", symbol));
        }
        Ok(Self(symbol))
    }

    pub fn symbol(&self) -> char {
        self.0
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Disc(Mark),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Disc(mark) => Some(*mark),
        }
    }

    fn symbol(&self) -> char {
        match self {
            Cell::Empty => EMPTY_SYMBOL,
            Cell::Disc(mark) => mark.symbol(),
        }
    }
}

/// The Connect 4 grid
///
/// Row 0 is the top of the board and row `HEIGHT - 1` the bottom, so discs
/// fall towards higher row indices. Copying a `Board` gives an independent
/// grid, which is how move simulation is done.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Places `mark` in the lowest empty cell of `column`
    ///
    /// Returns the row the disc landed in, or `None` (leaving the board
    /// untouched) if the column is full or out of range.
    pub fn drop_disc(&mut self, column: usize, mark: Mark) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        let row = (0..HEIGHT).rev().find(|&row| self.cells[row][column].is_empty())?;
        self.cells[row][column] = Cell::Disc(mark);
        Some(row)
    }

    /// Clears the topmost disc of `column`, returning its mark
    pub fn remove_from(&mut self, column: usize) -> Option<Mark> {
        if column >= WIDTH {
            return None;
        }
        let row = (0..HEIGHT).find(|&row| !self.cells[row][column].is_empty())?;
        let removed = self.cells[row][column].mark();
        self.cells[row][column] = Cell::Empty;
        removed
    }

    /// Validating variant of [`Board::drop_disc`] for moves coming from a player
    pub fn play_checked(&mut self, column: isize, mark: Mark) -> Result<usize> {
        if column < 0 || column >= WIDTH as isize {
            bail!(
                "Invalid move, column {} out of range. Columns must be between 0 and {}",
                column,
                WIDTH - 1
            );
        }
        self.drop_disc(column as usize, mark)
            .ok_or_else(|| anyhow!("Invalid move, column {} full", column))
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        !self.cells[0][column].is_empty()
    }

    pub fn is_valid_move(&self, column: isize) -> bool {
        (0..WIDTH as isize).contains(&column) && !self.is_column_full(column as usize)
    }

    /// The number of discs stacked in `column`
    pub fn column_height(&self, column: usize) -> usize {
        (0..HEIGHT)
            .filter(|&row| !self.cells[row][column].is_empty())
            .count()
    }

    pub fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&column| !self.is_column_full(column))
    }

    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| self.is_column_full(column))
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    pub fn winner(&self) -> Option<Mark> {
        self.vertical_winner()
            .or_else(|| self.horizontal_winner())
            .or_else(|| self.diagonal_winner())
    }

    fn vertical_winner(&self) -> Option<Mark> {
        (0..WIDTH).find_map(|column| {
            (0..=HEIGHT - LINE_LENGTH).find_map(|row| self.line_winner(row, column, 1, 0))
        })
    }

    fn horizontal_winner(&self) -> Option<Mark> {
        (0..HEIGHT).find_map(|row| {
            (0..=WIDTH - LINE_LENGTH).find_map(|column| self.line_winner(row, column, 0, 1))
        })
    }

    // windows are anchored on their bottom cell and climb up and sideways,
    // so every diagonal window is visited once per direction
    fn diagonal_winner(&self) -> Option<Mark> {
        for row in LINE_LENGTH - 1..HEIGHT {
            for column in 0..=WIDTH - LINE_LENGTH {
                let winner = self
                    .line_winner(row, column, -1, 1)
                    .or_else(|| self.line_winner(row, column + LINE_LENGTH - 1, -1, -1));
                if winner.is_some() {
                    return winner;
                }
            }
        }
        None
    }

    /// Checks the window of `LINE_LENGTH` cells starting at (`row`, `column`)
    /// and stepping by (`d_row`, `d_column`); the caller keeps it on the board
    fn line_winner(
        &self,
        row: usize,
        column: usize,
        d_row: isize,
        d_column: isize,
    ) -> Option<Mark> {
        let first = self.cells[row][column].mark()?;
        let aligned = (1..LINE_LENGTH as isize).all(|i| {
            let r = (row as isize + i * d_row) as usize;
            let c = (column as isize + i * d_column) as usize;
            self.cells[r][c] == Cell::Disc(first)
        });
        if aligned {
            Some(first)
        } else {
            None
        }
    }

    /// The text dump of the grid, top row first
    pub fn render(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    /// Writes the rendered grid to `out`
    ///
    /// With `colors` set the first mark is drawn red and the second yellow.
    /// The tokens are the same as [`Board::render`] either way.
    pub fn display<W: Write>(&self, out: &mut W, colors: Option<(Mark, Mark)>) -> Result<()> {
        let (first, second) = match colors {
            None => {
                for line in self.render() {
                    writeln!(out, "{}", line)?;
                }
                out.flush()?;
                return Ok(());
            }
            Some(marks) => marks,
        };

        for row in self.cells.iter() {
            for (column, cell) in row.iter().enumerate() {
                if column > 0 {
                    out.queue(PrintStyledContent(style(" ".to_string())))?;
                }
                let color = match cell {
                    Cell::Disc(mark) if *mark == first => Color::Red,
                    Cell::Disc(mark) if *mark == second => Color::Yellow,
                    Cell::Disc(_) => Color::White,
                    Cell::Empty => Color::DarkBlue,
                };
                out.queue(PrintStyledContent(
                    style(cell.symbol().to_string())
                        .attribute(Attribute::Bold)
                        .with(color),
                ))?;
            }
            out.queue(PrintStyledContent(style("\n".to_string())))?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render().join("\n"))
    }
}

/// Parses the [`Board::render`] format back into a board
impl FromStr for Board {
    type Err = anyhow::Error;

    fn from_str(grid: &str) -> Result<Self> {
        let mut board = Self::new();

        let rows: Vec<&str> = grid
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != HEIGHT {
            bail!("expected {} rows, found {}", HEIGHT, rows.len());
        }

        for (row, line) in rows.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != WIDTH {
                bail!("row {} has {} cells, expected {}", row, tokens.len(), WIDTH);
            }
            for (column, token) in tokens.iter().enumerate() {
                let mut chars = token.chars();
                let symbol = match (chars.next(), chars.next()) {
                    (Some(symbol), None) => symbol,
                    _ => bail!("could not parse '{}' as a cell", token),
                };
                if symbol != EMPTY_SYMBOL {
                    board.cells[row][column] = Cell::Disc(Mark::new(symbol)?);
                }
            }
        }

        // no floating discs
        for column in 0..WIDTH {
            let height = board.column_height(column);
            if (HEIGHT - height..HEIGHT).any(|row| board.cells[row][column].is_empty()) {
                bail!("column {} has a floating disc", column);
            }
        }

        Ok(board)
    }
}
