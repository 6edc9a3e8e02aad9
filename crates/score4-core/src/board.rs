//! The 7x6 gravity board.

use std::fmt;

use crate::cell::Cell;
use crate::color::Color;
use crate::error::BoardError;

/// Number of columns.
pub const WIDTH: usize = 7;

/// Number of rows.
pub const HEIGHT: usize = 6;

/// A Connect-Four position: a grid of cells, row 0 at the top.
///
/// Within a column all discs are stacked from the bottom row upward with no
/// gaps. [`Board::validate`] checks this; the move applicator preserves it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    /// Return a board with no discs.
    pub const fn empty() -> Board {
        Board {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Construct a board from raw rows. Used by board-string parsing.
    pub(crate) const fn from_rows(cells: [[Cell; WIDTH]; HEIGHT]) -> Board {
        Board { cells }
    }

    /// Return the cell at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the board.
    #[inline]
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Overwrite a single cell.
    #[inline]
    pub(crate) fn set_cell(&mut self, row: usize, column: usize, cell: Cell) {
        self.cells[row][column] = cell;
    }

    /// Return the rows of the board, top row first.
    #[inline]
    pub fn rows(&self) -> &[[Cell; WIDTH]; HEIGHT] {
        &self.cells
    }

    /// Return `true` if `column` cannot take another disc.
    ///
    /// Columns outside the board are reported as full.
    #[inline]
    pub fn is_column_full(&self, column: usize) -> bool {
        column >= WIDTH || !self.cells[0][column].is_empty()
    }

    /// Return `true` if every column is full.
    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| self.is_column_full(column))
    }

    /// Count the discs on the board.
    pub fn disc_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Put a disc directly at `(row, column)`, without gravity.
    ///
    /// Used to set up positions from external input. The result may violate
    /// the gravity invariant until all discs are placed, so callers should
    /// [`validate`](Board::validate) once setup is complete.
    pub fn place(&mut self, row: usize, column: usize, color: Color) -> Result<(), BoardError> {
        if row >= HEIGHT || column >= WIDTH {
            return Err(BoardError::OutOfBounds { row, column });
        }
        self.cells[row][column] = color.cell();
        Ok(())
    }

    /// Validate the gravity invariant: no disc rests on an empty cell.
    pub fn validate(&self) -> Result<(), BoardError> {
        for column in 0..WIDTH {
            for row in 0..HEIGHT - 1 {
                if !self.cells[row][column].is_empty() && self.cells[row + 1][column].is_empty() {
                    return Err(BoardError::FloatingDisc { row, column });
                }
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a grid with column indices.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.rows() {
            let line: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let footer: Vec<String> = (0..WIDTH).map(|column| column.to_string()).collect();
        write!(f, "{}", footer.join(" "))
    }
}
