//! Board-string parsing and serialization for [`Board`].
//!
//! Six `/`-separated rows, top row first, seven cells each:
//! `.` empty, `o` Orange, `y` Yellow.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, HEIGHT, WIDTH};
use crate::cell::Cell;
use crate::error::ParseError;

/// The board string for an empty board.
pub const EMPTY_BOARD: &str = "......./......./......./......./......./.......";

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Board, ParseError> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != HEIGHT {
            return Err(ParseError::WrongRowCount { found: rows.len() });
        }

        let mut cells = [[Cell::Empty; WIDTH]; HEIGHT];
        for (row, row_str) in rows.iter().enumerate() {
            let length = row_str.chars().count();
            if length != WIDTH {
                return Err(ParseError::BadRowLength { row, length });
            }
            for (column, c) in row_str.chars().enumerate() {
                cells[row][column] =
                    Cell::from_char(c).ok_or(ParseError::InvalidCellChar { character: c })?;
            }
        }

        let board = Board::from_rows(cells);
        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.rows().iter().enumerate() {
            if index > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}
