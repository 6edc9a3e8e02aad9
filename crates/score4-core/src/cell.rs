//! Tri-state board cells.

use std::fmt;

use crate::color::Color;

/// Contents of a single board square.
///
/// The discriminants are the signed values summed by the evaluator: four
/// cells in a line add up to a count that is positive for Orange and
/// negative for Yellow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Orange = 1,
    Yellow = -1,
}

impl Cell {
    /// Return the signed value of this cell (0, +1 or -1).
    #[inline]
    pub const fn value(self) -> i32 {
        self as i8 as i32
    }

    /// Return `true` if no disc occupies this cell.
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Return the color of the disc in this cell, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Orange => Some(Color::Orange),
            Cell::Yellow => Some(Color::Yellow),
        }
    }

    /// Return the board-notation character for this cell.
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Orange => 'o',
            Cell::Yellow => 'y',
        }
    }

    /// Parse a board-notation character.
    pub const fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'o' => Some(Cell::Orange),
            'y' => Some(Cell::Yellow),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
