//! Player colors.

use std::fmt;
use std::ops::Not;

use crate::cell::Cell;

/// A player color: Orange or Yellow.
///
/// Orange is the maximizing side: its wins map to the positive sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Orange,
    Yellow,
}

impl Color {
    /// Both colors, Orange first.
    pub const ALL: [Color; 2] = [Color::Orange, Color::Yellow];

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::Orange => Color::Yellow,
            Color::Yellow => Color::Orange,
        }
    }

    /// Return the cell value a disc of this color occupies.
    #[inline]
    pub const fn cell(self) -> Cell {
        match self {
            Color::Orange => Cell::Orange,
            Color::Yellow => Cell::Yellow,
        }
    }

    /// Return `true` for the side whose wins score positively.
    #[inline]
    pub const fn is_maximizer(self) -> bool {
        matches!(self, Color::Orange)
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Orange => write!(f, "orange"),
            Color::Yellow => write!(f, "yellow"),
        }
    }
}
