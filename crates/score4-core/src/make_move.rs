//! Move execution via make/unmake on a single mutable board.
//!
//! The search never copies the board: it drops a disc, explores, and lifts
//! the same disc again before trying the next column.

use crate::board::{Board, HEIGHT, WIDTH};
use crate::cell::Cell;
use crate::color::Color;

impl Board {
    /// Drop a disc of `color` into `column`.
    ///
    /// The disc lands in the lowest empty cell, scanning from the bottom row
    /// upward. Returns the row it landed in, or `None` when the column is
    /// full or outside the board; in that case the board is unchanged.
    pub fn drop_disc(&mut self, column: usize, color: Color) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        let row = (0..HEIGHT)
            .rev()
            .find(|&row| self.cell(row, column).is_empty())?;
        self.set_cell(row, column, color.cell());
        Some(row)
    }

    /// Remove the disc at `(row, column)`, the inverse of [`drop_disc`](Board::drop_disc).
    #[inline]
    pub fn lift_disc(&mut self, row: usize, column: usize) {
        self.set_cell(row, column, Cell::Empty);
    }

    /// Drop a disc, run `f` on the resulting board, then lift the disc.
    ///
    /// `f` receives the board and the row the disc landed in. The disc is
    /// lifted before this returns, whatever `f` returns. Returns `None`
    /// without calling `f` when the column rejects the disc.
    pub fn with_disc<R>(
        &mut self,
        column: usize,
        color: Color,
        f: impl FnOnce(&mut Board, usize) -> R,
    ) -> Option<R> {
        let row = self.drop_disc(column, color)?;
        let result = f(self, row);
        self.lift_disc(row, column);
        Some(result)
    }
}
