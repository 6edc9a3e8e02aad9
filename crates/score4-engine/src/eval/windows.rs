//! Four-cell window histogram.
//!
//! Every horizontal, vertical and diagonal run of four cells is summed; the
//! sum (-4..=4) selects one of nine buckets. The bucket counts fully
//! determine the heuristic score.

use score4_core::{Board, HEIGHT, WIDTH};

use super::{ORANGE_WINS, YELLOW_WINS};

/// Number of cells in a scoring window.
pub const WINDOW: usize = 4;

/// Number of histogram buckets: one per possible window sum.
pub const BUCKETS: usize = 2 * WINDOW + 1;

/// Offset from a window sum to its bucket index.
const OFFSET: i32 = WINDOW as i32;

/// Weights for windows holding one, two or three discs of one color and
/// nothing of the other.
const ONE: i32 = 1;
const TWO: i32 = 2;
const THREE: i32 = 5;

/// Histogram of window sums, indexed by `sum + 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowCounts {
    counts: [u32; BUCKETS],
}

impl WindowCounts {
    /// Scan every window on `board` and count the sums.
    pub fn scan(board: &Board) -> WindowCounts {
        let mut counts = WindowCounts::default();
        let value = |row: usize, column: usize| board.cell(row, column).value();

        // Horizontal: slide along each row, adding the new cell and dropping
        // the one that leaves the window.
        for row in 0..HEIGHT {
            let mut sum: i32 = (0..WINDOW - 1).map(|column| value(row, column)).sum();
            for column in WINDOW - 1..WIDTH {
                sum += value(row, column);
                counts.record(sum);
                sum -= value(row, column + 1 - WINDOW);
            }
        }

        // Vertical
        for column in 0..WIDTH {
            let mut sum: i32 = (0..WINDOW - 1).map(|row| value(row, column)).sum();
            for row in WINDOW - 1..HEIGHT {
                sum += value(row, column);
                counts.record(sum);
                sum -= value(row + 1 - WINDOW, column);
            }
        }

        // Down-right diagonals
        for row in 0..=HEIGHT - WINDOW {
            for column in 0..=WIDTH - WINDOW {
                let sum = (0..WINDOW).map(|i| value(row + i, column + i)).sum();
                counts.record(sum);
            }
        }

        // Up-right diagonals
        for row in WINDOW - 1..HEIGHT {
            for column in 0..=WIDTH - WINDOW {
                let sum = (0..WINDOW).map(|i| value(row - i, column + i)).sum();
                counts.record(sum);
            }
        }

        counts
    }

    #[inline]
    fn record(&mut self, sum: i32) {
        self.counts[(sum + OFFSET) as usize] += 1;
    }

    /// Number of windows whose cells sum to `sum`.
    ///
    /// # Panics
    ///
    /// Panics if `sum` is outside `-4..=4`.
    #[inline]
    pub fn get(&self, sum: i32) -> u32 {
        self.counts[(sum + OFFSET) as usize]
    }

    /// Total number of windows counted.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Convert the histogram into a score.
    ///
    /// A Yellow four is checked before an Orange four, so a board holding
    /// both reports a Yellow win.
    pub fn score(&self) -> i32 {
        if self.get(-4) != 0 {
            return YELLOW_WINS;
        }
        if self.get(4) != 0 {
            return ORANGE_WINS;
        }
        let count = |sum: i32| self.get(sum) as i32;
        ONE * count(1) + TWO * count(2) + THREE * count(3)
            - ONE * count(-1)
            - TWO * count(-2)
            - THREE * count(-3)
    }
}
