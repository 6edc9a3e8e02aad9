//! Static evaluation: window histogram scoring and win detection.

pub mod windows;

use score4_core::{Board, Color};

pub use windows::WindowCounts;

/// Score of a board on which Orange has four in a line.
pub const ORANGE_WINS: i32 = 1_000_000;

/// Score of a board on which Yellow has four in a line.
pub const YELLOW_WINS: i32 = -ORANGE_WINS;

/// Evaluate `board` from Orange's point of view.
///
/// Returns [`ORANGE_WINS`] or [`YELLOW_WINS`] for a decided board, otherwise
/// a heuristic score well inside that range.
pub fn evaluate(board: &Board) -> i32 {
    WindowCounts::scan(board).score()
}

/// Return the color with four in a line on `board`, if any.
pub fn winner(board: &Board) -> Option<Color> {
    match evaluate(board) {
        ORANGE_WINS => Some(Color::Orange),
        YELLOW_WINS => Some(Color::Yellow),
        _ => None,
    }
}
