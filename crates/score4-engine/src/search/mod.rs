//! Move selection.

pub mod minimax;

use score4_core::{Board, Color};
use tracing::debug;

use crate::eval::evaluate;
use minimax::{SearchContext, minimax};

/// Search depth used when none is configured.
pub const DEFAULT_MAX_DEPTH: u8 = 7;

/// Immutable search settings, passed into every search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of plies to search.
    pub max_depth: u8,
    /// Log the backed-up score of every root column.
    pub debug_trace: bool,
}

impl SearchConfig {
    /// Settings for a search of `max_depth` plies, tracing off.
    pub const fn new(max_depth: u8) -> Self {
        Self {
            max_depth,
            debug_trace: false,
        }
    }

    /// Return these settings with root-move tracing switched on or off.
    pub const fn with_debug_trace(self, debug_trace: bool) -> Self {
        Self {
            debug_trace,
            ..self
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Column to play, or `None` when no column is playable.
    pub best_move: Option<usize>,
    /// Score of the chosen line from Orange's point of view.
    pub score: i32,
    /// Total search calls made.
    pub nodes: u64,
}

/// Pick a column for `color` on `board`.
///
/// Orange searches as the maximizing side and Yellow as the minimizing side.
/// The board is used as scratch space and is back in its original state when
/// this returns.
///
/// A full board is reported as `best_move: None` with its static evaluation;
/// callers treat that as a draw. The board is assumed not to be decided
/// already: check [`winner`](crate::eval::winner) first.
pub fn find_best_move(board: &mut Board, color: Color, config: &SearchConfig) -> SearchResult {
    if board.is_full() {
        let score = evaluate(board);
        debug!(score, "board is full, nothing to search");
        return SearchResult {
            best_move: None,
            score,
            nodes: 0,
        };
    }

    let mut ctx = SearchContext { nodes: 0, config };
    let (best_move, score) = minimax(
        color.is_maximizer(),
        color,
        config.max_depth,
        board,
        &mut ctx,
    );

    debug!(
        %color,
        depth = config.max_depth,
        ?best_move,
        score,
        nodes = ctx.nodes,
        "search complete"
    );

    SearchResult {
        best_move,
        score,
        nodes: ctx.nodes,
    }
}
