//! Fixed-depth minimax over a single mutable board.

use std::ops::ControlFlow;

use score4_core::{Board, Color, WIDTH};
use tracing::debug;

use crate::eval::{ORANGE_WINS, YELLOW_WINS, evaluate};
use crate::search::SearchConfig;

/// Starting best score: worse than any evaluation for the side to move.
pub const INF: i32 = 10_000_000;

/// Minimax search from the point of view of Orange.
///
/// Columns are tried left to right. A move that wins on the spot ends the
/// scan at this node. Otherwise ties go to the rightmost column, for both
/// the maximizing and the minimizing side. A node with no playable column
/// returns `(None, ∓INF)`.
///
/// Every disc dropped is lifted again before the next column is tried, so
/// `board` is unchanged when this returns.
pub(super) fn minimax(
    maximize: bool,
    color: Color,
    depth: u8,
    board: &mut Board,
    ctx: &mut SearchContext<'_>,
) -> (Option<usize>, i32) {
    ctx.nodes += 1;

    if depth == 0 {
        return (None, evaluate(board));
    }

    let win = if maximize { ORANGE_WINS } else { YELLOW_WINS };
    let mut best_score = if maximize { -INF } else { INF };
    let mut best_move = None;

    for column in 0..WIDTH {
        if board.is_column_full(column) {
            continue;
        }

        let outcome = board.with_disc(column, color, |board, _row| {
            if evaluate(board) == win {
                return ControlFlow::Break(());
            }
            let (_, score) = minimax(!maximize, !color, depth - 1, board, ctx);
            ControlFlow::Continue(score)
        });

        let score = match outcome {
            None => continue,
            Some(ControlFlow::Break(())) => {
                best_move = Some(column);
                best_score = win;
                break;
            }
            Some(ControlFlow::Continue(score)) => score,
        };

        if ctx.config.debug_trace && depth == ctx.config.max_depth {
            debug!(depth, column, score, "root move scored");
        }

        let improves = if maximize {
            score >= best_score
        } else {
            score <= best_score
        };
        if improves {
            best_score = score;
            best_move = Some(column);
        }
    }

    (best_move, best_score)
}

/// Search state threaded through minimax calls.
pub(super) struct SearchContext<'a> {
    /// Total search calls made, root included.
    pub nodes: u64,
    /// Depth limit and tracing switch.
    pub config: &'a SearchConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(board: &str, maximize: bool, color: Color, depth: u8) -> ((Option<usize>, i32), u64) {
        let mut board: Board = board.parse().unwrap();
        let before = board;
        let config = SearchConfig::new(depth);
        let mut ctx = SearchContext {
            nodes: 0,
            config: &config,
        };
        let result = minimax(maximize, color, depth, &mut board, &mut ctx);
        assert_eq!(board, before, "search must leave the board untouched");
        (result, ctx.nodes)
    }

    #[test]
    fn depth_zero_is_static_eval() {
        let ((mv, score), nodes) = run(
            "......./......./...y.../..oo.../..yo.../.yoyo..",
            true,
            Color::Orange,
            0,
        );
        assert_eq!(mv, None);
        assert_eq!(score, 14);
        assert_eq!(nodes, 1);
    }

    #[test]
    fn immediate_win_stops_scan() {
        let ((mv, score), nodes) = run(
            "......./......./......./......./yyy..../ooo....",
            true,
            Color::Orange,
            3,
        );
        assert_eq!(mv, Some(3));
        assert_eq!(score, ORANGE_WINS);
        // Columns 4..6 are never searched once column 3 wins.
        assert_eq!(nodes, 100);
    }

    #[test]
    fn minimizer_immediate_win() {
        let ((mv, score), nodes) = run(
            "......./......./......./......./ooo.o../yyy.o..",
            false,
            Color::Yellow,
            1,
        );
        assert_eq!(mv, Some(3));
        assert_eq!(score, YELLOW_WINS);
        assert_eq!(nodes, 4);
    }

    #[test]
    fn nodes_without_playable_column_keep_initial_score() {
        // One empty cell left. After Orange fills it, Yellow has no move and
        // the unset minimizer score propagates to the root.
        let board = ".ooyyyo/oyyyoyy/yooyoyo/oyyoyoo/ooyoyoy/yoyoyoo";
        assert_eq!(run(board, true, Color::Orange, 1).0, (Some(0), -2));
        assert_eq!(run(board, true, Color::Orange, 2).0, (Some(0), INF));
    }

    #[test]
    fn minimizer_without_moves_returns_positive_inf() {
        let board = "yooyyyo/oyyyoyy/yooyoyo/oyyoyoo/ooyoyoy/yoyoyoo";
        assert_eq!(run(board, false, Color::Yellow, 2).0, (None, INF));
        assert_eq!(run(board, true, Color::Orange, 2).0, (None, -INF));
    }
}
