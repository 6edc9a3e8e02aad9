//! End-to-end tests for `find_best_move`.
//!
//! Pins exact (column, score, nodes) triples for fixed positions so any
//! change to scan order, tie-breaking or the early-win exit shows up.

use score4_core::{Board, Color, EMPTY_BOARD};
use score4_engine::{ORANGE_WINS, SearchConfig, SearchResult, evaluate, find_best_move, winner};

const MIDGAME: &str = "......./......./...y.../..oo.../..yo.../.yoyo..";

const ONE_CELL_LEFT: &str = "yoo.yyo/oyyyoyy/yooyoyo/oyyoyoo/ooyoyoy/yoyoyoo";

/// Helper: search `board` for `color` at `depth` and check the board survives.
fn search(board: &str, color: Color, depth: u8) -> SearchResult {
    let mut board: Board = board.parse().unwrap();
    let before = board;
    let result = find_best_move(&mut board, color, &SearchConfig::new(depth));
    assert_eq!(board, before, "board modified by search at depth {depth}");
    result
}

fn expect(board: &str, depth: u8, best_move: usize, score: i32, nodes: u64) {
    let result = search(board, Color::Orange, depth);
    assert_eq!(
        result,
        SearchResult {
            best_move: Some(best_move),
            score,
            nodes,
        },
        "depth {depth} on {board}"
    );
}

// ── Empty board ───────────────────────────────────────────────────────────────

#[test]
fn empty_board_shallow() {
    expect(EMPTY_BOARD, 1, 3, 7, 8);
    expect(EMPTY_BOARD, 2, 5, -3, 57);
    expect(EMPTY_BOARD, 3, 3, 10, 400);
}

#[test]
fn empty_board_deeper() {
    expect(EMPTY_BOARD, 4, 3, -3, 2_801);
    expect(EMPTY_BOARD, 5, 5, 7, 19_608);
    expect(EMPTY_BOARD, 6, 3, 0, 137_257);
}

// ── Midgame ───────────────────────────────────────────────────────────────────

#[test]
fn midgame_all_depths() {
    let expected = [(25, 8), (15, 57), (27, 393), (17, 2_726), (34, 16_726)];
    for (depth, (score, nodes)) in (1..).zip(expected) {
        expect(MIDGAME, depth, 2, score, nodes);
    }
}

// ── Decided and nearly-decided boards ─────────────────────────────────────────

#[test]
fn immediate_win_at_any_depth() {
    let board = "......./......./......./......./yyy..../ooo....";
    expect(board, 1, 3, ORANGE_WINS, 4);
    expect(board, 3, 3, ORANGE_WINS, 100);
}

#[test]
fn playing_the_returned_move_wins() {
    let mut board: Board = "......./......./......./......./yyy..../ooo...."
        .parse()
        .unwrap();
    let result = find_best_move(&mut board, Color::Orange, &SearchConfig::new(5));
    let column = result.best_move.expect("a winning move exists");
    board.drop_disc(column, Color::Orange).unwrap();
    assert_eq!(winner(&board), Some(Color::Orange));
}

#[test]
fn last_cell_scores() {
    // At depth 1 the last drop is scored statically. One ply deeper, Yellow
    // has no reply and its unset score reaches the root.
    expect(ONE_CELL_LEFT, 1, 3, 6, 2);
    expect(ONE_CELL_LEFT, 2, 3, 10_000_000, 2);
}

#[test]
fn full_board_reports_no_move() {
    let board = "yooyyyo/oyyyoyy/yooyoyo/oyyoyoo/ooyoyoy/yoyoyoo";
    for color in Color::ALL {
        let result = search(board, color, 7);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluate(&board.parse().unwrap()));
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[test]
fn identical_inputs_identical_results() {
    let results: Vec<SearchResult> = (0..3).map(|_| search(MIDGAME, Color::Yellow, 4)).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert!(results[0].best_move.is_some());
}
