//! Evaluation and search for score4.

pub mod eval;
pub mod search;

pub use eval::{ORANGE_WINS, YELLOW_WINS, evaluate, winner};
pub use search::{DEFAULT_MAX_DEPTH, SearchConfig, SearchResult, find_best_move};
