//! Core Connect-Four types: cells, colors, the gravity board, and disc drops.

mod board;
mod cell;
mod color;
mod error;
mod make_move;
mod notation;

pub use board::{Board, HEIGHT, PrettyBoard, WIDTH};
pub use cell::Cell;
pub use color::Color;
pub use error::{BoardError, ParseError};
pub use notation::EMPTY_BOARD;
