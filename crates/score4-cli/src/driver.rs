//! One-shot driver: decide a single Orange move and report the result.

use std::io::{self, Write};

use score4_core::Color;
use score4_engine::{find_best_move, winner};
use tracing::{debug, info};

use crate::command::Invocation;

/// What happened on this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input board already shows four in a line for this color.
    AlreadyDecided(Color),
    /// No column can take a disc.
    NoMove,
    /// Orange dropped a disc in `column`; `winner` is set if that ended the game.
    Played {
        /// Column Orange played.
        column: usize,
        /// Winner after the move, if any.
        winner: Option<Color>,
    },
}

impl Outcome {
    /// Return `true` if the game is over after this turn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Played { winner: None, .. })
    }

    /// Write the human-readable report, one line per fact.
    pub fn report(&self, out: &mut impl Write) -> io::Result<()> {
        match *self {
            Outcome::AlreadyDecided(color) => writeln!(out, "{}", verdict(color)),
            Outcome::NoMove => writeln!(out, "No move possible."),
            Outcome::Played { column, winner } => {
                writeln!(out, "{column}")?;
                if let Some(color) = winner {
                    writeln!(out, "{}", verdict(color))?;
                }
                Ok(())
            }
        }
    }
}

/// The engine plays Orange, so an Orange win is ours.
fn verdict(color: Color) -> &'static str {
    match color {
        Color::Orange => "I win.",
        Color::Yellow => "You win.",
    }
}

/// Play one Orange move on the invocation's board.
pub fn run(invocation: Invocation) -> Outcome {
    let Invocation { mut board, config } = invocation;
    debug!(board = %board, max_depth = config.max_depth, "position loaded");

    if let Some(color) = winner(&board) {
        info!(%color, "game already decided");
        return Outcome::AlreadyDecided(color);
    }

    let result = find_best_move(&mut board, Color::Orange, &config);
    let Some(column) = result.best_move else {
        info!(score = result.score, "no legal move");
        return Outcome::NoMove;
    };

    // The search only returns playable columns.
    let row = board.drop_disc(column, Color::Orange);
    debug_assert!(row.is_some(), "search returned full column {column}");
    info!(column, score = result.score, nodes = result.nodes, "move chosen");

    Outcome::Played {
        column,
        winner: winner(&board),
    }
}
