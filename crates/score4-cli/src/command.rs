//! Command-line parsing.

use score4_core::{Board, Color};
use score4_engine::SearchConfig;
use tracing::warn;

use crate::error::CliError;

/// Everything a single run needs: the position and the search settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Position to move in. Orange is to move.
    pub board: Board,
    /// Search settings.
    pub config: SearchConfig,
}

/// Parse the program arguments (without the program name).
///
/// Recognized arguments:
/// - `oRC` / `yRC` -- an Orange / Yellow disc at row `R` (0 = top), column `C`
/// - `-debug` -- log the score of every root column
/// - `-level N` -- search `N` plies deep
///
/// Unknown arguments are skipped with a warning. The resulting board must
/// satisfy the gravity rule.
pub fn parse_args<I, S>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    let mut board = Board::empty();
    let mut config = SearchConfig::default();

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_ref();
        match arg {
            "-debug" => {
                config.debug_trace = true;
                i += 1;
            }
            "-level" => {
                config.max_depth = parse_level(args.get(i + 1).map(|s| s.as_ref()))?;
                i += 2;
            }
            _ if arg.starts_with(['o', 'y']) => {
                let (row, column, color) = parse_disc(arg)?;
                board.place(row, column, color)?;
                i += 1;
            }
            _ => {
                warn!(arg, "ignoring unrecognized argument");
                i += 1;
            }
        }
    }

    board.validate()?;
    Ok(Invocation { board, config })
}

/// Parse a disc argument such as `o53` into `(row, column, color)`.
fn parse_disc(arg: &str) -> Result<(usize, usize, Color), CliError> {
    let malformed = || CliError::MalformedDisc {
        arg: arg.to_string(),
    };

    let mut chars = arg.chars();
    let color = match chars.next() {
        Some('o') => Color::Orange,
        Some('y') => Color::Yellow,
        _ => return Err(malformed()),
    };
    let row = chars.next().and_then(|c| c.to_digit(10)).ok_or_else(malformed)?;
    let column = chars.next().and_then(|c| c.to_digit(10)).ok_or_else(malformed)?;
    if chars.next().is_some() {
        return Err(malformed());
    }

    Ok((row as usize, column as usize, color))
}

/// Parse the value following `-level`.
fn parse_level(token: Option<&str>) -> Result<u8, CliError> {
    let value = token.ok_or(CliError::MissingLevel)?;
    match value.parse::<u8>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(CliError::InvalidLevel {
            value: value.to_string(),
        }),
    }
}
