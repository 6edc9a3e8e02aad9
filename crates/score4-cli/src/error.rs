//! Command-line errors.

use score4_core::BoardError;

/// Errors that can occur while turning arguments into a search request.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A disc argument is not a color letter followed by two digits.
    #[error("malformed disc argument: {arg}")]
    MalformedDisc {
        /// The argument that failed to parse.
        arg: String,
    },

    /// `-level` was the last argument.
    #[error("-level requires a depth")]
    MissingLevel,

    /// The value after `-level` is not a positive depth.
    #[error("invalid level: {value}")]
    InvalidLevel {
        /// The value that failed to parse.
        value: String,
    },

    /// The discs do not form a legal position.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying validation error.
        #[from]
        source: BoardError,
    },
}

#[cfg(test)]
mod tests {
    use super::CliError;
    use score4_core::BoardError;

    #[test]
    fn display() {
        let err = CliError::InvalidLevel {
            value: "deep".to_string(),
        };
        assert_eq!(err.to_string(), "invalid level: deep");
    }

    #[test]
    fn from_board_error() {
        let err: CliError = BoardError::FloatingDisc { row: 0, column: 1 }.into();
        assert_eq!(
            err.to_string(),
            "invalid board: disc at row 0, column 1 has an empty cell below it"
        );
    }
}
