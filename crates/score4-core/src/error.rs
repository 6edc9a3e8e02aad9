//! Error types for board parsing and validation.

/// Errors that occur when parsing a board string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The string does not have exactly 6 `/`-separated rows.
    #[error("expected 6 rows, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 7 cells.
    #[error("row {row} has {length} cells, expected 7")]
    BadRowLength {
        /// Zero-based row index (0 = top).
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid cell character: '{character}'")]
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A disc sits above an empty cell in its column.
    #[error("disc at row {row}, column {column} has an empty cell below it")]
    FloatingDisc {
        /// Row of the unsupported disc (0 = top).
        row: usize,
        /// Column of the unsupported disc.
        column: usize,
    },
    /// A coordinate lies outside the 7x6 grid.
    #[error("cell (row {row}, column {column}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
}
