//! Error types for the xo crate

use thiserror::Error;

/// Main error type for the xo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("no free cells to choose from")]
    NoFreeCells,

    #[error("solver table has no rank for position '{key}'")]
    MissingRank { key: String },

    #[error("unknown player kind '{input}'. Expected one of: {expected}")]
    UnknownPlayerKind { input: String, expected: String },

    #[error("unknown seat '{input}' (expected 'a' or 'b')")]
    UnknownSeat { input: String },

    #[error("simulation stalled: seat {seat} has no automated strategy")]
    SimulationStalled { seat: crate::tictactoe::Seat },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
