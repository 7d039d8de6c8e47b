//! Error types for the advsearch crate

use thiserror::Error;

/// Main error type for the advsearch crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: square ({x}, {y}) does not flip any disc")]
    IllegalMove { x: usize, y: usize },

    #[error("square ({x}, {y}) is off the board")]
    OffBoard { x: usize, y: usize },

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("search depth {depth} is too shallow to pick a move")]
    DepthTooShallow { depth: i32 },

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid player '{player}' in '{context}' (expected 'B' or 'W')")]
    InvalidPlayerString { player: String, context: String },

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
