//! Error types for puzzle loading.
//!
//! The search itself has no failure mode: an unsolvable board is a verdict,
//! not an error. Everything here is raised while turning external input into
//! a well-formed [`Board`](crate::engine::Board).

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or validating puzzles.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The puzzle file could not be read.
    #[error("failed to read puzzle file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token in the input is not an integer.
    #[error("token {index} ('{token}') is not an integer")]
    InvalidToken { index: usize, token: String },

    /// The number of cells supplied does not fill a board.
    #[error("expected {expected} tiles, found {found}")]
    WrongTileCount { expected: usize, found: usize },

    /// A label is neither the blank sentinel nor a valid tile.
    #[error("tile label {0} is out of range")]
    TileOutOfRange(i32),

    /// The same tile label appears more than once.
    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),

    /// No cell holds the blank.
    #[error("board has no blank cell")]
    MissingBlank,

    /// More than one cell holds the blank.
    #[error("board has {0} blank cells, expected exactly one")]
    MultipleBlanks(usize),
}

/// Result type alias for puzzle operations.
pub type Result<T> = std::result::Result<T, PuzzleError>;
