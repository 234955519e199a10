//! Error type shared by the state constructors, the text parser and path reconstruction.
use thiserror::Error;

/// Errors raised for malformed input or misuse of search results.
///
/// An unreachable goal is *not* an error: the solvers report it as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// A state did not have exactly nine tiles.
    #[error("a state needs exactly 9 tiles, found {found}")]
    WrongLength { found: usize },

    /// A tile value outside `0..=8`.
    #[error("tile {0} is out of range (expected 0-8)")]
    TileOutOfRange(u8),

    /// The same tile value appeared more than once.
    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),

    /// A piece of text that could not be read as a tile.
    #[error("unrecognized token '{0}'")]
    InvalidToken(String),

    /// Path reconstruction was asked for a state the search never discovered.
    #[error("target state was not discovered by the search")]
    TargetNotDiscovered,
}
