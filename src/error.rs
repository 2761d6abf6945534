//! Error type shared by the rules core, the session driver and persistence.

use crate::game_repr::Color;

/// Domain errors for the rules engine.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    /// The board has no king of the given color. This is a corrupted board,
    /// not something a caller can recover from by retrying.
    #[error("no {0:?} king on the board")]
    KingNotFound(Color),

    #[error("move buffer exhausted: {requested} moves requested, limit is {limit}")]
    ResourceExhausted { requested: usize, limit: usize },

    #[error("move index {index} out of range ({len} moves available)")]
    InvalidSelection { index: usize, len: usize },

    #[error("move leaves the {0:?} king in check")]
    IllegalMove(Color),

    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    #[error("malformed save data: {0}")]
    MalformedSave(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChessError>;
