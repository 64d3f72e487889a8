//! Error types for board operations.

use std::fmt;

use super::{format_square, Square};

/// Why a remote move payload was rejected without touching the board.
///
/// Remote moves are trusted to be legal (the peer validated them) but never
/// trusted to be well formed; a malformed payload is a no-op, not a crash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteMoveError {
    /// A coordinate in the payload falls outside the board.
    OutOfRange { row: usize, col: usize },
    /// The origin square holds no piece.
    EmptyOrigin { square: Square },
    /// The game has already ended.
    GameOver,
}

impl fmt::Display for RemoteMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteMoveError::OutOfRange { row, col } => {
                write!(f, "coordinates ({row}, {col}) out of range (must be 0-7)")
            }
            RemoteMoveError::EmptyOrigin { square } => {
                write!(f, "origin square {} is empty", format_square(*square))
            }
            RemoteMoveError::GameOver => write!(f, "game is already over"),
        }
    }
}

impl std::error::Error for RemoteMoveError {}
