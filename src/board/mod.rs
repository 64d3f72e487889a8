//! Chess board representation and rules.
//!
//! A mailbox board (8x8 grid of optional pieces) with raw attack
//! generation, legal move generation, and move execution. Castling
//! eligibility lives on each piece's `has_moved` flag; the en passant
//! window lives on the board and lasts exactly one ply.
//!
//! # Example
//! ```
//! use netchess::board::{Board, Square};
//!
//! let mut board = Board::new();
//! let moves = board.legal_destinations(Square(6, 4));
//! assert_eq!(moves.len(), 2); // e2 pawn: one or two squares forward
//! ```

mod attacks;
mod builder;
mod error;
mod execute;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::RemoteMoveError;
pub use state::Board;
pub use types::{format_square, parse_square, Color, MoveRecord, Piece, PieceKind, Square};
