//! A two-player chess game with full rules and TCP play.
//!
//! The crate is layered bottom-up:
//!
//! - [`board`]: piece and square types, raw attack generation, legal move
//!   generation, and move execution on an 8x8 mailbox board.
//! - [`game`]: one game session, from piece selection and move attempts
//!   through terminal-state detection, with remote moves replayed
//!   defensively.
//! - [`net`]: newline-delimited JSON over a single TCP connection, with a
//!   receiver thread feeding a channel so the game is driven from one
//!   thread only.
//! - [`sync`]: the stop flag shared with the receiver thread.
//!
//! # Example
//! ```
//! use netchess::{Game, Square};
//!
//! let mut game = Game::new();
//! game.select(Square(6, 4));
//! assert!(game.attempt_move(Square(4, 4)).is_some()); // e2e4
//! ```

pub mod board;
pub mod game;
pub mod net;
pub mod sync;

pub use board::{
    format_square, parse_square, Board, BoardBuilder, Color, MoveRecord, Piece, PieceKind,
    RemoteMoveError, Square,
};
pub use game::Game;
pub use net::{Connection, Host, MovePayload, NetEvent};
pub use sync::StopFlag;
