//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Piece movement patterns and king-safety filtering
//! - `castling.rs` - Castling preconditions and execution
//! - `en_passant.rs` - The en passant window and capture
//! - `execute.rs` - Move execution, promotion, and state bookkeeping
//! - `terminal.rs` - Checkmate and stalemate detection
//! - `proptest.rs` - Property-based tests

mod terminal;
