//! Fluent builder for constructing chess positions.
//!
//! Used by tests (and anything else that needs a non-initial position) to
//! place pieces one by one instead of scripting a game up to the position.
//!
//! # Example
//! ```
//! use netchess::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceKind::King)
//!     .piece(Square(0, 4), Color::Black, PieceKind::King)
//!     .piece(Square(6, 0), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Color,
    en_passant_target: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            en_passant_target: None,
        }
    }

    /// Place a piece that has not moved yet (so kings and rooks placed this
    /// way remain castling-eligible).
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        self.pieces.push((square, Piece::new(color, kind)));
        self
    }

    /// Place a piece with its `has_moved` flag already set.
    #[must_use]
    pub fn moved_piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        let mut piece = Piece::new(color, kind);
        piece.has_moved = true;
        self.pieces.push((square, piece));
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the en passant target square, as if the previous ply were the
    /// matching double push.
    #[must_use]
    pub const fn en_passant(mut self, square: Square) -> Self {
        self.en_passant_target = Some(square);
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, piece) in self.pieces {
            board.set_piece(square, piece);
        }
        board.side_to_move = self.side_to_move;
        board.en_passant_target = self.en_passant_target;
        board
    }
}
