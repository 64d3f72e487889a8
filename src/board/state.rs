use std::fmt;

use super::{Color, Piece, PieceKind, Square};

/// The position proper: piece placement plus the per-position state the
/// rules depend on (side to move, en passant window).
///
/// All mutation goes through [`Board::apply`](crate::board::Board::apply);
/// everything else is read-only access for move generation and rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; 8]; 8],
    pub(crate) side_to_move: Color,
    /// Square a pawn just passed over with a double push, if any. Set for
    /// exactly one ply.
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) move_count: u32,
}

impl Board {
    /// The standard initial position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (file, &kind) in back_rank.iter().enumerate() {
            board.set_piece(Square(0, file), Piece::new(Color::Black, kind));
            board.set_piece(Square(1, file), Piece::new(Color::Black, PieceKind::Pawn));
            board.set_piece(Square(6, file), Piece::new(Color::White, PieceKind::Pawn));
            board.set_piece(Square(7, file), Piece::new(Color::White, kind));
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            side_to_move: Color::White,
            en_passant_target: None,
            move_count: 0,
        }
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.0][sq.1]
    }

    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.grid[sq.0][sq.1].is_none()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Number of plies played on this board.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Scan the board for the king of `color`. Returns `None` only in the
    /// invalid state where the king is gone; callers treat that as "not in
    /// check" rather than faulting.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        for r in 0..8 {
            for c in 0..8 {
                let sq = Square(r, c);
                if let Some(piece) = self.piece_at(sq) {
                    if piece.color == color && piece.kind == PieceKind::King {
                        return Some(sq);
                    }
                }
            }
        }
        None
    }

    pub(crate) fn set_piece(&mut self, sq: Square, piece: Piece) {
        self.grid[sq.0][sq.1] = Some(piece);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for row in 0..8 {
            write!(f, "{} | ", 8 - row)?;
            for col in 0..8 {
                match self.grid[row][col] {
                    Some(piece) => write!(f, "{} ", piece.symbol())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "  +-----------------+")?;
        writeln!(f, "    a b c d e f g h")
    }
}
