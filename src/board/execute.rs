//! Move execution.
//!
//! `Board::apply` performs one validated move: it resolves en passant and
//! castling side effects, relocates the piece, maintains the en passant
//! window, auto-promotes, and flips the turn. The caller is trusted to have
//! validated the destination; an empty origin is a no-op. Both local play
//! and remote replay go through this one path, which is what keeps two
//! synchronized boards identical move after move.

use super::{Board, MoveRecord, PieceKind, Square};

impl Board {
    /// Execute `from -> to`, returning the record of what happened, or
    /// `None` (no state change) if `from` holds no piece.
    pub(crate) fn apply(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        let mut piece = self.grid[from.0][from.1]?;
        let mover = piece;

        let is_en_passant = piece.kind == PieceKind::Pawn && Some(to) == self.en_passant_target;
        let is_castling = piece.kind == PieceKind::King && from.1.abs_diff(to.1) == 2;

        // A pawn landing on the en passant target captures the pawn beside
        // it, on the mover's origin row, not on the destination square.
        let captured = if is_en_passant {
            self.grid[from.0][to.1].take()
        } else {
            self.grid[to.0][to.1]
        };

        if is_castling {
            let (rook_from, rook_to) = if to.1 > from.1 {
                (Square(from.0, 7), Square(from.0, to.1 - 1))
            } else {
                (Square(from.0, 0), Square(from.0, to.1 + 1))
            };
            if let Some(mut rook) = self.grid[rook_from.0][rook_from.1].take() {
                rook.has_moved = true;
                self.grid[rook_to.0][rook_to.1] = Some(rook);
            }
        }

        self.grid[from.0][from.1] = None;
        piece.has_moved = true;
        if piece.kind == PieceKind::Pawn && to.0 == piece.color.promotion_row() {
            // Always a queen; under-promotion is not supported.
            piece.kind = PieceKind::Queen;
        }
        self.grid[to.0][to.1] = Some(piece);

        // The en passant window lasts exactly one ply.
        self.en_passant_target = if mover.kind == PieceKind::Pawn && from.0.abs_diff(to.0) == 2 {
            Some(Square(usize::midpoint(from.0, to.0), from.1))
        } else {
            None
        };

        self.side_to_move = self.side_to_move.opponent();
        self.move_count += 1;

        Some(MoveRecord {
            from,
            to,
            piece: mover,
            captured,
            is_en_passant,
            is_castling,
        })
    }
}
