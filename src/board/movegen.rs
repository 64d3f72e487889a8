//! Legal move generation.
//!
//! Pseudo-legal destinations follow each piece's movement pattern and board
//! occupancy (pawn pushes, en passant window, castling preconditions); the
//! legality filter then simulates each candidate on the board and discards
//! any that leave the mover's own king attacked.

use super::attacks::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};
use super::{Board, Color, Piece, PieceKind, Square};

impl Board {
    /// Destinations the piece on `from` may legally move to. Empty if the
    /// square is empty. Works for either color regardless of whose turn it
    /// is; turn gating belongs to the session layer.
    #[must_use]
    pub fn legal_destinations(&mut self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        self.pseudo_destinations(from, piece)
            .into_iter()
            .filter(|&to| !self.leaves_king_in_check(from, to))
            .collect()
    }

    fn pseudo_destinations(&self, from: Square, piece: Piece) -> Vec<Square> {
        match piece.kind {
            PieceKind::Pawn => self.pawn_destinations(from, piece.color),
            PieceKind::Knight => self.step_destinations(from, piece.color, &KNIGHT_OFFSETS),
            PieceKind::Bishop => self.slider_destinations(from, piece.color, &BISHOP_DIRECTIONS),
            PieceKind::Rook => self.slider_destinations(from, piece.color, &ROOK_DIRECTIONS),
            PieceKind::Queen => self.slider_destinations(from, piece.color, &QUEEN_DIRECTIONS),
            PieceKind::King => {
                let mut moves = self.step_destinations(from, piece.color, &KING_OFFSETS);
                self.castling_destinations(from, piece, &mut moves);
                moves
            }
        }
    }

    fn pawn_destinations(&self, from: Square, color: Color) -> Vec<Square> {
        let mut moves = Vec::new();
        let dir = color.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty(forward) {
                moves.push(forward);
                // Double push from the starting row, both squares clear.
                if from.0 == color.pawn_row() {
                    if let Some(double) = from.offset(2 * dir, 0) {
                        if self.is_empty(double) {
                            moves.push(double);
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(diag) = from.offset(dir, dc) {
                match self.piece_at(diag) {
                    Some(target) if target.color != color => moves.push(diag),
                    // The window is only open to the pawn standing beside the
                    // double-pushed victim, not to any pawn whose diagonal
                    // happens to hit the empty target square.
                    None if Some(diag) == self.en_passant_target
                        && self.enemy_pawn_at(Square(from.0, diag.1), color) =>
                    {
                        moves.push(diag)
                    }
                    _ => {}
                }
            }
        }

        moves
    }

    fn step_destinations(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
    ) -> Vec<Square> {
        offsets
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&sq| self.piece_at(sq).map_or(true, |p| p.color != color))
            .collect()
    }

    fn slider_destinations(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut moves = Vec::new();
        for &(dr, dc) in directions {
            let mut sq = from;
            while let Some(next) = sq.offset(dr, dc) {
                match self.piece_at(next) {
                    None => {
                        moves.push(next);
                        sq = next;
                    }
                    Some(blocker) => {
                        if blocker.color != color {
                            moves.push(next);
                        }
                        break;
                    }
                }
            }
        }
        moves
    }

    /// Castling destinations for a king on `from`: king and rook unmoved,
    /// squares between them empty, king not in check, and neither the square
    /// the king crosses nor its landing square attacked.
    fn castling_destinations(&self, from: Square, piece: Piece, moves: &mut Vec<Square>) {
        if piece.has_moved || self.is_in_check(piece.color) {
            return;
        }
        let row = from.0;
        let enemy = piece.color.opponent();

        if self.unmoved_rook(Square(row, 7), piece.color)
            && self.is_empty(Square(row, 5))
            && self.is_empty(Square(row, 6))
            && !self.is_square_attacked(Square(row, 5), enemy)
            && !self.is_square_attacked(Square(row, 6), enemy)
        {
            moves.push(Square(row, 6));
        }

        if self.unmoved_rook(Square(row, 0), piece.color)
            && self.is_empty(Square(row, 1))
            && self.is_empty(Square(row, 2))
            && self.is_empty(Square(row, 3))
            && !self.is_square_attacked(Square(row, 3), enemy)
            && !self.is_square_attacked(Square(row, 2), enemy)
        {
            moves.push(Square(row, 2));
        }
    }

    fn enemy_pawn_at(&self, sq: Square, color: Color) -> bool {
        matches!(
            self.piece_at(sq),
            Some(p) if p.color != color && p.kind == PieceKind::Pawn
        )
    }

    fn unmoved_rook(&self, sq: Square, color: Color) -> bool {
        matches!(
            self.piece_at(sq),
            Some(p) if p.color == color && p.kind == PieceKind::Rook && !p.has_moved
        )
    }

    /// Simulate `from -> to` and report whether it exposes the mover's own
    /// king. The board is restored exactly: the mover keeps its `has_moved`
    /// flag, any captured piece is reinstated, and the en passant window is
    /// never touched. The en-passant victim is lifted too, so a pinned pawn
    /// cannot slip a capture past the filter.
    fn leaves_king_in_check(&mut self, from: Square, to: Square) -> bool {
        let Some(piece) = self.grid[from.0][from.1] else {
            return false;
        };

        let ep_victim = if piece.kind == PieceKind::Pawn && Some(to) == self.en_passant_target {
            let sq = Square(from.0, to.1);
            self.grid[sq.0][sq.1].take().map(|p| (sq, p))
        } else {
            None
        };
        let captured = self.grid[to.0][to.1];

        self.grid[from.0][from.1] = None;
        self.grid[to.0][to.1] = Some(piece);

        let in_check = self.is_in_check(piece.color);

        self.grid[to.0][to.1] = captured;
        self.grid[from.0][from.1] = Some(piece);
        if let Some((sq, victim)) = ep_victim {
            self.grid[sq.0][sq.1] = Some(victim);
        }

        in_check
    }

    /// Whether `color` has at least one legal move anywhere. Stops at the
    /// first piece that has one.
    pub(crate) fn has_any_legal_move(&mut self, color: Color) -> bool {
        for r in 0..8 {
            for c in 0..8 {
                let from = Square(r, c);
                if let Some(piece) = self.piece_at(from) {
                    if piece.color == color && !self.legal_destinations(from).is_empty() {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Side to move is in check with no legal reply.
    #[must_use]
    pub fn is_checkmate(&mut self) -> bool {
        let side = self.side_to_move;
        self.is_in_check(side) && !self.has_any_legal_move(side)
    }

    /// Side to move is not in check but has no legal move.
    #[must_use]
    pub fn is_stalemate(&mut self) -> bool {
        let side = self.side_to_move;
        !self.is_in_check(side) && !self.has_any_legal_move(side)
    }
}
