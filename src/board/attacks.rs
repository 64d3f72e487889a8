//! Raw attack generation.
//!
//! Computes the squares a piece bears on with no regard for king safety or
//! for who occupies the destination: a square covered by a pinned piece, or
//! one holding a friendly piece, still counts as attacked. Check detection
//! and the legality filter both build on this layer; keeping it free of any
//! check simulation is what breaks the mutual recursion between the two.

use super::{Board, Color, PieceKind, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Every square the piece on `from` attacks. Empty if the square is
    /// empty. Pawns attack only their two forward diagonals; sliders stop at
    /// the first occupied square, which is itself attacked.
    pub(crate) fn attack_squares(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        let mut attacks = Vec::new();
        match piece.kind {
            PieceKind::Pawn => {
                let dir = piece.color.pawn_direction();
                for dc in [-1, 1] {
                    if let Some(sq) = from.offset(dir, dc) {
                        attacks.push(sq);
                    }
                }
            }
            PieceKind::Knight => self.step_attacks(from, &KNIGHT_OFFSETS, &mut attacks),
            PieceKind::King => self.step_attacks(from, &KING_OFFSETS, &mut attacks),
            PieceKind::Bishop => self.ray_attacks(from, &BISHOP_DIRECTIONS, &mut attacks),
            PieceKind::Rook => self.ray_attacks(from, &ROOK_DIRECTIONS, &mut attacks),
            PieceKind::Queen => self.ray_attacks(from, &QUEEN_DIRECTIONS, &mut attacks),
        }
        attacks
    }

    fn step_attacks(&self, from: Square, offsets: &[(isize, isize)], attacks: &mut Vec<Square>) {
        for &(dr, dc) in offsets {
            if let Some(sq) = from.offset(dr, dc) {
                attacks.push(sq);
            }
        }
    }

    fn ray_attacks(&self, from: Square, directions: &[(isize, isize)], attacks: &mut Vec<Square>) {
        for &(dr, dc) in directions {
            let mut sq = from;
            while let Some(next) = sq.offset(dr, dc) {
                attacks.push(next);
                if self.piece_at(next).is_some() {
                    break;
                }
                sq = next;
            }
        }
    }

    /// True iff any piece of `by` attacks `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        for r in 0..8 {
            for c in 0..8 {
                let from = Square(r, c);
                match self.piece_at(from) {
                    Some(piece) if piece.color == by => {
                        if self.attack_squares(from).contains(&square) {
                            return true;
                        }
                    }
                    _ => {}
                }
            }
        }
        false
    }

    /// True iff the king of `color` stands on an attacked square. A missing
    /// king reads as "not in check" so simulation never faults.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king_sq) => self.is_square_attacked(king_sq, color.opponent()),
            None => false,
        }
    }
}
