use serde::{Deserialize, Serialize};

/// A board coordinate as `(row, col)`, both in `0..8`.
///
/// Row 0 is the top of the board (Black's back rank); White's pieces start
/// on rows 6 and 7 and White pawns advance toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square(pub usize, pub usize);

impl Square {
    /// Step by `(dr, dc)`, returning `None` if that leaves the board.
    pub(crate) fn offset(self, dr: isize, dc: isize) -> Option<Square> {
        let r = self.0 as isize + dr;
        let c = self.1 as isize + dc;
        if (0..8).contains(&r) && (0..8).contains(&c) {
            Some(Square(r as usize, c as usize))
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[must_use]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Direction this color's pawns advance along the row axis.
    pub(crate) fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row this color's pawns start on.
    pub(crate) fn pawn_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row on which this color's pawns promote.
    pub(crate) fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// A piece on the board. Its current square is the grid cell it occupies,
/// so piece and board can never disagree about where it stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
}

impl Piece {
    pub(crate) fn new(color: Color, kind: PieceKind) -> Self {
        Piece {
            color,
            kind,
            has_moved: false,
        }
    }

    /// One-letter symbol, uppercase for White.
    #[must_use]
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}

/// An executed move, recorded once and never modified.
///
/// `piece` is the mover as it stood before the move (a promotion records the
/// pawn); `captured` keeps the removed piece whole, so a move could be
/// undone from the record alone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castling: bool,
}

/// Format a square as file + rank, e.g. `Square(6, 4)` -> `"e2"`.
#[must_use]
pub fn format_square(sq: Square) -> String {
    format!("{}{}", (sq.1 as u8 + b'a') as char, 8 - sq.0)
}

/// Parse file + rank notation, e.g. `"e2"` -> `Square(6, 4)`.
#[must_use]
pub fn parse_square(s: &str) -> Option<Square> {
    let mut chars = s.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    let col = file as usize - 'a' as usize;
    let row = 8 - (rank as usize - '0' as usize);
    Some(Square(row, col))
}
