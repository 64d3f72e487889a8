//! Game session state.
//!
//! [`Game`] owns the board, the move history, the current selection, and
//! the terminal-state flags, and is the only writer of all of them. The UI
//! talks to it through `select`/`attempt_move`; the network layer hands
//! decoded payloads to `apply_remote` from the same thread (remote moves
//! arrive through a queue, never applied from the receiver thread).

use log::warn;

use crate::board::{Board, Color, MoveRecord, RemoteMoveError, Square};
use crate::net::MovePayload;

/// One game of chess, local or networked.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: Vec<MoveRecord>,
    selected: Option<Square>,
    valid_moves: Vec<Square>,
    check: bool,
    checkmate: bool,
    stalemate: bool,
    game_over: bool,
    winner: Option<Color>,
    /// In networked play, the color this instance is allowed to move.
    /// `None` means both sides are played locally.
    local_side: Option<Color>,
}

impl Game {
    /// A fresh game from the standard initial position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// A game starting from an arbitrary position. Status flags are
    /// evaluated immediately, so a constructed mate or stalemate is
    /// reported without a move being played.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let mut game = Game {
            board,
            history: Vec::new(),
            selected: None,
            valid_moves: Vec::new(),
            check: false,
            checkmate: false,
            stalemate: false,
            game_over: false,
            winner: None,
            local_side: None,
        };
        game.update_status();
        game
    }

    /// Discard everything and start over from the initial position. The
    /// local side assignment survives; the connection did not change.
    pub fn reset(&mut self) {
        let local_side = self.local_side;
        *self = Game::new();
        self.local_side = local_side;
    }

    pub fn set_local_side(&mut self, side: Option<Color>) {
        self.local_side = side;
    }

    #[must_use]
    pub fn local_side(&self) -> Option<Color> {
        self.local_side
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    #[must_use]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Highlight set for the current selection.
    #[must_use]
    pub fn valid_moves(&self) -> &[Square] {
        &self.valid_moves
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.board.move_count()
    }

    #[must_use]
    pub fn in_check(&self) -> bool {
        self.check
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Select the piece on `square` and return its legal destinations.
    ///
    /// The set is empty (and nothing is selected) when the square holds no
    /// piece of the side to move, when it is not this instance's turn in
    /// networked play, or when the game is over. Selecting another own
    /// piece simply reassigns the selection.
    pub fn select(&mut self, square: Square) -> &[Square] {
        self.selected = None;
        self.valid_moves.clear();

        if self.game_over || !self.may_move_now() {
            return &self.valid_moves;
        }

        match self.board.piece_at(square) {
            Some(piece) if piece.color == self.board.side_to_move() => {
                self.valid_moves = self.board.legal_destinations(square);
                self.selected = Some(square);
            }
            _ => {}
        }
        &self.valid_moves
    }

    /// Move the selected piece to `to`. Returns the move record on
    /// success; a destination that was never offered changes nothing and
    /// returns `None` (illegal attempts are routine, not errors).
    pub fn attempt_move(&mut self, to: Square) -> Option<&MoveRecord> {
        let from = self.selected?;
        if !self.valid_moves.contains(&to) {
            return None;
        }

        let record = self.board.apply(from, to)?;
        self.history.push(record);
        self.selected = None;
        self.valid_moves.clear();
        self.update_status();
        self.history.last()
    }

    /// Replay a move received from the peer.
    ///
    /// Legality is not re-verified (the peer validated before sending), but
    /// the payload itself is: out-of-range coordinates, an empty origin, or
    /// a finished game reject the move without touching any state. Castling
    /// and en passant side effects are re-derived from the local board,
    /// which mirrors the peer's.
    pub fn apply_remote(&mut self, payload: &MovePayload) -> Result<(), RemoteMoveError> {
        if self.game_over {
            return Err(RemoteMoveError::GameOver);
        }
        let from = check_coords(payload.from)?;
        let to = check_coords(payload.to)?;
        if self.board.piece_at(from).is_none() {
            warn!("rejecting remote move from empty square {:?}", payload.from);
            return Err(RemoteMoveError::EmptyOrigin { square: from });
        }

        if let Some(record) = self.board.apply(from, to) {
            self.history.push(record);
        }
        self.selected = None;
        self.valid_moves.clear();
        self.update_status();
        Ok(())
    }

    /// Recompute check / checkmate / stalemate for the side now to move.
    /// Checkmate and stalemate are mutually exclusive: both require "no
    /// legal move", and they split on whether the king is attacked.
    fn update_status(&mut self) {
        let side = self.board.side_to_move();
        self.check = self.board.is_in_check(side);
        let has_move = self.board.has_any_legal_move(side);

        self.checkmate = self.check && !has_move;
        self.stalemate = !self.check && !has_move;
        if self.checkmate {
            self.game_over = true;
            self.winner = Some(side.opponent());
        } else if self.stalemate {
            self.game_over = true;
            self.winner = None;
        }
    }

    fn may_move_now(&self) -> bool {
        match self.local_side {
            Some(side) => side == self.board.side_to_move(),
            None => true,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

fn check_coords(coords: (usize, usize)) -> Result<Square, RemoteMoveError> {
    let (row, col) = coords;
    if row < 8 && col < 8 {
        Ok(Square(row, col))
    } else {
        Err(RemoteMoveError::OutOfRange { row, col })
    }
}
