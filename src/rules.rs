//! Movement legality and effects.
//!
//! Implements the full movement state machine: orthogonal steps with chain
//! pushes, squeeze and paradox eliminations, and forward/backward time travel
//! with clone creation, plus the win check.
//!
//! Legality and application are deliberately split: `can_move` is a pure
//! check, and `move_piece` applies without re-validating. Callers that want
//! both in one step use `try_move_piece`, which rejects with a typed error
//! instead of silently propagating an unchecked move.

use thiserror::Error;

use crate::board::{Board, Color, Direction, GameState, Piece};

/// Errors surfaced by the validating move entry point.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("unknown direction token '{0}'")]
    UnknownToken(char),

    #[error("no piece with symbol '{0}'")]
    UnknownPiece(char),

    #[error("piece '{symbol}' cannot move {dir:?}")]
    Illegal { symbol: char, dir: Direction },
}

impl GameState {
    /// Pure legality check: may the piece take a single step in this
    /// direction? Unknown symbols are never movable.
    pub fn can_move(&self, symbol: char, dir: Direction) -> bool {
        let Some(piece) = self.find_piece(symbol) else {
            return false;
        };
        if let Some(offset) = dir.offset() {
            self.can_move_spatial(&piece, offset)
        } else if let Some(dz) = dir.timeshift() {
            self.can_move_temporal(&piece, dz)
        } else {
            false
        }
    }

    /// Token-level legality check; unrecognized tokens are never legal.
    pub fn can_move_token(&self, symbol: char, token: char) -> bool {
        Direction::from_token(token)
            .map(|dir| self.can_move(symbol, dir))
            .unwrap_or(false)
    }

    /// Applies an already-validated move. No legality re-check: callers
    /// must check first, mirroring the pre-check-then-apply contract.
    pub fn move_piece(&mut self, symbol: char, dir: Direction) {
        if dir.is_spatial() {
            self.apply_spatial(symbol, dir);
        } else {
            self.apply_temporal(symbol, dir);
        }
    }

    /// Token-level application; silently does nothing for an unrecognized
    /// token.
    pub fn move_piece_token(&mut self, symbol: char, token: char) {
        if let Some(dir) = Direction::from_token(token) {
            self.move_piece(symbol, dir);
        }
    }

    /// Validating move entry point: checks legality, then applies.
    pub fn try_move_piece(&mut self, symbol: char, dir: Direction) -> Result<(), MoveError> {
        if self.find_piece(symbol).is_none() {
            return Err(MoveError::UnknownPiece(symbol));
        }
        if !self.can_move(symbol, dir) {
            return Err(MoveError::Illegal { symbol, dir });
        }
        self.move_piece(symbol, dir);
        Ok(())
    }

    /// Spatial legality: the target square is on the board and the step
    /// does not walk into an immediate paradox against the mover's own
    /// side (own piece on the target with another own piece directly
    /// beyond it). The guard inspects only those two cells; deeper chain
    /// outcomes are resolved at application time by the generic paradox
    /// rule.
    fn can_move_spatial(&self, piece: &Piece, (dx, dy): (i8, i8)) -> bool {
        let (nx, ny) = (piece.x + dx, piece.y + dy);
        if !Board::in_bounds(nx, ny) {
            return false;
        }
        let board = self.timeline.board(piece.era);
        let target = board.get(nx, ny).and_then(Color::from_symbol);
        let beyond = board.get(nx + dx, ny + dy).and_then(Color::from_symbol);
        !(target == Some(piece.color) && beyond == Some(piece.color))
    }

    /// Temporal legality: the destination era exists, its board is free at
    /// the piece's square, and backward travel has supply to spend.
    fn can_move_temporal(&self, piece: &Piece, dz: i8) -> bool {
        let Some(dest) = piece.era.shifted(dz) else {
            return false;
        };
        if dz < 0 && self.player(piece.color).supply == 0 {
            return false;
        }
        self.timeline.board(dest).get(piece.x, piece.y).is_none()
    }

    /// Applies a spatial step, resolving any squeeze, paradox, or chain
    /// push at the target square.
    fn apply_spatial(&mut self, symbol: char, dir: Direction) {
        let Some(piece) = self.find_piece(symbol) else {
            return;
        };
        let Some((dx, dy)) = dir.offset() else {
            return;
        };
        let (nx, ny) = (piece.x + dx, piece.y + dy);
        if !Board::in_bounds(nx, ny) {
            return;
        }

        let board = self.timeline.board(piece.era);
        let Some(occupant) = board.get(nx, ny) else {
            self.relocate(symbol, nx, ny);
            return;
        };

        let (bx, by) = (nx + dx, ny + dy);
        if !Board::in_bounds(bx, by) {
            // Squeeze: the occupant is pushed off the edge and eliminated.
            self.capture(occupant);
            self.relocate(symbol, nx, ny);
            return;
        }

        if let Some(beyond) = self.timeline.board(piece.era).get(bx, by) {
            let same_color = Color::from_symbol(occupant) == Color::from_symbol(beyond);
            if same_color {
                // Paradox: pushing a piece into contact with its own copy
                // eliminates both.
                self.capture(occupant);
                self.capture(beyond);
                self.relocate(symbol, nx, ny);
                return;
            }
        }

        // Chain push: move the occupant one step first, then take its
        // square. Each recursive step advances one cell, so depth <= 3.
        self.apply_spatial(occupant, dir);
        self.relocate(symbol, nx, ny);
    }

    /// Applies a temporal hop, cloning a piece at the vacated square when
    /// traveling backward.
    fn apply_temporal(&mut self, symbol: char, dir: Direction) {
        let Some(piece) = self.find_piece(symbol) else {
            return;
        };
        let Some(dz) = dir.timeshift() else {
            return;
        };
        let Some(dest) = piece.era.shifted(dz) else {
            return;
        };

        self.timeline.board_mut(piece.era).remove(piece.x, piece.y);
        if let Some(p) = self.piece_mut(symbol) {
            p.era = dest;
        }
        self.timeline.board_mut(dest).place(symbol, piece.x, piece.y);

        if dz < 0 {
            let player = self.player_mut(piece.color);
            player.supply = player.supply.saturating_sub(1);
            if let Some(clone_symbol) = player.next_symbol() {
                let clone = Piece {
                    symbol: clone_symbol,
                    color: piece.color,
                    era: piece.era,
                    x: piece.x,
                    y: piece.y,
                };
                player.pieces.push(clone);
                self.timeline.board_mut(piece.era).place_piece(&clone);
            }
        }
    }

    /// Moves a live piece to a new square on its current board.
    fn relocate(&mut self, symbol: char, x: i8, y: i8) {
        let Some(p) = self.piece_mut(symbol) else {
            return;
        };
        let (old_x, old_y, era) = (p.x, p.y, p.era);
        p.x = x;
        p.y = y;
        let board = self.timeline.board_mut(era);
        board.remove(old_x, old_y);
        board.place(symbol, x, y);
    }

    /// Permanently removes a piece from its owner's list and its board.
    fn capture(&mut self, symbol: char) {
        for player in self.players.iter_mut() {
            if let Some(piece) = player.remove_piece(symbol) {
                self.timeline.board_mut(piece.era).remove(piece.x, piece.y);
                return;
            }
        }
    }

    /// Win check: true iff the color's pieces occupy at most one distinct
    /// era. A color with zero pieces trivially satisfies this; that is
    /// intentional, not special-cased.
    pub fn is_winning(&self, color: Color) -> bool {
        self.player(color).era_presence() <= 1
    }
}
