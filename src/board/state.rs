//! Game state representation.
//!
//! Holds the complete snapshot of a game at a point in time: the three-board
//! timeline, both players with their pieces and clone supply, the turn
//! counter, whose turn it is, and each color's focused era.
//!
//! `GameState` is `Clone`; a clone is a fully independent deep copy, which is
//! the primitive the move enumerator uses to simulate candidate branches
//! without touching the live game.

use serde::{Deserialize, Serialize};

use super::era::{Era, ALL_ERAS};
use super::grid::Timeline;
use super::piece::{Color, Piece, ALL_COLORS};

/// The clone budget each player starts with, before setup consumes three.
pub const INITIAL_SUPPLY: u8 = 7;

/// One side: its pieces, remaining clone supply, and reserved symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub color: Color,
    /// Owned pieces, in spawn order. Order is irrelevant to the rules but
    /// kept deterministic for reproducible iteration.
    pub pieces: Vec<Piece>,
    /// Remaining clone budget, consumed by backward time travel.
    pub supply: u8,
    /// Unused symbols reserved for future clones, in draw order.
    pub pool: Vec<char>,
}

impl Player {
    /// Creates a player with a full supply and an untouched symbol pool.
    pub fn new(color: Color) -> Self {
        Player {
            color,
            pieces: Vec::new(),
            supply: INITIAL_SUPPLY,
            pool: color.symbol_pool(),
        }
    }

    /// Draws the next reserved symbol from the pool.
    pub fn next_symbol(&mut self) -> Option<char> {
        if self.pool.is_empty() {
            None
        } else {
            Some(self.pool.remove(0))
        }
    }

    /// Returns the player's piece with the given symbol.
    pub fn piece(&self, symbol: char) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.symbol == symbol)
    }

    /// Removes and returns the piece with the given symbol.
    pub fn remove_piece(&mut self, symbol: char) -> Option<Piece> {
        let idx = self.pieces.iter().position(|p| p.symbol == symbol)?;
        Some(self.pieces.remove(idx))
    }

    /// Returns true when the player has at least one piece in the era.
    pub fn has_piece_in(&self, era: Era) -> bool {
        self.pieces.iter().any(|p| p.era == era)
    }

    /// Counts the distinct eras the player's pieces occupy.
    pub fn era_presence(&self) -> usize {
        ALL_ERAS
            .iter()
            .filter(|era| self.has_piece_in(**era))
            .count()
    }
}

/// Complete game state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub timeline: Timeline,
    /// Both players in seat order: white at index 0, black at index 1.
    pub players: [Player; 2],
    pub turn: u32,
    /// Seat index of the player to move.
    pub current: usize,
    /// Each color's focused era, indexed by `Color`.
    pub focus: [Era; 2],
}

impl GameState {
    /// Creates a game with empty boards and no pieces, for building
    /// arbitrary positions.
    pub fn empty() -> Self {
        GameState {
            timeline: Timeline::new(),
            players: [Player::new(Color::White), Player::new(Color::Black)],
            turn: 1,
            current: 0,
            focus: [Era::Past, Era::Future],
        }
    }

    /// Creates a game in the standard starting position: each side has one
    /// piece per era on its home square, three supply already spent, white
    /// focused on the past and black on the future, white to move.
    pub fn new() -> Self {
        let mut game = Self::empty();
        for color in ALL_COLORS {
            let (x, y) = color.home_square();
            for era in ALL_ERAS {
                let player = &mut game.players[color.index()];
                let symbol = match player.next_symbol() {
                    Some(s) => s,
                    None => break,
                };
                player.supply -= 1;
                let piece = Piece {
                    symbol,
                    color,
                    era,
                    x,
                    y,
                };
                player.pieces.push(piece);
                game.timeline.board_mut(era).place_piece(&piece);
            }
        }
        game
    }

    /// Returns the player of the given color.
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    /// Returns the player of the given color, mutably.
    pub fn player_mut(&mut self, color: Color) -> &mut Player {
        &mut self.players[color.index()]
    }

    /// Returns the color whose turn it is.
    pub fn current_color(&self) -> Color {
        ALL_COLORS[self.current]
    }

    /// Returns the era the color may currently select pieces from.
    pub fn focus(&self, color: Color) -> Era {
        self.focus[color.index()]
    }

    /// Reassigns the color's focused era.
    pub fn set_focus(&mut self, color: Color, era: Era) {
        self.focus[color.index()] = era;
    }

    /// Looks up a piece by symbol across both players, returning a copy.
    pub fn find_piece(&self, symbol: char) -> Option<Piece> {
        self.players
            .iter()
            .flat_map(|p| p.pieces.iter())
            .find(|p| p.symbol == symbol)
            .copied()
    }

    /// Looks up a piece by symbol across both players, mutably.
    pub fn piece_mut(&mut self, symbol: char) -> Option<&mut Piece> {
        self.players
            .iter_mut()
            .flat_map(|p| p.pieces.iter_mut())
            .find(|p| p.symbol == symbol)
    }

    /// Advances to the next turn: bumps the counter and flips the seat.
    pub fn advance_turn(&mut self) {
        self.turn += 1;
        self.current = 1 - self.current;
    }

    /// Adds a piece to its owner and places it on its era board. Returns
    /// false (changing nothing) when the destination cell is taken.
    pub fn spawn(&mut self, piece: Piece) -> bool {
        if !self.timeline.board_mut(piece.era).place_piece(&piece) {
            return false;
        }
        let player = self.player_mut(piece.color);
        player.pool.retain(|&s| s != piece.symbol);
        player.pieces.push(piece);
        true
    }

    /// Verifies the board/piece consistency invariant: every live piece is
    /// referenced by exactly the cell matching its coordinates, and every
    /// occupied cell names a live piece at those coordinates.
    pub fn is_consistent(&self) -> bool {
        for player in &self.players {
            for piece in &player.pieces {
                if self.timeline.board(piece.era).get(piece.x, piece.y) != Some(piece.symbol) {
                    return false;
                }
            }
        }
        let live: usize = self.players.iter().map(|p| p.pieces.len()).sum();
        let occupied: usize = self.timeline.boards().map(|b| b.occupied().count()).sum();
        live == occupied
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
