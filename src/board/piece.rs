//! Piece identity and ownership.
//!
//! Each side plays up to seven copies of a single piece. White copies are
//! lettered `A`..`G`, black copies are numbered `1`..`7`; a symbol therefore
//! identifies both a piece and its owning color.

use serde::{Deserialize, Serialize};

use super::era::Era;

/// The owning side of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

/// Both colors, in seat order (white moves first).
pub const ALL_COLORS: [Color; 2] = [Color::White, Color::Black];

impl Color {
    /// Returns the color's seat index.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the other color.
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the full symbol pool for this color, in spawn order.
    pub fn symbol_pool(self) -> Vec<char> {
        match self {
            Color::White => ('A'..='G').collect(),
            Color::Black => ('1'..='7').collect(),
        }
    }

    /// Recovers the owning color from a piece symbol, or `None` for a
    /// character outside both pools.
    pub fn from_symbol(symbol: char) -> Option<Color> {
        match symbol {
            'A'..='G' => Some(Color::White),
            '1'..='7' => Some(Color::Black),
            _ => None,
        }
    }

    /// Returns the square each of this color's pieces starts on.
    pub const fn home_square(self) -> (i8, i8) {
        match self {
            Color::White => (3, 3),
            Color::Black => (0, 0),
        }
    }

    /// Returns the lowercase color name used by front ends.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// A single piece: identity, owner, and current square.
///
/// Position and era are mutable; the symbol and color never change. The
/// piece's owning `Player` holds the authoritative copy, and the board cell
/// at `(era, x, y)` references it by symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub symbol: char,
    pub color: Color,
    pub era: Era,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Returns the piece's current (x, y) square.
    pub const fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Returns true when the piece sits in the central 2×2 subgrid.
    pub const fn is_central(&self) -> bool {
        1 <= self.x && self.x <= 2 && 1 <= self.y && self.y <= 2
    }
}
