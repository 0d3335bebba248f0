//! The 4×4 era grids and the three-board timeline.
//!
//! A `Board` cell stores the symbol of its occupant; the piece itself lives
//! in its owner's piece list. Out-of-bounds queries answer with an absent
//! occupant rather than failing.

use serde::{Deserialize, Serialize};

use super::era::{Era, ALL_ERAS, ERA_COUNT};
use super::piece::Piece;

/// The side length of every era grid.
pub const BOARD_SIZE: i8 = 4;

/// One 4×4 grid of optional piece occupants for a single era.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    era: Era,
    grid: [[Option<char>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// Creates an empty board for the given era.
    pub fn new(era: Era) -> Self {
        Board {
            era,
            grid: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// Returns the era this board belongs to.
    pub const fn era(&self) -> Era {
        self.era
    }

    /// Returns true when (x, y) lies on the grid.
    pub const fn in_bounds(x: i8, y: i8) -> bool {
        0 <= x && x < BOARD_SIZE && 0 <= y && y < BOARD_SIZE
    }

    /// Returns the occupant symbol at (x, y), or `None` for an empty cell
    /// or an out-of-bounds coordinate.
    pub fn get(&self, x: i8, y: i8) -> Option<char> {
        if Self::in_bounds(x, y) {
            self.grid[x as usize][y as usize]
        } else {
            None
        }
    }

    /// Writes a symbol into (x, y). Returns false without overwriting when
    /// the cell is occupied or off the grid; callers guarantee freeness.
    pub fn place(&mut self, symbol: char, x: i8, y: i8) -> bool {
        if !Self::in_bounds(x, y) || self.grid[x as usize][y as usize].is_some() {
            return false;
        }
        self.grid[x as usize][y as usize] = Some(symbol);
        true
    }

    /// Places a piece at its own coordinates.
    pub fn place_piece(&mut self, piece: &Piece) -> bool {
        self.place(piece.symbol, piece.x, piece.y)
    }

    /// Clears the cell at (x, y), returning the evicted symbol if any.
    pub fn remove(&mut self, x: i8, y: i8) -> Option<char> {
        if Self::in_bounds(x, y) {
            self.grid[x as usize][y as usize].take()
        } else {
            None
        }
    }

    /// Iterates over all occupied cells as (x, y, symbol).
    pub fn occupied(&self) -> impl Iterator<Item = (i8, i8, char)> + '_ {
        self.grid.iter().enumerate().flat_map(|(x, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(y, cell)| cell.map(|s| (x as i8, y as i8, s)))
        })
    }
}

/// The three boards, addressed by era.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    boards: [Board; ERA_COUNT],
}

impl Timeline {
    /// Creates a timeline of three empty boards.
    pub fn new() -> Self {
        Timeline {
            boards: ALL_ERAS.map(Board::new),
        }
    }

    /// Returns the board for an era.
    pub fn board(&self, era: Era) -> &Board {
        &self.boards[era.index()]
    }

    /// Returns the board for an era, mutably.
    pub fn board_mut(&mut self, era: Era) -> &mut Board {
        &mut self.boards[era.index()]
    }

    /// Iterates over the three boards in temporal order.
    pub fn boards(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
