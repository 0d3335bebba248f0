//! Board data model: eras, pieces, directions, grids, and game state.

pub mod direction;
pub mod era;
pub mod grid;
pub mod piece;
pub mod state;

pub use direction::{Direction, ALL_DIRECTIONS};
pub use era::{Era, ALL_ERAS, ERA_COUNT};
pub use grid::{Board, Timeline, BOARD_SIZE};
pub use piece::{Color, Piece, ALL_COLORS};
pub use state::{GameState, Player, INITIAL_SUPPLY};
