//! Best-move selection over the enumerated candidate pool.

pub mod best_move;

pub use best_move::{select_best, BestMoveSelector};
