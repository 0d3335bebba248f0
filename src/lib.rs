//! Chronomachy engine library.
//!
//! Exposes the board representation, movement rules, move enumeration,
//! heuristic evaluation, best-move selection, and snapshot history for use
//! by integration tests and presentation-layer front ends.

pub mod board;
pub mod engine;
pub mod eval;
pub mod history;
pub mod movegen;
pub mod rules;
pub mod search;
