//! Heuristic position evaluation.
//!
//! Scores a hypothetical game state for one side using five handcrafted
//! criteria: era presence, piece advantage, remaining supply, board
//! centrality, and presence in the focused era. The weighted sum is the
//! score the enumerator attaches to each simulated candidate.

use crate::board::{Color, GameState};

/// The five raw criterion values for one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criteria {
    /// Count of distinct eras the side occupies.
    pub era_presence: i32,
    /// Own piece count minus opponent piece count.
    pub piece_advantage: i32,
    /// Remaining clone supply.
    pub supply: i32,
    /// Own pieces in the central 2×2 subgrid, summed across eras.
    pub centrality: i32,
    /// Own pieces in the side's currently focused era.
    pub focus: i32,
}

/// Criterion weights for the weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub era_presence: i32,
    pub piece_advantage: i32,
    pub supply: i32,
    pub centrality: i32,
    pub focus: i32,
}

/// The default weight vector.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    era_presence: 3,
    piece_advantage: 2,
    supply: 1,
    centrality: 1,
    focus: 1,
};

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// Computes the five raw criteria for a side.
pub fn criteria(game: &GameState, color: Color) -> Criteria {
    let player = game.player(color);
    let opponent = game.player(color.opponent());
    let focused = game.focus(color);
    Criteria {
        era_presence: player.era_presence() as i32,
        piece_advantage: player.pieces.len() as i32 - opponent.pieces.len() as i32,
        supply: player.supply as i32,
        centrality: player.pieces.iter().filter(|p| p.is_central()).count() as i32,
        focus: player.pieces.iter().filter(|p| p.era == focused).count() as i32,
    }
}

/// Computes the weighted heuristic score for a side.
pub fn evaluate(game: &GameState, color: Color, weights: &Weights) -> i32 {
    let c = criteria(game, color);
    weights.era_presence * c.era_presence
        + weights.piece_advantage * c.piece_advantage
        + weights.supply * c.supply
        + weights.centrality * c.centrality
        + weights.focus * c.focus
}
