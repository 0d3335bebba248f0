//! Exhaustive two-ply move enumeration.
//!
//! For the acting side, simulates every ordered pair of directional steps
//! for every piece in its focused era, each pair on an independent deep copy
//! of the game, and scores the resulting position for every reachable next
//! focus. When the focused era holds no piece, only focus-change moves are
//! enumerated.
//!
//! Branches never share mutable state, so the per-piece fan-out runs in
//! parallel under rayon; candidates are pooled into a `HashSet`, which makes
//! cross-branch completion order irrelevant and collapses structural
//! duplicates.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::board::{Color, Direction, Era, GameState, ALL_DIRECTIONS, ALL_ERAS, ERA_COUNT};
use crate::eval::{evaluate, Weights};

/// Sentinel score for a branch that leaves the opponent satisfying the win
/// condition; dominates every heuristic score.
pub const WIN_SCORE: i32 = 9999;

/// One enumerated move: the piece (if any), its two directional legs, the
/// mover's next focus, and the score of the simulated resulting position.
///
/// A `piece` of `None` is a forced focus change: the mover had no piece in
/// its focused era and moves nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub piece: Option<char>,
    pub first: Option<Direction>,
    pub second: Option<Direction>,
    pub focus: Era,
    pub score: i32,
}

/// Enumerates every legal two-step move for the side, with default weights.
pub fn enumerate_all_moves(game: &GameState, color: Color) -> HashSet<Candidate> {
    enumerate_all_moves_with(game, color, &Weights::default())
}

/// Enumerates every legal two-step move for the side.
///
/// Pieces eligible for selection are those in the side's focused era. With
/// no eligible piece the result is exactly `ERA_COUNT - 1` focus-change
/// candidates, one per alternate era.
pub fn enumerate_all_moves_with(
    game: &GameState,
    color: Color,
    weights: &Weights,
) -> HashSet<Candidate> {
    let focused = game.focus(color);
    let eligible: Vec<char> = game
        .player(color)
        .pieces
        .iter()
        .filter(|p| p.era == focused)
        .map(|p| p.symbol)
        .collect();

    if eligible.is_empty() {
        return focus_change_candidates(game, color, weights);
    }

    eligible
        .par_iter()
        .map(|&symbol| piece_candidates(game, color, symbol, weights))
        .reduce(HashSet::new, |mut pool, branch| {
            pool.extend(branch);
            pool
        })
}

/// Enumerates the forced focus-change moves for a side with no piece in its
/// focused era.
fn focus_change_candidates(
    game: &GameState,
    color: Color,
    weights: &Weights,
) -> HashSet<Candidate> {
    let mut pool = HashSet::with_capacity(ERA_COUNT - 1);
    for era in ALL_ERAS {
        if era == game.focus(color) {
            continue;
        }
        let mut sim = game.clone();
        sim.set_focus(color, era);
        pool.insert(Candidate {
            piece: None,
            first: None,
            second: None,
            focus: era,
            score: position_score(&sim, color, weights),
        });
    }
    pool
}

/// Enumerates all 36 ordered direction pairs for one piece, each on a fresh
/// deep copy. A pair contributes candidates only when both legs were legal:
/// an illegal first leg discards the pair unattempted, and an illegal
/// second leg discards it after the first leg was simulated.
fn piece_candidates(
    game: &GameState,
    color: Color,
    symbol: char,
    weights: &Weights,
) -> HashSet<Candidate> {
    let Some(piece) = game.find_piece(symbol) else {
        return HashSet::new();
    };
    let home_era = piece.era;
    let mut pool = HashSet::new();

    for first in ALL_DIRECTIONS {
        for second in ALL_DIRECTIONS {
            let mut sim = game.clone();
            if !sim.can_move(symbol, first) {
                continue;
            }
            sim.move_piece(symbol, first);
            if !sim.can_move(symbol, second) {
                continue;
            }
            sim.move_piece(symbol, second);

            // Next focus may be any era other than the piece's original
            // one; score each choice in turn on the same simulated state.
            for era in ALL_ERAS {
                if era == home_era {
                    continue;
                }
                sim.set_focus(color, era);
                pool.insert(Candidate {
                    piece: Some(symbol),
                    first: Some(first),
                    second: Some(second),
                    focus: era,
                    score: position_score(&sim, color, weights),
                });
            }
        }
    }
    pool
}

/// Scores a simulated position for the acting side: the win sentinel when
/// the opponent now satisfies the win condition, otherwise the weighted
/// heuristic.
fn position_score(sim: &GameState, color: Color, weights: &Weights) -> i32 {
    if sim.is_winning(color.opponent()) {
        WIN_SCORE
    } else {
        evaluate(sim, color, weights)
    }
}
