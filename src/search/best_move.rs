//! Tie-broken choice of the highest-scoring candidate.
//!
//! `select_best` keeps only the maximal-score candidates and shuffles them
//! once so that ties are broken fairly rather than by enumeration order.
//! `BestMoveSelector` wraps it as a lazy single-pass sequence: construction
//! does no work, the first traversal step enumerates and memoizes, and
//! `restart` replays the memoized order without reshuffling.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Color, GameState};
use crate::movegen::{enumerate_all_moves, Candidate};

/// Filters a candidate pool down to its maximal-score subset, shuffled once
/// for fair tie-breaking. Returns an empty vector for an empty pool.
pub fn select_best(
    candidates: impl IntoIterator<Item = Candidate>,
    rng: &mut impl Rng,
) -> Vec<Candidate> {
    let mut best: Vec<Candidate> = Vec::new();
    let mut max_score = i32::MIN;
    for candidate in candidates {
        if candidate.score > max_score {
            max_score = candidate.score;
            best.clear();
            best.push(candidate);
        } else if candidate.score == max_score {
            best.push(candidate);
        }
    }
    best.shuffle(rng);
    best
}

/// A lazy, single-pass sequence over the best candidates for one side.
///
/// The heuristic strategy consumes only the first element; the rest of the
/// sequence exists for callers that want to inspect the full tie set.
pub struct BestMoveSelector<'a> {
    game: &'a GameState,
    color: Color,
    rng: SmallRng,
    best: Option<Vec<Candidate>>,
    index: usize,
}

impl<'a> BestMoveSelector<'a> {
    /// Creates a selector with an entropy-seeded tie-break shuffle.
    pub fn new(game: &'a GameState, color: Color) -> Self {
        Self::with_rng(game, color, SmallRng::from_entropy())
    }

    /// Creates a selector with a deterministic tie-break shuffle.
    pub fn seeded(game: &'a GameState, color: Color, seed: u64) -> Self {
        Self::with_rng(game, color, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(game: &'a GameState, color: Color, rng: SmallRng) -> Self {
        BestMoveSelector {
            game,
            color,
            rng,
            best: None,
            index: 0,
        }
    }

    /// Enumerates, filters, and shuffles on first use.
    fn evaluated(&mut self) -> &[Candidate] {
        if self.best.is_none() {
            let pool = enumerate_all_moves(self.game, self.color);
            self.best = Some(select_best(pool, &mut self.rng));
        }
        self.best.as_deref().unwrap_or(&[])
    }

    /// Rewinds to the start of the memoized order without reshuffling.
    pub fn restart(&mut self) {
        self.index = 0;
    }
}

impl Iterator for BestMoveSelector<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        let index = self.index;
        let item = self.evaluated().get(index).copied();
        if item.is_some() {
            self.index += 1;
        }
        item
    }
}
