//! Turn driver and automated move selection.
//!
//! A `Move` is the unit a front end or strategy hands back to the engine:
//! two directional legs for one piece (or none, when only the focus
//! changes) plus the mover's next focused era. Strategies plug in through
//! the `Strategy` trait; the engine itself never depends on which variant
//! is in play. `Session` wraps the live game with optional history
//! tracking and runs the save/select/apply/advance turn cycle.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Color, Direction, Era, GameState};
use crate::history::{GameSnapshot, History};
use crate::movegen::{enumerate_all_moves, Candidate};
use crate::rules::MoveError;
use crate::search::BestMoveSelector;

/// A complete turn: an optional piece with its two legs, and the mover's
/// next focused era.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub piece: Option<char>,
    pub first: Option<Direction>,
    pub second: Option<Direction>,
    pub next_focus: Era,
}

impl Move {
    /// Builds a move from an enumerated candidate, dropping its score.
    pub fn from_candidate(candidate: &Candidate) -> Move {
        Move {
            piece: candidate.piece,
            first: candidate.first,
            second: candidate.second,
            next_focus: candidate.focus,
        }
    }

    /// Applies the move for the player whose turn it is: both legs in
    /// order (when a piece is named), then the focus change.
    pub fn apply(&self, game: &mut GameState) -> Result<(), MoveError> {
        if let Some(symbol) = self.piece {
            if let Some(dir) = self.first {
                game.try_move_piece(symbol, dir)?;
            }
            if let Some(dir) = self.second {
                game.try_move_piece(symbol, dir)?;
            }
        }
        let color = game.current_color();
        game.set_focus(color, self.next_focus);
        Ok(())
    }
}

/// Move selection for one side.
///
/// `select_move` is the template: it routes to the focus-switch handler
/// when the side has no piece in its focused era, and to the normal
/// handler otherwise. Human input runs through a front end implementing
/// this trait; the engine ships the two automated variants.
pub trait Strategy {
    /// Picks a move when no piece sits in the focused era.
    fn handle_focus_switch(&mut self, game: &GameState, color: Color) -> Option<Move>;

    /// Picks a move when at least one piece is selectable.
    fn handle_normal_turn(&mut self, game: &GameState, color: Color) -> Option<Move>;

    /// Routes to the appropriate handler for the current position.
    fn select_move(&mut self, game: &GameState, color: Color) -> Option<Move> {
        if game.player(color).has_piece_in(game.focus(color)) {
            self.handle_normal_turn(game, color)
        } else {
            self.handle_focus_switch(game, color)
        }
    }
}

/// Picks uniformly at random from the full candidate pool.
pub struct RandomStrategy {
    rng: SmallRng,
}

impl RandomStrategy {
    /// Creates a strategy with an entropy-seeded generator.
    pub fn new() -> Self {
        RandomStrategy {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a strategy with a deterministic generator.
    pub fn seeded(seed: u64) -> Self {
        RandomStrategy {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, game: &GameState, color: Color) -> Option<Move> {
        let pool: Vec<Candidate> = enumerate_all_moves(game, color).into_iter().collect();
        if pool.is_empty() {
            return None;
        }
        let idx = self.rng.gen_range(0..pool.len());
        Some(Move::from_candidate(&pool[idx]))
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn handle_focus_switch(&mut self, game: &GameState, color: Color) -> Option<Move> {
        self.pick(game, color)
    }

    fn handle_normal_turn(&mut self, game: &GameState, color: Color) -> Option<Move> {
        self.pick(game, color)
    }
}

/// Takes the first element of the tie-broken best-move sequence.
pub struct HeuristicStrategy {
    seed: Option<u64>,
}

impl HeuristicStrategy {
    /// Creates a strategy whose tie-breaks are entropy-seeded.
    pub fn new() -> Self {
        HeuristicStrategy { seed: None }
    }

    /// Creates a strategy with deterministic tie-breaks.
    pub fn seeded(seed: u64) -> Self {
        HeuristicStrategy { seed: Some(seed) }
    }

    fn pick(&mut self, game: &GameState, color: Color) -> Option<Move> {
        let mut selector = match self.seed {
            Some(seed) => BestMoveSelector::seeded(game, color, seed),
            None => BestMoveSelector::new(game, color),
        };
        selector.next().map(|c| Move::from_candidate(&c))
    }
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for HeuristicStrategy {
    fn handle_focus_switch(&mut self, game: &GameState, color: Color) -> Option<Move> {
        self.pick(game, color)
    }

    fn handle_normal_turn(&mut self, game: &GameState, color: Color) -> Option<Move> {
        self.pick(game, color)
    }
}

/// The live game plus optional snapshot history.
pub struct Session {
    pub game: GameState,
    history: Option<History>,
}

impl Session {
    /// Starts a session from the standard starting position.
    pub fn new(track_history: bool) -> Self {
        Self::from_game(GameState::new(), track_history)
    }

    /// Starts a session from an arbitrary position.
    pub fn from_game(game: GameState, track_history: bool) -> Self {
        Session {
            game,
            history: track_history.then(History::new),
        }
    }

    /// Saves the live state onto the undo stack; no-op when history
    /// tracking is disabled.
    pub fn save_state(&mut self) {
        let Session { game, history } = self;
        if let Some(history) = history {
            history.backup(game);
        }
    }

    /// Restores the live game from a snapshot.
    pub fn restore_state(&mut self, snapshot: &GameSnapshot) {
        snapshot.restore(&mut self.game);
    }

    /// Undoes the most recent saved state; `None` when history is empty
    /// or disabled.
    pub fn undo(&mut self) -> Option<GameSnapshot> {
        let Session { game, history } = self;
        history.as_mut()?.undo(game)
    }

    /// Redoes the most recently undone state; `None` when nothing was
    /// undone or history is disabled.
    pub fn redo(&mut self) -> Option<GameSnapshot> {
        let Session { game, history } = self;
        history.as_mut()?.redo(game)
    }

    /// Returns the winner, if the game is over: the side to move having
    /// all its pieces in one era means its opponent has won.
    pub fn winner(&self) -> Option<Color> {
        let color = self.game.current_color();
        self.game.is_winning(color).then(|| color.opponent())
    }

    /// Runs one full turn: snapshot, select, apply, advance. Returns the
    /// applied move, or `None` when the strategy produced none.
    pub fn play_turn(&mut self, strategy: &mut dyn Strategy) -> Result<Option<Move>, MoveError> {
        self.save_state();
        let color = self.game.current_color();
        let Some(selected) = strategy.select_move(&self.game, color) else {
            return Ok(None);
        };
        selected.apply(&mut self.game)?;
        self.game.advance_turn();
        Ok(Some(selected))
    }
}
