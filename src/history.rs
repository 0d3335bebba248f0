//! Snapshot-based undo/redo.
//!
//! `GameSnapshot` captures the full mutable game state as an independent
//! deep copy; `History` keeps two stacks of snapshots so that undo and redo
//! are symmetric. Restoring never aliases stored state back into the live
//! game. Durable save/load is an external concern layered on top of the
//! snapshot's serializable in-memory shape.

use serde::{Deserialize, Serialize};

use crate::board::{Era, GameState, Player, Timeline};

/// A fully independent deep copy of the mutable game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    timeline: Timeline,
    players: [Player; 2],
    turn: u32,
    current: usize,
    focus: [Era; 2],
}

impl GameSnapshot {
    /// Captures the live game.
    pub fn capture(game: &GameState) -> Self {
        GameSnapshot {
            timeline: game.timeline.clone(),
            players: game.players.clone(),
            turn: game.turn,
            current: game.current,
            focus: game.focus,
        }
    }

    /// Restores the live game from this snapshot, copying state in.
    pub fn restore(&self, game: &mut GameState) {
        game.timeline = self.timeline.clone();
        game.players = self.players.clone();
        game.turn = self.turn;
        game.current = self.current;
        game.focus = self.focus;
    }
}

/// Undo/redo stacks of game snapshots.
#[derive(Debug, Clone, Default)]
pub struct History {
    past: Vec<GameSnapshot>,
    future: Vec<GameSnapshot>,
}

impl History {
    /// Creates empty undo and redo stacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves the live game onto the undo stack. Any previously undone
    /// future is invalidated.
    pub fn backup(&mut self, game: &GameState) {
        self.past.push(GameSnapshot::capture(game));
        self.future.clear();
    }

    /// Restores the most recent undo snapshot, pushing the pre-restore
    /// live state onto the redo stack. Returns `None` with nothing saved.
    pub fn undo(&mut self, game: &mut GameState) -> Option<GameSnapshot> {
        let snapshot = self.past.pop()?;
        self.future.push(GameSnapshot::capture(game));
        snapshot.restore(game);
        Some(snapshot)
    }

    /// Restores the most recent redo snapshot, pushing the pre-restore
    /// live state back onto the undo stack. Returns `None` with nothing
    /// undone.
    pub fn redo(&mut self, game: &mut GameState) -> Option<GameSnapshot> {
        let snapshot = self.future.pop()?;
        self.past.push(GameSnapshot::capture(game));
        snapshot.restore(game);
        Some(snapshot)
    }

    /// Returns the number of undoable snapshots.
    pub fn depth(&self) -> usize {
        self.past.len()
    }

    /// Returns the number of redoable snapshots.
    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }
}
