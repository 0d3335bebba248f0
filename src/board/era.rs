//! The three eras and their temporal ordering.
//!
//! Eras are ordered past < present < future; time travel moves a piece one
//! step along this ordering, never off either end.

use serde::{Deserialize, Serialize};

/// The number of parallel boards in a game.
pub const ERA_COUNT: usize = 3;

/// One of the three parallel boards a piece can occupy.
///
/// The `#[repr(u8)]` attribute enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Era {
    Past = 0,
    Present = 1,
    Future = 2,
}

/// All eras in temporal order.
pub const ALL_ERAS: [Era; ERA_COUNT] = [Era::Past, Era::Present, Era::Future];

impl Era {
    /// Returns the era's position in temporal order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the era `dz` steps along the timeline, or `None` when the
    /// shift runs off either end.
    pub fn shifted(self, dz: i8) -> Option<Era> {
        let idx = self.index() as i8 + dz;
        if (0..ERA_COUNT as i8).contains(&idx) {
            Some(ALL_ERAS[idx as usize])
        } else {
            None
        }
    }

    /// Returns the lowercase era name used by front ends.
    pub const fn name(self) -> &'static str {
        match self {
            Era::Past => "past",
            Era::Present => "present",
            Era::Future => "future",
        }
    }

    /// Parses an era from its lowercase name.
    pub fn from_name(name: &str) -> Option<Era> {
        match name {
            "past" => Some(Era::Past),
            "present" => Some(Era::Present),
            "future" => Some(Era::Future),
            _ => None,
        }
    }
}
