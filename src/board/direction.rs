//! The move direction vocabulary.
//!
//! Six directions cover every legal step: four spatial unit offsets within a
//! board and two temporal shifts between boards. The single-character tokens
//! are the entire wire vocabulary between the engine and any front end.

use serde::{Deserialize, Serialize};

/// A single directional step, spatial or temporal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Forward,
    Backward,
}

/// All six directions, spatial first.
pub const ALL_DIRECTIONS: [Direction; 6] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
    Direction::Forward,
    Direction::Backward,
];

impl Direction {
    /// Returns the (dx, dy) unit offset for a spatial direction, or `None`
    /// for a temporal one. x is the row axis, y the column axis.
    pub const fn offset(self) -> Option<(i8, i8)> {
        match self {
            Direction::North => Some((-1, 0)),
            Direction::South => Some((1, 0)),
            Direction::East => Some((0, 1)),
            Direction::West => Some((0, -1)),
            Direction::Forward | Direction::Backward => None,
        }
    }

    /// Returns the era-index shift for a temporal direction, or `None` for
    /// a spatial one.
    pub const fn timeshift(self) -> Option<i8> {
        match self {
            Direction::Forward => Some(1),
            Direction::Backward => Some(-1),
            _ => None,
        }
    }

    /// Returns true for the four within-board directions.
    pub const fn is_spatial(self) -> bool {
        self.offset().is_some()
    }

    /// Returns true for the two between-board directions.
    pub const fn is_temporal(self) -> bool {
        self.timeshift().is_some()
    }

    /// Returns the single-character wire token.
    pub const fn token(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::South => 's',
            Direction::East => 'e',
            Direction::West => 'w',
            Direction::Forward => 'f',
            Direction::Backward => 'b',
        }
    }

    /// Parses a direction from its wire token.
    pub fn from_token(token: char) -> Option<Direction> {
        match token {
            'n' => Some(Direction::North),
            's' => Some(Direction::South),
            'e' => Some(Direction::East),
            'w' => Some(Direction::West),
            'f' => Some(Direction::Forward),
            'b' => Some(Direction::Backward),
            _ => None,
        }
    }
}
