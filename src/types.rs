//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use serde::{Deserialize, Serialize};

/// Grid dimensions (fixed 4x4)
pub const GRID_SIZE: usize = 4;
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// Probability that a spawned tile is a 2 (otherwise a 4)
pub const TWO_SPAWN_PROBABILITY: f64 = 0.9;

/// A move direction.
///
/// The direction determines both the axis scanned (rows for Left/Right,
/// columns for Up/Down) and the scan order (ascending index for Left/Up,
/// descending for Right/Down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }
}

/// Game actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    Restart,
}
