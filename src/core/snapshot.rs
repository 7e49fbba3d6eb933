//! Snapshot module - serializable view of a session
//!
//! The snapshot is the complete render/assert surface: grid as plain rows,
//! score, and the terminal flag, plus enough bookkeeping (seed, episode,
//! move count) to reproduce or label a session.

use serde::{Deserialize, Serialize};

use crate::types::GRID_SIZE;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: [[u32; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub game_over: bool,
    pub moves_made: u32,
    pub episode_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    /// Largest tile in the snapshot (0 when the grid is empty)
    pub fn highest_tile(&self) -> u32 {
        self.grid
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }
}
