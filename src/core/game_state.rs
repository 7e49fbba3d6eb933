//! Game state module - the per-turn session protocol
//!
//! Ties the core components together: apply a direction, commit the new
//! grid, score and spawn on success, then recheck for game over. The whole
//! new state is computed before any of it becomes visible to callers.

use crate::core::collapse::{apply_move, is_terminal};
use crate::core::grid::Grid;
use crate::core::rng::GameRng;
use crate::core::snapshot::GameSnapshot;
use crate::core::spawn::spawn_tile;
use crate::types::{Direction, GameAction};

/// Complete game session state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    score: u32,
    game_over: bool,
    /// Accepted moves in the current episode.
    moves_made: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    rng: GameRng,
}

impl GameState {
    /// Create a new session with the given RNG seed, seeded with two tiles
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            grid: Grid::new(),
            score: 0,
            game_over: false,
            moves_made: 0,
            episode_id: 0,
            rng: GameRng::new(seed),
        };
        state.seed_grid();
        state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn highest_tile(&self) -> u32 {
        self.grid.highest_tile()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Apply a move in the given direction.
    ///
    /// Returns true if the grid changed (and was committed). Once the game
    /// is over, only a restart changes anything. A direction that would not
    /// move any tile leaves grid, score, and state untouched.
    pub fn apply_direction(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }

        let outcome = apply_move(&self.grid, direction);
        if !outcome.moved {
            return false;
        }

        self.grid = outcome.grid;
        self.score += outcome.score_delta;
        self.moves_made += 1;
        spawn_tile(&mut self.grid, &mut self.rng);
        self.game_over = is_terminal(&self.grid);
        true
    }

    /// Apply an input-layer action
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Move(direction) => {
                self.apply_direction(direction);
            }
            GameAction::Restart => self.restart(),
        }
    }

    /// Start a fresh episode: score to zero, new grid with two tiles.
    ///
    /// The RNG stream continues, so a whole session including restarts
    /// replays exactly from the construction seed.
    pub fn restart(&mut self) {
        self.grid = Grid::new();
        self.score = 0;
        self.game_over = false;
        self.moves_made = 0;
        self.episode_id += 1;
        self.seed_grid();
    }

    fn seed_grid(&mut self) {
        spawn_tile(&mut self.grid, &mut self.rng);
        spawn_tile(&mut self.grid, &mut self.rng);
        self.game_over = is_terminal(&self.grid);
    }

    /// Fill an existing snapshot from the current state
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid.to_rows();
        out.score = self.score;
        out.game_over = self.game_over;
        out.moves_made = self.moves_made;
        out.episode_id = self.episode_id;
        out.seed = self.rng.seed();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}
