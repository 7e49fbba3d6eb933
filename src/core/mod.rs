//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O, making it:
//!
//! - **Deterministic**: the same seed produces an identical session
//! - **Testable**: every rule is a pure function over plain data
//! - **Portable**: runs in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: the 4x4 tile matrix with row/column views and validation
//! - [`collapse`]: line collapsing, move application, terminal detection
//! - [`spawn`]: random tile insertion after a successful move
//! - [`rng`]: the injected, seed-remembering random source
//! - [`game_state`]: the session protocol (moves, score, restart)
//! - [`snapshot`]: serializable state view for rendering and tests

pub mod collapse;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;
pub mod spawn;

// Re-export commonly used types
pub use collapse::{apply_move, collapse_line, is_terminal, MoveOutcome};
pub use game_state::GameState;
pub use grid::{Grid, InvalidGrid};
pub use rng::GameRng;
pub use snapshot::GameSnapshot;
pub use spawn::spawn_tile;
