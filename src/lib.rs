//! Terminal 2048 with a pure, deterministic game core.
//!
//! The crate splits into a pure engine and thin terminal collaborators:
//!
//! - [`core`]: grid, line collapsing, spawning, terminal detection, and the
//!   session protocol. Deterministic under a seed, no I/O.
//! - [`input`]: crossterm key events mapped to game actions.
//! - [`term`]: layout/colors and the crossterm renderer.
//! - [`types`]: shared pure data types.
//!
//! # Example
//!
//! ```
//! use tui_2048::core::GameState;
//! use tui_2048::types::Direction;
//!
//! let mut game = GameState::new(12345);
//! game.apply_direction(Direction::Left);
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.seed, 12345);
//! ```

pub mod core;
pub mod input;
pub mod term;
pub mod types;
