//! Terminal input module
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Any key
//! without a binding is dropped here, before it reaches the engine.

pub mod map;

pub use map::{handle_key_event, should_quit};
