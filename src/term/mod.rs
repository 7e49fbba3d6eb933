//! Terminal rendering module
//!
//! [`game_view`] is the pure layout/styling layer; [`renderer`] owns the
//! terminal lifecycle (raw mode, alternate screen) and frame flushing.

pub mod game_view;
pub mod renderer;

pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
