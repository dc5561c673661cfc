//! Terminal rendering module.
//!
//! Two layers: a pure view that flattens game state into a semantic glyph
//! frame, and a crossterm backend that owns raw mode and flushes frames.
//! Only `renderer` touches the terminal.

pub mod frame;
pub mod game_view;
pub mod renderer;

pub use frame::{Frame, Glyph};
pub use renderer::TerminalRenderer;
