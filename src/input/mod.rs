//! Input module - non-blocking key handling
//!
//! The loop polls crossterm with a short timeout; this module only maps the
//! events that arrive. Key events replace the line-buffered reads of a
//! cooked-mode terminal, so no trimming or case folding is needed beyond
//! accepting both cases of each movement key.

pub mod map;

pub use map::{handle_key_event, should_quit};
