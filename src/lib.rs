//! tui-crawl: a real-time terminal dungeon crawl.
//!
//! The player walks a fixed ASCII map collecting cookies while dodging
//! patrolling enemies and one-shot bombs. A fixed 100 ms tick drives the
//! simulation; input is polled without blocking; the frame is redrawn only
//! when state changed.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
