//! Core module - pure game logic with no terminal dependencies
//!
//! Everything in here is deterministic and synchronous: the tile map, the
//! entity collections, the per-tick simulation step, and the post-move
//! collision resolution. No I/O happens below this line.

pub mod entities;
pub mod game_state;
pub mod map;
pub mod world;

// Re-export commonly used types
pub use entities::{Bomb, Cookie, Enemy, Player};
pub use game_state::{GameEvent, GameState};
pub use map::{GridMap, Tile, LEVEL_MAP};
pub use world::World;
