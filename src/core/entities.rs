//! Entity records: player, enemies, cookies, bombs
//!
//! These are plain position/state records. Movement rules and collision
//! resolution live in `world` and `game_state`; the only behavior kept here
//! is what a single entity can decide about itself.

use crate::core::map::GridMap;
use crate::core::world::World;
use crate::types::{Facing, Pos, START_HEALTH};

/// The player-controlled character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub pos: Pos,
    /// Never clamped; may go negative on the fatal hit.
    pub health: i32,
}

impl Player {
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            health: START_HEALTH,
        }
    }

    /// Attempt a one-cell move.
    ///
    /// An impassable target silently rejects the move. A successful move
    /// consumes any cookie on the destination cell as a side effect.
    /// Returns whether the player actually moved.
    pub fn try_move(&mut self, dx: i16, dy: i16, map: &GridMap, world: &mut World) -> bool {
        let target = self.pos.offset(dx, dy);
        if !map.passable(target) {
            return false;
        }
        self.pos = target;
        world.consume_cookie_at(self.pos);
        true
    }

    /// Apply damage. Health has no floor; death is checked by the caller.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }
}

/// A horizontally patrolling enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub pos: Pos,
    pub facing: Facing,
    /// Ticks since the last movement attempt; resets at the move period.
    pub move_delay: u8,
    /// Cosmetic counter of cells actually walked.
    pub steps: u32,
}

impl Enemy {
    pub fn new(pos: Pos, facing: Facing) -> Self {
        Self {
            pos,
            facing,
            move_delay: 0,
            steps: 0,
        }
    }

    /// The cell this enemy would step into next.
    pub fn candidate(&self) -> Pos {
        self.pos.offset(self.facing.dx(), 0)
    }
}

/// A collectible; removed permanently when the player reaches it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cookie {
    pub pos: Pos,
}

/// A one-shot hazard; removed permanently on first trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bomb {
    pub pos: Pos,
}
