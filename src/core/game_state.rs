//! Game state module - ties the map, world, and player together
//!
//! This is where the per-tick simulation step and the post-move collision
//! resolution live. The state is pure and deterministic: the same sequence
//! of `tick`/`apply_action` calls always produces the same outcome, which
//! keeps the whole ruleset unit-testable without a terminal.

use crate::core::entities::Player;
use crate::core::map::GridMap;
use crate::core::world::World;
use crate::types::{
    GameAction, Pos, Status, BOMB_DAMAGE, ENEMY_CONTACT_DAMAGE, ENEMY_MOVE_PERIOD,
};

/// Last noteworthy event, consumed by the view for its message line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Shared a cell with an enemy (50 damage)
    EnemyContact,
    /// Stepped on a bomb (25 damage, bomb removed)
    BombBlast,
    /// Picked up a cookie
    Pickup,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    map: GridMap,
    world: World,
    player: Player,
    last_event: Option<GameEvent>,
}

impl GameState {
    /// Start a run on the built-in level
    pub fn new() -> Self {
        Self::with_world(GridMap::level(), World::level(), Pos::new(3, 3))
    }

    /// Start a run on an explicit map/world/spawn (used heavily by tests)
    pub fn with_world(map: GridMap, world: World, spawn: Pos) -> Self {
        debug_assert!(map.passable(spawn));
        Self {
            map,
            world,
            player: Player::new(spawn),
            last_event: None,
        }
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn last_event(&self) -> Option<GameEvent> {
        self.last_event
    }

    /// Drop the pending event message once it has been shown.
    pub fn clear_event(&mut self) {
        self.last_event = None;
    }

    /// Win is checked before loss, matching the render-time check order.
    pub fn status(&self) -> Status {
        if self.world.is_cleared() {
            Status::Won
        } else if self.player.health <= 0 {
            Status::Lost
        } else {
            Status::Running
        }
    }

    /// Advance the simulation by one fixed tick.
    ///
    /// Each enemy, in roster order: waits out its movement delay, then steps
    /// one cell along its facing unless the candidate cell is impassable or
    /// holds a bomb or cookie, in which case it reverses in place. The
    /// player-contact check runs after the movement attempt whether or not
    /// the enemy actually moved, and only on ticks that pass the delay gate.
    pub fn tick(&mut self) {
        for idx in 0..self.world.enemies().len() {
            let mut enemy = self.world.enemies()[idx];

            enemy.move_delay += 1;
            if enemy.move_delay < ENEMY_MOVE_PERIOD {
                self.world.enemies_mut()[idx] = enemy;
                continue;
            }
            enemy.move_delay = 0;

            let candidate = enemy.candidate();
            let blocked = !self.map.passable(candidate)
                || self.world.bomb_at(candidate)
                || self.world.cookie_at(candidate);

            if blocked {
                enemy.facing = enemy.facing.flipped();
            } else {
                enemy.pos = candidate;
                enemy.steps += 1;
            }

            if enemy.pos == self.player.pos {
                self.player.take_damage(ENEMY_CONTACT_DAMAGE);
                self.last_event = Some(GameEvent::EnemyContact);
                tracing::debug!(
                    enemy = idx,
                    x = enemy.pos.x,
                    y = enemy.pos.y,
                    health = self.player.health,
                    "enemy walked into player"
                );
            }

            self.world.enemies_mut()[idx] = enemy;
        }
    }

    /// Apply a player movement command, then resolve collisions.
    ///
    /// Returns whether the player actually moved. Collision resolution runs
    /// after every move command, successful or rejected.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        let (dx, dy) = action.delta();
        let cookies_before = self.world.cookies().len();
        let moved = self.player.try_move(dx, dy, &self.map, &mut self.world);

        if moved && self.world.cookies().len() < cookies_before {
            self.last_event = Some(GameEvent::Pickup);
            tracing::debug!(
                x = self.player.pos.x,
                y = self.player.pos.y,
                remaining = self.world.cookies().len(),
                "cookie collected"
            );
        }

        self.resolve_collisions();
        moved
    }

    /// Post-move damage checks. Enemy contact is checked first; the bomb
    /// check only runs when no enemy shares the cell.
    fn resolve_collisions(&mut self) {
        if self.world.occupant_at(self.player.pos).is_some() {
            self.player.take_damage(ENEMY_CONTACT_DAMAGE);
            self.last_event = Some(GameEvent::EnemyContact);
            tracing::debug!(health = self.player.health, "player stepped into enemy");
        } else if self.world.trigger_bomb_at(self.player.pos) {
            self.player.take_damage(BOMB_DAMAGE);
            self.last_event = Some(GameEvent::BombBlast);
            tracing::debug!(health = self.player.health, "bomb triggered");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
