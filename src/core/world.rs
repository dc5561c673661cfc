//! World module - owns the entity collections
//!
//! The world resolves spatial queries (who occupies a cell) and mutation
//! (cookie pickup, bomb trigger). Enemy count is fixed for a whole run;
//! cookies and bombs only ever shrink.

use arrayvec::ArrayVec;

use crate::core::entities::{Bomb, Cookie, Enemy};
use crate::types::{Facing, Pos, ENEMY_COUNT};

/// Entity collections for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    enemies: ArrayVec<Enemy, ENEMY_COUNT>,
    cookies: Vec<Cookie>,
    bombs: Vec<Bomb>,
}

impl World {
    pub fn new(
        enemies: impl IntoIterator<Item = Enemy>,
        cookies: impl IntoIterator<Item = Cookie>,
        bombs: impl IntoIterator<Item = Bomb>,
    ) -> Self {
        Self {
            enemies: enemies.into_iter().collect(),
            cookies: cookies.into_iter().collect(),
            bombs: bombs.into_iter().collect(),
        }
    }

    /// Entity layout for the built-in level.
    ///
    /// Every spawn point sits on a passable tile of [`LEVEL_MAP`].
    ///
    /// [`LEVEL_MAP`]: crate::core::map::LEVEL_MAP
    pub fn level() -> Self {
        let enemies = [
            Enemy::new(Pos::new(5, 1), Facing::Right),
            Enemy::new(Pos::new(15, 1), Facing::Left),
            Enemy::new(Pos::new(10, 5), Facing::Left),
            Enemy::new(Pos::new(10, 8), Facing::Right),
            Enemy::new(Pos::new(4, 10), Facing::Right),
        ];
        let cookies = [
            Cookie { pos: Pos::new(1, 1) },
            Cookie { pos: Pos::new(18, 1) },
            Cookie { pos: Pos::new(5, 3) },
            Cookie { pos: Pos::new(11, 7) },
            Cookie { pos: Pos::new(13, 8) },
            Cookie { pos: Pos::new(16, 10) },
        ];
        let bombs = [
            Bomb { pos: Pos::new(6, 5) },
            Bomb { pos: Pos::new(17, 7) },
            Bomb { pos: Pos::new(2, 8) },
            Bomb { pos: Pos::new(9, 10) },
        ];
        Self::new(enemies, cookies, bombs)
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn enemies_mut(&mut self) -> &mut [Enemy] {
        &mut self.enemies
    }

    pub fn cookies(&self) -> &[Cookie] {
        &self.cookies
    }

    pub fn bombs(&self) -> &[Bomb] {
        &self.bombs
    }

    /// First enemy (in roster order) occupying `pos`, if any.
    pub fn occupant_at(&self, pos: Pos) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.pos == pos)
    }

    pub fn cookie_at(&self, pos: Pos) -> bool {
        self.cookies.iter().any(|c| c.pos == pos)
    }

    pub fn bomb_at(&self, pos: Pos) -> bool {
        self.bombs.iter().any(|b| b.pos == pos)
    }

    /// Remove all cookies at `pos` (0 or 1 given unique spawn points).
    ///
    /// Idempotent; returns whether anything was removed.
    pub fn consume_cookie_at(&mut self, pos: Pos) -> bool {
        let before = self.cookies.len();
        self.cookies.retain(|c| c.pos != pos);
        before != self.cookies.len()
    }

    /// Remove one bomb at `pos` if present.
    ///
    /// At-most-once per bomb instance: a later visit to the same cell
    /// returns false.
    pub fn trigger_bomb_at(&mut self, pos: Pos) -> bool {
        match self.bombs.iter().position(|b| b.pos == pos) {
            Some(idx) => {
                self.bombs.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Win condition: every cookie has been collected.
    pub fn is_cleared(&self) -> bool {
        self.cookies.is_empty()
    }
}
