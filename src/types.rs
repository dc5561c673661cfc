//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Game timing constants (in milliseconds)
pub const TICK_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 10;

/// Player starting health
pub const START_HEALTH: i32 = 100;

/// Damage amounts
pub const ENEMY_CONTACT_DAMAGE: i32 = 50;
pub const BOMB_DAMAGE: i32 = 25;

/// An enemy advances one cell every Nth simulation tick
pub const ENEMY_MOVE_PERIOD: u8 = 4;

/// Fixed entity count for the built-in level
pub const ENEMY_COUNT: usize = 5;

/// Integer grid position.
///
/// Coordinates may go negative during candidate-move computation; the map
/// treats anything outside its bounds as impassable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i16,
    pub y: i16,
}

impl Pos {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Offset by a movement delta.
    pub fn offset(self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Horizontal patrol facing for enemies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Flip to the opposite direction
    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// One-cell horizontal step for this facing
    pub fn dx(self) -> i16 {
        match self {
            Facing::Left => -1,
            Facing::Right => 1,
        }
    }
}

/// Game actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
}

impl GameAction {
    /// Movement delta (dx, dy) for this action
    pub fn delta(self) -> (i16, i16) {
        match self {
            GameAction::MoveUp => (0, -1),
            GameAction::MoveDown => (0, 1),
            GameAction::MoveLeft => (-1, 0),
            GameAction::MoveRight => (1, 0),
        }
    }
}

/// Overall game status, derived from world + player state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Won,
    Lost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facing_flip_is_involution() {
        assert_eq!(Facing::Left.flipped(), Facing::Right);
        assert_eq!(Facing::Right.flipped(), Facing::Left);
        assert_eq!(Facing::Left.flipped().flipped(), Facing::Left);
    }

    #[test]
    fn test_action_deltas() {
        assert_eq!(GameAction::MoveUp.delta(), (0, -1));
        assert_eq!(GameAction::MoveDown.delta(), (0, 1));
        assert_eq!(GameAction::MoveLeft.delta(), (-1, 0));
        assert_eq!(GameAction::MoveRight.delta(), (1, 0));
    }
}
