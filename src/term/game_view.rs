//! GameView: maps `core::GameState` into a frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameEvent, GameState, Tile};
use crate::term::frame::{Frame, Glyph};
use crate::types::Status;

/// Flattens world + player into a glyph frame.
///
/// Cell priority, highest wins: player > cookie > bomb > enemy > map tile.
/// Implemented by drawing in ascending priority so later writes shadow
/// earlier ones.
pub fn render(state: &GameState) -> Frame {
    let map = state.map();
    let mut frame = Frame::new(map.width() as u16, map.height() as u16);

    for y in 0..map.height() {
        for x in 0..map.width() {
            let glyph = match map.tile(crate::types::Pos::new(x, y)) {
                Some(Tile::Wall) => Glyph::Wall,
                Some(Tile::Door) => Glyph::Door,
                _ => Glyph::Floor,
            };
            frame.set(x as u16, y as u16, glyph);
        }
    }

    let world = state.world();
    for enemy in world.enemies() {
        frame.set(enemy.pos.x as u16, enemy.pos.y as u16, Glyph::Enemy);
    }
    for bomb in world.bombs() {
        frame.set(bomb.pos.x as u16, bomb.pos.y as u16, Glyph::Bomb);
    }
    for cookie in world.cookies() {
        frame.set(cookie.pos.x as u16, cookie.pos.y as u16, Glyph::Cookie);
    }

    let player = state.player();
    frame.set(player.pos.x as u16, player.pos.y as u16, Glyph::Player);

    frame.status = format!(
        "HP: {}   Cookies left: {}",
        player.health,
        world.cookies().len()
    );
    frame.message = state.last_event().map(event_message);
    frame.prompt = match state.status() {
        Status::Running => "Move with w/a/s/d, q quits.".to_string(),
        Status::Won => "All cookies collected. You win!".to_string(),
        Status::Lost => "You have fallen. Game over.".to_string(),
    };

    frame
}

fn event_message(event: GameEvent) -> String {
    match event {
        GameEvent::EnemyContact => "An enemy hits you! -50 hp".to_string(),
        GameEvent::BombBlast => "A bomb goes off under you! -25 hp".to_string(),
        GameEvent::Pickup => "You scoop up a cookie.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Bomb, Cookie, Enemy, GridMap, World};
    use crate::types::{Facing, Pos};

    fn room() -> GridMap {
        GridMap::from_rows(&["#####", "#...#", "#...#", "#####"])
    }

    #[test]
    fn test_player_wins_cell_priority() {
        // Everything stacked on one cell: the player glyph must show.
        let world = World::new(
            [Enemy::new(Pos::new(2, 1), Facing::Left)],
            [Cookie { pos: Pos::new(2, 1) }],
            [Bomb { pos: Pos::new(2, 1) }],
        );
        let mut state = GameState::with_world(room(), world, Pos::new(1, 1));
        state.apply_action(crate::types::GameAction::MoveRight);

        let frame = render(&state);
        assert_eq!(frame.get(2, 1), Some(Glyph::Player));
    }

    #[test]
    fn test_cookie_shadows_bomb_shadows_enemy() {
        let world = World::new(
            [
                Enemy::new(Pos::new(1, 1), Facing::Left),
                Enemy::new(Pos::new(2, 1), Facing::Left),
            ],
            [Cookie { pos: Pos::new(1, 1) }],
            [Bomb { pos: Pos::new(1, 1) }, Bomb { pos: Pos::new(2, 1) }],
        );
        let state = GameState::with_world(room(), world, Pos::new(3, 2));

        let frame = render(&state);
        assert_eq!(frame.get(1, 1), Some(Glyph::Cookie));
        assert_eq!(frame.get(2, 1), Some(Glyph::Bomb));
    }

    #[test]
    fn test_frame_shows_map_tiles_and_status() {
        let state = GameState::with_world(room(), World::new([], [], []), Pos::new(1, 1));
        let frame = render(&state);

        let lines = frame.to_lines();
        assert_eq!(lines[0], "#####");
        assert_eq!(lines[1], "#@..#");
        assert_eq!(frame.status, "HP: 100   Cookies left: 0");
    }

    #[test]
    fn test_built_in_level_frame_dimensions() {
        let frame = render(&GameState::new());
        assert_eq!(frame.width(), 20);
        assert_eq!(frame.height(), 12);
        let lines = frame.to_lines();
        assert!(lines.iter().all(|l| l.chars().count() == 20));
    }

    #[test]
    fn test_banner_replaces_prompt_on_win() {
        let state = GameState::with_world(room(), World::new([], [], []), Pos::new(1, 1));
        let frame = render(&state);
        assert!(frame.prompt.contains("win"));
    }
}
