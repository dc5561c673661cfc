//! View layer: frame contents for the built-in level.

use tui_crawl::core::GameState;
use tui_crawl::term::game_view;
use tui_crawl::term::Glyph;
use tui_crawl::types::GameAction;

#[test]
fn initial_frame_shows_every_entity_class() {
    let state = GameState::new();
    let frame = game_view::render(&state);

    assert_eq!(frame.get(3, 3), Some(Glyph::Player));
    assert_eq!(frame.get(10, 8), Some(Glyph::Enemy));
    assert_eq!(frame.get(13, 8), Some(Glyph::Cookie));
    assert_eq!(frame.get(2, 8), Some(Glyph::Bomb));
    assert_eq!(frame.get(0, 0), Some(Glyph::Wall));
    assert_eq!(frame.get(9, 3), Some(Glyph::Door));

    assert_eq!(frame.status, "HP: 100   Cookies left: 6");
    assert!(frame.message.is_none());
    assert!(frame.prompt.contains("w/a/s/d"));
}

#[test]
fn frame_lines_match_map_dimensions() {
    let frame = game_view::render(&GameState::new());
    let lines = frame.to_lines();
    assert_eq!(lines.len(), 12);
    assert!(lines.iter().all(|l| l.chars().count() == 20));
    assert_eq!(lines[0], "####################");
}

#[test]
fn event_message_appears_then_clears() {
    let mut state = GameState::new();

    // Walk onto the (2, 8) bomb.
    for action in [
        GameAction::MoveDown,
        GameAction::MoveDown,
        GameAction::MoveDown,
        GameAction::MoveDown,
        GameAction::MoveDown,
        GameAction::MoveLeft,
    ] {
        state.apply_action(action);
    }

    let frame = game_view::render(&state);
    assert_eq!(frame.message.as_deref(), Some("A bomb goes off under you! -25 hp"));
    assert!(frame.status.starts_with("HP: 75"));

    // The loop clears the event after drawing; the next frame is quiet.
    state.clear_event();
    let frame = game_view::render(&state);
    assert!(frame.message.is_none());
}

#[test]
fn consumed_cookie_cell_falls_back_to_floor() {
    let mut state = GameState::new();

    // (5, 3) holds a cookie two steps east of spawn.
    state.apply_action(GameAction::MoveRight);
    state.apply_action(GameAction::MoveRight);

    let frame = game_view::render(&state);
    assert_eq!(frame.get(5, 3), Some(Glyph::Player));

    state.apply_action(GameAction::MoveRight);
    let frame = game_view::render(&state);
    assert_eq!(frame.get(5, 3), Some(Glyph::Floor));
}
