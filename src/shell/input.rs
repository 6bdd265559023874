//! Key decoding.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use cat_feeder::game::{Direction, Input};

/// Map a key press to engine input. Only arrow keys move the cat.
pub fn decode_key(key: KeyEvent) -> Input {
    match key.code {
        KeyCode::Up => Input::Move(Direction::Up),
        KeyCode::Down => Input::Move(Direction::Down),
        KeyCode::Left => Input::Move(Direction::Left),
        KeyCode::Right => Input::Move(Direction::Right),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Input::Quit,
        // Raw mode swallows SIGINT.
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        _ => Input::Unrecognized,
    }
}
