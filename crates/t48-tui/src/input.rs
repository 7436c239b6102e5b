//! Input handling - convert key events to move directions

use crossterm::event::{KeyCode, KeyEvent};
use t48_core::Direction;

/// Map WASD (either case) and the arrow keys to a move direction.
///
/// Everything else is ignored during play; quit/restart keys are handled
/// in app.rs because they change the UI mode instead of moving tiles.
pub fn key_to_direction(key: KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Direction::Up),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Direction::Down),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Direction::Left),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Direction::Right),
        _ => None,
    }
}
