//! Keyboard mapping.

use crossterm::event::KeyCode;
use timed_tictactoe::Step;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Step),
    /// Place a mark under the cursor.
    Place,
    /// Place a mark at an index (0-8).
    PlaceAt(usize),
    /// Start a new game.
    Restart,
    /// Switch between human and computer opponent.
    ToggleMode,
    /// Switch computer difficulty.
    ToggleDifficulty,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action. Keys 1-9 select cells in reading order.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up => Some(Action::Cursor(Step::Up)),
        KeyCode::Down => Some(Action::Cursor(Step::Down)),
        KeyCode::Left => Some(Action::Cursor(Step::Left)),
        KeyCode::Right => Some(Action::Cursor(Step::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Place),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::PlaceAt(digit as usize - 1)),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('m') => Some(Action::ToggleMode),
        KeyCode::Char('d') => Some(Action::ToggleDifficulty),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}
