mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::App;

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    navigate::handle_navigate(app, key);
}
