use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Pane};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab => {
            app.pane = match app.pane {
                Pane::Tasks => Pane::Assets,
                Pane::Assets => Pane::Tasks,
            }
        }
        KeyCode::Char('h') | KeyCode::Left => app.pane = Pane::Tasks,
        KeyCode::Char('l') | KeyCode::Right => app.pane = Pane::Assets,
        KeyCode::Char('j') | KeyCode::Down => move_down(app),
        KeyCode::Char('k') | KeyCode::Up => move_up(app),
        KeyCode::Char('g') => jump_first(app),
        KeyCode::Char('G') => jump_last(app),
        KeyCode::Enter | KeyCode::Char(' ') => activate(app),
        KeyCode::Char('b') => app.toggle_board(),
        _ => {}
    }
}

/// Moving in the task pane *is* selection, like clicking a sidebar
/// entry; moving in the asset pane only moves the card cursor.
fn move_down(app: &mut App) {
    match app.pane {
        Pane::Tasks => {
            let next = app.selected_task + 1;
            if next < app.task_count() {
                app.select_task(next);
            }
        }
        Pane::Assets => {
            let count = app.current_assets().len();
            if count > 0 && app.card_cursor + 1 < count {
                app.card_cursor += 1;
            }
        }
    }
}

fn move_up(app: &mut App) {
    match app.pane {
        Pane::Tasks => {
            if let Some(prev) = app.selected_task.checked_sub(1) {
                app.select_task(prev);
            }
        }
        Pane::Assets => {
            app.card_cursor = app.card_cursor.saturating_sub(1);
        }
    }
}

fn jump_first(app: &mut App) {
    match app.pane {
        Pane::Tasks => {
            if app.task_count() > 0 {
                app.select_task(0);
            }
        }
        Pane::Assets => app.card_cursor = 0,
    }
}

fn jump_last(app: &mut App) {
    match app.pane {
        Pane::Tasks => {
            if let Some(last) = app.task_count().checked_sub(1) {
                app.select_task(last);
            }
        }
        Pane::Assets => {
            if let Some(last) = app.current_assets().len().checked_sub(1) {
                app.card_cursor = last;
            }
        }
    }
}

fn activate(app: &mut App) {
    match app.pane {
        // Re-selecting rebuilds the asset pane from a clean slate
        Pane::Tasks => {
            if app.selected_task < app.task_count() {
                let index = app.selected_task;
                app.select_task(index);
            }
        }
        Pane::Assets => app.toggle_cursored_card(),
    }
}
