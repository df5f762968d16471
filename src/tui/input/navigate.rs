use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, DialogState};
use crate::util::unicode;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }

        // Help overlay
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
            app.request_redraw();
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (KeyModifiers::NONE, KeyCode::Down) => {
            move_cursor(app, 1);
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (KeyModifiers::NONE, KeyCode::Up) => {
            move_cursor(app, -1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => {
            app.cursor = 0;
            app.request_redraw();
        }
        (_, KeyCode::Char('G')) => {
            app.cursor = app.store.tasks().len().saturating_sub(1);
            app.request_redraw();
        }

        // Open the add-task dialog
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            app.store.open_add_dialog();
            app.dialog = Some(DialogState::default());
        }

        // Checkbox toggle on the task under the cursor
        (KeyModifiers::NONE, KeyCode::Char(' ')) | (KeyModifiers::NONE, KeyCode::Char('x')) => {
            toggle_current(app);
        }

        // Pressing a row removes its task
        (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('d')) => {
            remove_current(app);
        }

        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.store.tasks().len();
    if len == 0 {
        return;
    }
    let new = if delta < 0 {
        app.cursor.saturating_sub(delta.unsigned_abs())
    } else {
        (app.cursor + delta as usize).min(len - 1)
    };
    if new != app.cursor {
        app.cursor = new;
        app.request_redraw();
    }
}

fn toggle_current(app: &mut App) {
    let Some(id) = app.cursor_task_id() else {
        return;
    };
    // A miss means the task is already gone; nothing to report
    let _ = app.store.toggle_done(id);
}

fn remove_current(app: &mut App) {
    let Some(id) = app.cursor_task_id() else {
        return;
    };
    let text = app
        .store
        .tasks()
        .get(app.cursor)
        .map(|t| t.text.clone())
        .unwrap_or_default();
    let _ = app.store.remove_task(id);
    app.clamp_cursor();
    app.status_message = Some(format!(
        "removed \"{}\"",
        unicode::truncate_to_width(&text, 40)
    ));
}
