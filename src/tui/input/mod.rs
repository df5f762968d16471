mod dialog;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::App;

/// Handle a key event.
///
/// The interaction mode is not tracked by the view: it is derived from
/// the store's dialog flag, so dispatch can never disagree with what is
/// on screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // A fresh keypress retires the previous feedback line
    if app.status_message.take().is_some() {
        app.request_redraw();
    }

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
        ) {
            app.show_help = false;
            app.request_redraw();
        }
        return;
    }

    if app.store.dialog_visible() {
        dialog::handle_dialog(app, key);
    } else {
        navigate::handle_navigate(app, key);
    }
}
