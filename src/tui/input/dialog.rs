use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::util::unicode;

/// Key handling while the add-task dialog is open. All editing happens on
/// the view-local draft; the store is only touched on submit or cancel.
pub(super) fn handle_dialog(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Commit the draft, close the dialog
        (_, KeyCode::Enter) => {
            let draft = app.dialog.take().unwrap_or_default();
            app.store.add_task(draft.input.clone());
            // Land the cursor on the task that was just added
            app.cursor = app.store.tasks().len() - 1;
            app.status_message = Some(format!(
                "added \"{}\"",
                unicode::truncate_to_width(&draft.input, 40)
            ));
        }

        // Dismiss, discarding the draft
        (_, KeyCode::Esc) => {
            app.dialog = None;
            app.store.close_add_dialog();
        }

        (KeyModifiers::NONE, KeyCode::Backspace) => {
            if let Some(ds) = &mut app.dialog
                && let Some(prev) = unicode::prev_grapheme_boundary(&ds.input, ds.cursor)
            {
                ds.input.replace_range(prev..ds.cursor, "");
                ds.cursor = prev;
                app.request_redraw();
            }
        }

        (KeyModifiers::NONE, KeyCode::Delete) => {
            if let Some(ds) = &mut app.dialog
                && let Some(next) = unicode::next_grapheme_boundary(&ds.input, ds.cursor)
            {
                ds.input.replace_range(ds.cursor..next, "");
                app.request_redraw();
            }
        }

        (KeyModifiers::NONE, KeyCode::Left) => {
            if let Some(ds) = &mut app.dialog
                && let Some(prev) = unicode::prev_grapheme_boundary(&ds.input, ds.cursor)
            {
                ds.cursor = prev;
                app.request_redraw();
            }
        }

        (KeyModifiers::NONE, KeyCode::Right) => {
            if let Some(ds) = &mut app.dialog
                && let Some(next) = unicode::next_grapheme_boundary(&ds.input, ds.cursor)
            {
                ds.cursor = next;
                app.request_redraw();
            }
        }

        (KeyModifiers::NONE, KeyCode::Home) => {
            if let Some(ds) = &mut app.dialog {
                ds.cursor = 0;
                app.request_redraw();
            }
        }

        (KeyModifiers::NONE, KeyCode::End) => {
            if let Some(ds) = &mut app.dialog {
                ds.cursor = ds.input.len();
                app.request_redraw();
            }
        }

        // Typed characters insert at the cursor
        (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            if let Some(ds) = &mut app.dialog {
                ds.input.insert(ds.cursor, c);
                ds.cursor += c.len_utf8();
                app.request_redraw();
            }
        }

        _ => {}
    }
}
