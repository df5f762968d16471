use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::store::TaskStore;
use crate::tui::app::{App, DialogState};
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 12;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app over an empty store.
pub fn empty_app() -> App {
    App::new(TaskStore::new(), Theme::default())
}

/// An app whose store holds the given tasks, done flags applied.
pub fn app_with_tasks(tasks: &[(&str, bool)]) -> App {
    let mut store = TaskStore::new();
    for (text, done) in tasks {
        let id = store.add_task(*text);
        if *done {
            store.toggle_done(id).unwrap();
        }
    }
    App::new(store, Theme::default())
}

/// An app with the add dialog open and a draft typed, cursor at the end.
pub fn app_with_dialog(draft: &str) -> App {
    let mut app = empty_app();
    app.store.open_add_dialog();
    app.dialog = Some(DialogState {
        input: draft.to_string(),
        cursor: draft.len(),
    });
    app
}
