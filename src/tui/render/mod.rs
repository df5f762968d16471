pub mod dialog;
pub mod help_overlay;
pub mod helpers;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function; dispatches to sub-renderers.
///
/// Rendering is a pure function of the store snapshot plus view-local
/// state: given the same inputs, the same cells come out. The tests rely
/// on this.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    list_view::render_list_view(frame, app, chunks[0]);
    status_row::render_status_row(frame, app, chunks[1]);

    // Add-task dialog (on top of the list)
    if app.store.dialog_visible() {
        dialog::render_dialog(frame, app, frame.area());
    }

    // Help overlay (on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
}
