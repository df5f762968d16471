use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers;

/// Render the status row (bottom of screen): a transient message or the
/// task counts on the left, dim key hints on the right when they fit.
/// Counts are computed from the snapshot here, every render; the view
/// keeps no tally of its own.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let snapshot = app.store.snapshot();

    let mut spans: Vec<Span> = Vec::new();

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    } else if !snapshot.tasks.is_empty() {
        let total = snapshot.tasks.len();
        let done = snapshot.tasks.iter().filter(|t| t.done).count();
        let noun = if total == 1 { "task" } else { "tasks" };
        spans.push(Span::styled(
            format!(" {} {}, {} done", total, noun, done),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    // The dialog popup carries its own hints; keep the row quiet then
    if !snapshot.dialog_visible {
        let hint = "a add  space toggle  enter remove  q quit";
        let content_width = helpers::spans_width(&spans);
        let hint_width = hint.chars().count();
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn counts_and_hints() {
        let app = app_with_tasks(&[("Buy milk", false), ("Walk the dog", true)]);
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_snapshot!("counts_and_hints", output);
    }

    #[test]
    fn message_replaces_counts() {
        let mut app = app_with_tasks(&[("Buy milk", false)]);
        app.status_message = Some("removed \"Buy milk\"".to_string());
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert!(output.starts_with(" removed \"Buy milk\""));
    }

    #[test]
    fn hints_are_dropped_when_they_do_not_fit() {
        let app = app_with_tasks(&[("Buy milk", false)]);
        let output = render_to_string(20, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(output, " 1 task, 0 done");
    }

    #[test]
    fn empty_list_shows_hints_only() {
        let app = empty_app();
        let output = render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, &app, area);
        });
        assert_eq!(
            output.trim_start(),
            "a add  space toggle  enter remove  q quit"
        );
    }
}
