use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers;

/// Render the task list. Takes `&mut App` because it adjusts the scroll
/// offset to keep the cursor row on screen.
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let snapshot = app.store.snapshot();

    if snapshot.tasks.is_empty() {
        let empty = Paragraph::new(" No tasks yet (press a to add one)")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    let cursor = app.cursor.min(snapshot.tasks.len() - 1);
    let visible_height = area.height as usize;

    // Keep the cursor row visible
    if cursor < app.scroll_offset {
        app.scroll_offset = cursor;
    } else if visible_height > 0 && cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = cursor + 1 - visible_height;
    }
    let scroll = app.scroll_offset;

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (i, task) in snapshot
        .tasks
        .iter()
        .enumerate()
        .skip(scroll)
        .take(visible_height)
    {
        let is_cursor = i == cursor;
        let bg = if is_cursor {
            app.theme.selection_bg
        } else {
            app.theme.background
        };

        let checkbox_style = if task.done {
            Style::default().fg(app.theme.done).bg(bg)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        let mut text_style = if task.done {
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(app.theme.text_bright).bg(bg)
        };
        if is_cursor {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }

        let mut spans = vec![
            Span::styled(format!(" {} ", helpers::checkbox(task.done)), checkbox_style),
            Span::styled(
                unicode::truncate_to_width(&task.text, width.saturating_sub(5)),
                text_style,
            ),
        ];

        // Pad the cursor row so the selection background spans the width
        if is_cursor {
            let content_width = helpers::spans_width(&spans);
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
