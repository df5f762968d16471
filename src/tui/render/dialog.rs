use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the add-task dialog as a centered popup over the list.
///
/// The input line shows the view-local draft with a `▌` cursor at the
/// edit position. The store only learns about the text on submit.
pub fn render_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let text_color = app.theme.text;
    let bright = app.theme.text_bright;
    let dim = app.theme.dim;
    let highlight = app.theme.highlight;

    let header_style = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(text_color).bg(bg);
    let input_style = Style::default().fg(bright).bg(bg);
    let cursor_style = Style::default().fg(highlight).bg(bg);
    let dim_style = Style::default().fg(dim).bg(bg);

    let popup_w: u16 = 46.min(area.width.saturating_sub(2));

    let mut lines: Vec<Line> = Vec::new();

    // Title
    lines.push(Line::from(Span::styled(" Add a task", header_style)));
    lines.push(Line::from(Span::styled("", text_style)));

    // Input line: draft split around the cursor
    let (input, cursor) = match &app.dialog {
        Some(ds) => (ds.input.as_str(), ds.cursor.min(ds.input.len())),
        None => ("", 0),
    };
    if input.is_empty() {
        lines.push(Line::from(vec![
            Span::styled(" ", text_style),
            Span::styled("\u{258C}", cursor_style),
            Span::styled("What needs doing?", dim_style),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled(" ", text_style),
            Span::styled(input[..cursor].to_string(), input_style),
            Span::styled("\u{258C}", cursor_style),
            Span::styled(input[cursor..].to_string(), input_style),
        ]));
    }
    lines.push(Line::from(Span::styled("", text_style)));

    // Key hints
    lines.push(Line::from(vec![
        Span::styled("  ", text_style),
        Span::styled("Enter", dim_style),
        Span::styled(" add  ", text_style),
        Span::styled("Esc", dim_style),
        Span::styled(" cancel", text_style),
    ]));

    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));

    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::super::test_helpers::*;
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn dialog_with_draft() {
        let app = app_with_dialog("Buy milk");
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_dialog(frame, &app, area);
        });
        assert_snapshot!("dialog_with_draft", output);
    }

    #[test]
    fn dialog_empty_shows_placeholder() {
        let app = app_with_dialog("");
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_dialog(frame, &app, area);
        });
        assert!(output.contains("What needs doing?"));
        assert!(output.contains("Add a task"));
    }

    #[test]
    fn cursor_splits_the_draft() {
        let mut app = app_with_dialog("abcd");
        app.dialog.as_mut().unwrap().cursor = 2;
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_dialog(frame, &app, area);
        });
        assert!(output.contains("ab\u{258C}cd"));
    }
}
