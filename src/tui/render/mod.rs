pub mod commit_rows;
pub mod file_rows;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::Session;
use super::grouping::Row;
use super::theme::Theme;
use crate::util::unicode;

/// Draw a session: help line, blank, visible rows with overflow markers,
/// blank, summary.
pub fn render<S: Session>(frame: &mut Frame, session: &S, theme: &Theme) {
    let area = frame.area();
    let bg_style = Style::default().bg(theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let list = session.list();
    let window = list.window();
    let cursor = list.cursor();

    let mut lines: Vec<Line> = Vec::with_capacity(window.rows.len() + 6);
    lines.push(help_line(session.key_hints(), theme));
    lines.push(Line::default());

    if window.above > 0 {
        lines.push(overflow_line(format!("  \u{2191} {} more above", window.above), theme));
    }

    for row in window.rows {
        let line = match row {
            Row::Header { label } => Line::from(Span::styled(
                label.clone(),
                Style::default().fg(theme.blue).bg(theme.background),
            )),
            Row::Item {
                index,
                label,
                indent,
            } => {
                let is_cursor = *index == cursor;
                let mut spans = session.item_spans(*index, label, *indent, is_cursor, theme);
                if is_cursor {
                    pad_to_width(
                        &mut spans,
                        area.width as usize,
                        Style::default().bg(theme.selection_bg),
                    );
                }
                Line::from(spans)
            }
        };
        lines.push(line);
    }

    if window.below > 0 {
        lines.push(overflow_line(format!("  \u{2193} {} more below", window.below), theme));
    }

    lines.push(Line::default());
    lines.push(session.summary_line(theme));

    frame.render_widget(Paragraph::new(lines).style(bg_style), area);
}

fn help_line(hints: &[(&str, &str)], theme: &Theme) -> Line<'static> {
    let key_style = Style::default().fg(theme.text_bright).bg(theme.background);
    let desc_style = Style::default().fg(theme.dim).bg(theme.background);
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", desc_style));
        }
        spans.push(Span::styled(key.to_string(), key_style));
        spans.push(Span::styled(format!(" {}", desc), desc_style));
    }
    Line::from(spans)
}

/// Extend a row with styled blanks so its background spans `width` cells.
fn pad_to_width(spans: &mut Vec<Span<'static>>, width: usize, style: Style) {
    let used: usize = spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

fn overflow_line(text: String, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(theme.dim).bg(theme.background),
    ))
}

/// Style for the text of an item row
pub(super) fn row_style(is_cursor: bool, theme: &Theme) -> Style {
    if is_cursor {
        Style::default()
            .fg(theme.text_bright)
            .bg(theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text).bg(theme.background)
    }
}

/// Leading cursor marker: "> " on the cursor row, two spaces elsewhere
pub(super) fn cursor_marker(is_cursor: bool, theme: &Theme) -> Span<'static> {
    if is_cursor {
        Span::styled("> ", row_style(true, theme).fg(theme.highlight))
    } else {
        Span::styled("  ", row_style(false, theme))
    }
}
