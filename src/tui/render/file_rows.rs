use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::model::FileEntry;
use crate::tui::list::ViewMode;
use crate::tui::theme::Theme;

use super::{cursor_marker, row_style};

/// `> [x] M src/main.rs`
pub fn file_item_spans(
    entry: &FileEntry,
    label: &str,
    indent: usize,
    selected: bool,
    is_cursor: bool,
    theme: &Theme,
) -> Vec<Span<'static>> {
    let base = row_style(is_cursor, theme);
    let check = if selected {
        Span::styled("x", base.fg(theme.green))
    } else {
        Span::styled(" ", base)
    };
    let bracket = if selected { base.fg(theme.green) } else { base };

    vec![
        cursor_marker(is_cursor, theme),
        Span::styled("[", bracket),
        check,
        Span::styled("] ", bracket),
        Span::styled(
            entry.kind.letter().to_string(),
            base.fg(theme.change_color(entry.kind)),
        ),
        Span::styled(format!(" {}{}", "  ".repeat(indent), label), base),
    ]
}

/// `2/5 selected`, plus the view name when grouped
pub fn file_summary(selected: usize, total: usize, view: ViewMode, theme: &Theme) -> Line<'static> {
    let style = Style::default().fg(theme.dim).bg(theme.background);
    let mut spans = vec![Span::styled(format!("{}/{} selected", selected, total), style)];
    if view == ViewMode::Grouped {
        spans.push(Span::styled("  grouped by directory", style));
    }
    Line::from(spans)
}
