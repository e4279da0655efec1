use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::{ActionTag, CommitEntry};
use crate::tui::theme::Theme;

use super::{cursor_marker, row_style};

/// Width of the tag column ("retitle" is the longest keyword)
const TAG_WIDTH: usize = 7;

/// `> keep     1a2b3c4 subject`. While editing, `text` is the live buffer
/// followed by a block cursor.
pub fn commit_item_spans(
    commit: &CommitEntry,
    tag: ActionTag,
    text: &str,
    editing: bool,
    is_cursor: bool,
    theme: &Theme,
) -> Vec<Span<'static>> {
    let base = row_style(is_cursor, theme);
    let mut spans = vec![
        cursor_marker(is_cursor, theme),
        Span::styled(
            format!("{:<width$}", tag.keyword(), width = TAG_WIDTH),
            base.fg(theme.tag_color(tag)),
        ),
        Span::styled("  ", base),
        Span::styled(commit.short_hash.clone(), base.fg(theme.dim)),
        Span::styled(" ", base),
    ];

    if editing {
        spans.push(Span::styled(
            text.to_string(),
            base.add_modifier(Modifier::UNDERLINED),
        ));
        spans.push(Span::styled("\u{258C}", base.fg(theme.highlight)));
    } else {
        spans.push(Span::styled(text.to_string(), base));
    }
    spans
}

/// `3 keep  1 remove`, omitting tags with no commits
pub fn commit_summary(counts: &[(ActionTag, usize)], theme: &Theme) -> Line<'static> {
    let gap = Style::default().bg(theme.background);
    let mut spans = Vec::new();
    for &(tag, count) in counts.iter().filter(|(_, count)| *count > 0) {
        if !spans.is_empty() {
            spans.push(Span::styled("  ", gap));
        }
        spans.push(Span::styled(
            format!("{} {}", count, tag.keyword()),
            Style::default().fg(theme.tag_color(tag)).bg(theme.background),
        ));
    }
    Line::from(spans)
}
