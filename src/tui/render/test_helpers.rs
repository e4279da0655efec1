use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::model::{ChangeKind, CommitEntry, FileEntry};

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

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

    buffer_to_string(terminal.backend().buffer())
}

/// Plain text of a buffer with trailing whitespace and blank lines trimmed.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let w = buf.area.width as usize;
    if w == 0 {
        return String::new();
    }
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

/// A small working tree spread over a few directories.
pub fn sample_files() -> Vec<FileEntry> {
    vec![
        FileEntry::new("Cargo.toml", ChangeKind::Modified),
        FileEntry::new("src/main.rs", ChangeKind::Modified),
        FileEntry::new("src/tui/app.rs", ChangeKind::Added),
        FileEntry::new("src/tui/theme.rs", ChangeKind::Deleted),
        FileEntry::new("tests/cli.rs", ChangeKind::Renamed),
    ]
}

/// Commits `c0`..`cN` with subjects `subject N`.
pub fn sample_commits(n: usize) -> Vec<CommitEntry> {
    (0..n)
        .map(|i| {
            CommitEntry::new(
                format!("c{}", i),
                format!("c{}{}", i, "0".repeat(38)),
                format!("subject {}", i),
            )
        })
        .collect()
}
