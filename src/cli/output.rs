use serde::Serialize;

use crate::model::{Directive, FileEntry, render_directives};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

/// Result of `glyph add`
#[derive(Debug, Serialize)]
pub struct AddJson<'a> {
    /// `staged`, `selected`, `discarded` (or `discard` when only printed),
    /// `cancelled` or `empty`
    pub outcome: &'static str,
    pub files: Vec<&'a FileEntry>,
}

/// Result of `glyph edit`
#[derive(Debug, Serialize)]
pub struct EditJson<'a> {
    /// `applied`, `unchanged`, `planned`, `cancelled` or `empty`
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<&'a str>,
    pub directives: &'a [Directive],
}

/// Result of `glyph parent`
#[derive(Debug, Serialize)]
pub struct ParentJson<'a> {
    pub branch: &'a str,
    pub parent: &'a str,
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One path per line
pub fn format_paths(files: &[FileEntry]) -> String {
    files
        .iter()
        .map(|f| f.path.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// The plan as directive lines, without the trailing newline
pub fn format_plan(directives: &[Directive]) -> String {
    render_directives(directives).trim_end_matches('\n').to_string()
}

pub fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{} {}", n, word)
    } else {
        format!("{} {}s", n, word)
    }
}
