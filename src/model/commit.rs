use std::fmt;

use serde::Serialize;

/// A commit on the current branch, oldest first in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitEntry {
    pub short_hash: String,
    pub full_hash: String,
    /// Subject line
    pub message: String,
}

impl CommitEntry {
    pub fn new(
        short_hash: impl Into<String>,
        full_hash: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        CommitEntry {
            short_hash: short_hash.into(),
            full_hash: full_hash.into(),
            message: message.into(),
        }
    }
}

/// What to do with a commit when the plan is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionTag {
    #[default]
    Keep,
    Remove,
    MergeIntoPrevious,
    Retitle,
}

impl ActionTag {
    pub const ALL: [ActionTag; 4] = [
        ActionTag::Keep,
        ActionTag::Remove,
        ActionTag::MergeIntoPrevious,
        ActionTag::Retitle,
    ];

    /// Keyword used in directive lines
    pub fn keyword(self) -> &'static str {
        match self {
            ActionTag::Keep => "keep",
            ActionTag::Remove => "remove",
            ActionTag::MergeIntoPrevious => "merge",
            ActionTag::Retitle => "retitle",
        }
    }

    /// `git rebase -i` todo command
    pub fn rebase_verb(self) -> &'static str {
        match self {
            ActionTag::Keep => "pick",
            ActionTag::Remove => "drop",
            ActionTag::MergeIntoPrevious => "squash",
            ActionTag::Retitle => "reword",
        }
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// One confirmed line of a commit plan: `<keyword> <id> <text>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directive {
    pub tag: ActionTag,
    pub id: String,
    /// Edited text if one was committed, otherwise the original subject
    pub text: String,
    /// Whether `text` differs from the original subject
    pub edited: bool,
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.tag, self.id, self.text)
    }
}

/// Serialize directives one per line, in order, with a single trailing newline.
pub fn render_directives(directives: &[Directive]) -> String {
    let mut out = String::new();
    for directive in directives {
        out.push_str(&directive.to_string());
        out.push('\n');
    }
    out
}

/// True when applying the plan would change history.
pub fn has_changes(directives: &[Directive]) -> bool {
    directives
        .iter()
        .any(|d| d.tag != ActionTag::Keep || d.edited)
}
