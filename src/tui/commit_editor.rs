use std::convert::Infallible;

use crossterm::event::KeyEvent;
use ratatui::text::{Line, Span};

use crate::model::{ActionTag, CommitEntry, Directive};

use super::app::{Outcome, Session};
use super::edit::{EditBuffer, EditStep, InputState};
use super::input::{EditorCommand, edit_key, editor_command};
use super::list::{ListItem, ListState};
use super::render::commit_rows::{commit_item_spans, commit_summary};
use super::theme::Theme;

/// The commit editor has no single-item shortcut.
pub type EditorOutcome = Outcome<Vec<Directive>, Infallible>;

const BROWSE_HINTS: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}", "navigate"),
    ("p", "keep"),
    ("d", "remove"),
    ("s", "merge"),
    ("r", "retitle"),
    ("\u{2192}", "edit"),
    ("Enter", "confirm"),
    ("Esc", "cancel"),
];

const EDIT_HINTS: &[(&str, &str)] = &[
    ("Enter", "save message"),
    ("Esc", "discard edit"),
    ("Backspace", "delete"),
];

impl ListItem for CommitEntry {
    fn display(&self) -> &str {
        &self.message
    }
}

/// Mutable overlay for one commit, indexed in parallel with the commits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitMeta {
    pub tag: ActionTag,
    /// Last committed edit, if any
    pub edited: Option<String>,
}

/// Per-commit action and message editor.
#[derive(Debug, Clone)]
pub struct CommitEditor {
    commits: Vec<CommitEntry>,
    meta: Vec<CommitMeta>,
    list: ListState,
    input: InputState,
}

impl CommitEditor {
    pub fn new(commits: Vec<CommitEntry>) -> Self {
        let list = ListState::new(&commits);
        let meta = vec![CommitMeta::default(); commits.len()];
        CommitEditor {
            commits,
            meta,
            list,
            input: InputState::Browsing,
        }
    }

    pub fn meta(&self, index: usize) -> Option<&CommitMeta> {
        self.meta.get(index)
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.list.move_cursor(delta);
    }

    /// Overwrite the tag of one commit. Merging the first commit has nothing
    /// to merge into and leaves its tag unchanged.
    pub fn set_tag(&mut self, index: usize, tag: ActionTag) {
        if index == 0 && tag == ActionTag::MergeIntoPrevious {
            return;
        }
        if let Some(meta) = self.meta.get_mut(index) {
            meta.tag = tag;
        }
    }

    /// Open the inline editor on one commit. Forces its tag to retitle.
    pub fn begin_edit(&mut self, index: usize) {
        let Some(seed) = self.effective_text(index).map(str::to_string) else {
            return;
        };
        self.set_tag(index, ActionTag::Retitle);
        self.input = InputState::Editing(EditBuffer::new(index, &seed));
    }

    /// Edited message if one was committed, otherwise the original subject.
    pub fn effective_text(&self, index: usize) -> Option<&str> {
        let commit = self.commits.get(index)?;
        let meta = self.meta.get(index)?;
        Some(meta.edited.as_deref().unwrap_or(&commit.message))
    }

    /// Commits per tag, in keyword order.
    pub fn tag_counts(&self) -> Vec<(ActionTag, usize)> {
        ActionTag::ALL
            .iter()
            .map(|&tag| (tag, self.meta.iter().filter(|m| m.tag == tag).count()))
            .collect()
    }

    /// One directive per commit, in original order.
    pub fn directives(&self) -> Vec<Directive> {
        self.commits
            .iter()
            .zip(&self.meta)
            .map(|(commit, meta)| {
                let text = meta.edited.clone().unwrap_or_else(|| commit.message.clone());
                Directive {
                    tag: meta.tag,
                    id: commit.short_hash.clone(),
                    edited: text != commit.message,
                    text,
                }
            })
            .collect()
    }

    pub fn confirm(&self) -> EditorOutcome {
        Outcome::Confirmed(self.directives())
    }

    pub fn cancel(&self) -> EditorOutcome {
        Outcome::Cancelled
    }

    fn apply(&mut self, command: EditorCommand) -> Option<EditorOutcome> {
        let cursor = self.list.cursor();
        match command {
            EditorCommand::Move(delta) => self.move_cursor(delta),
            EditorCommand::SetTag(tag) => self.set_tag(cursor, tag),
            EditorCommand::BeginEdit => self.begin_edit(cursor),
            EditorCommand::Confirm => return Some(self.confirm()),
            EditorCommand::Cancel => return Some(self.cancel()),
        }
        None
    }

    fn finish_edit(&mut self, step: EditStep) {
        match step {
            EditStep::Continue => return,
            EditStep::Commit { target, text } => {
                if let Some(meta) = self.meta.get_mut(target) {
                    meta.edited = Some(text);
                }
            }
            EditStep::Cancel => {}
        }
        self.input = InputState::Browsing;
    }
}

impl Session for CommitEditor {
    type Outcome = EditorOutcome;

    fn list(&self) -> &ListState {
        &self.list
    }

    fn list_mut(&mut self) -> &mut ListState {
        &mut self.list
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<EditorOutcome> {
        match &mut self.input {
            InputState::Editing(buffer) => {
                let step = buffer.handle(edit_key(key));
                self.finish_edit(step);
                None
            }
            InputState::Browsing => editor_command(key).and_then(|command| self.apply(command)),
        }
    }

    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.input {
            InputState::Browsing => BROWSE_HINTS,
            InputState::Editing(_) => EDIT_HINTS,
        }
    }

    fn item_spans(
        &self,
        index: usize,
        _label: &str,
        _indent: usize,
        is_cursor: bool,
        theme: &Theme,
    ) -> Vec<Span<'static>> {
        let (Some(commit), Some(meta)) = (self.commits.get(index), self.meta.get(index)) else {
            return Vec::new();
        };
        match &self.input {
            InputState::Editing(buffer) if buffer.target() == index => {
                commit_item_spans(commit, meta.tag, buffer.text(), true, is_cursor, theme)
            }
            _ => {
                let text = meta.edited.as_deref().unwrap_or(&commit.message);
                commit_item_spans(commit, meta.tag, text, false, is_cursor, theme)
            }
        }
    }

    fn summary_line(&self, theme: &Theme) -> Line<'static> {
        commit_summary(&self.tag_counts(), theme)
    }
}
