use crossterm::event::KeyEvent;
use ratatui::text::{Line, Span};

use crate::model::FileEntry;

use super::app::{Outcome, Session};
use super::input::{PickerCommand, picker_command};
use super::list::{ListItem, ListState};
use super::render::file_rows::{file_item_spans, file_summary};
use super::selection::Selection;
use super::theme::Theme;

/// Confirmed files in index order, or the single file to discard.
pub type PickerOutcome = Outcome<Vec<FileEntry>, FileEntry>;

const KEY_HINTS: &[(&str, &str)] = &[
    ("\u{2191}\u{2193}", "navigate"),
    ("Space", "select"),
    ("a", "all"),
    ("d", "discard"),
    ("Tab", "view"),
    ("Enter", "confirm"),
    ("Esc", "cancel"),
];

impl ListItem for FileEntry {
    fn display(&self) -> &str {
        &self.path
    }

    fn group_key(&self) -> Option<&str> {
        self.directory()
    }

    fn leaf_label(&self) -> &str {
        self.file_name()
    }
}

/// Multi-select picker over changed files.
#[derive(Debug, Clone)]
pub struct FilePicker {
    files: Vec<FileEntry>,
    list: ListState,
    selection: Selection,
}

impl FilePicker {
    pub fn new(files: Vec<FileEntry>) -> Self {
        let list = ListState::new(&files);
        let selection = Selection::new(files.len());
        FilePicker {
            files,
            list,
            selection,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.list.move_cursor(delta);
    }

    pub fn toggle_selection(&mut self, index: usize) {
        self.selection.toggle(index);
    }

    pub fn toggle_select_all(&mut self) {
        self.selection.toggle_all();
    }

    pub fn toggle_view_mode(&mut self) {
        self.list.toggle_view(&self.files);
    }

    /// Discard shortcut for one file. The selection is left as it is.
    pub fn discard_one(&self, index: usize) -> Option<PickerOutcome> {
        self.files
            .get(index)
            .map(|entry| Outcome::SingleItemAction(entry.clone()))
    }

    /// Selected files in ascending original order.
    pub fn confirm(&self) -> PickerOutcome {
        Outcome::Confirmed(
            self.selection
                .sorted()
                .into_iter()
                .map(|i| self.files[i].clone())
                .collect(),
        )
    }

    pub fn cancel(&self) -> PickerOutcome {
        Outcome::Cancelled
    }

    fn apply(&mut self, command: PickerCommand) -> Option<PickerOutcome> {
        let cursor = self.list.cursor();
        match command {
            PickerCommand::Move(delta) => self.move_cursor(delta),
            PickerCommand::ToggleSelect => self.toggle_selection(cursor),
            PickerCommand::ToggleSelectAll => self.toggle_select_all(),
            PickerCommand::ToggleView => self.toggle_view_mode(),
            PickerCommand::Discard => return self.discard_one(cursor),
            PickerCommand::Confirm => return Some(self.confirm()),
            PickerCommand::Cancel => return Some(self.cancel()),
        }
        None
    }
}

impl Session for FilePicker {
    type Outcome = PickerOutcome;

    fn list(&self) -> &ListState {
        &self.list
    }

    fn list_mut(&mut self) -> &mut ListState {
        &mut self.list
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<PickerOutcome> {
        picker_command(key).and_then(|command| self.apply(command))
    }

    fn key_hints(&self) -> &'static [(&'static str, &'static str)] {
        KEY_HINTS
    }

    fn item_spans(
        &self,
        index: usize,
        label: &str,
        indent: usize,
        is_cursor: bool,
        theme: &Theme,
    ) -> Vec<Span<'static>> {
        match self.files.get(index) {
            Some(entry) => file_item_spans(
                entry,
                label,
                indent,
                self.selection.contains(index),
                is_cursor,
                theme,
            ),
            None => Vec::new(),
        }
    }

    fn summary_line(&self, theme: &Theme) -> Line<'static> {
        file_summary(
            self.selection.count(),
            self.files.len(),
            self.list.view(),
            theme,
        )
    }
}
