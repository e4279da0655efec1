use unicode_segmentation::UnicodeSegmentation;

/// Top-level dispatch state of a session that supports inline editing.
/// Matched before anything else on every key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputState {
    #[default]
    Browsing,
    Editing(EditBuffer),
}

/// Keys the inline editor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Insert(char),
    Backspace,
    Commit,
    Cancel,
    Ignore,
}

/// Result of feeding one key to an [`EditBuffer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditStep {
    /// Still editing
    Continue,
    /// Write `text` into item `target`
    Commit { target: usize, text: String },
    /// Leave the item untouched
    Cancel,
}

/// Single-line text buffer bound to one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    target: usize,
    text: String,
}

impl EditBuffer {
    /// Start editing `target`, seeded with its current effective text.
    pub fn new(target: usize, seed: &str) -> Self {
        EditBuffer {
            target,
            text: seed.to_string(),
        }
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn handle(&mut self, key: EditKey) -> EditStep {
        match key {
            EditKey::Insert(c) => {
                if !c.is_control() {
                    self.text.push(c);
                }
                EditStep::Continue
            }
            EditKey::Backspace => {
                // Remove a whole grapheme so combining marks go with their base
                if let Some((start, _)) = self.text.grapheme_indices(true).next_back() {
                    self.text.truncate(start);
                }
                EditStep::Continue
            }
            EditKey::Commit => EditStep::Commit {
                target: self.target,
                text: std::mem::take(&mut self.text),
            },
            EditKey::Cancel => EditStep::Cancel,
            EditKey::Ignore => EditStep::Continue,
        }
    }
}
