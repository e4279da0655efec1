mod commit_editor;
mod file_picker;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub use commit_editor::{EditorCommand, edit_key, editor_command};
pub use file_picker::{PickerCommand, picker_command};

/// Fold Shift+letter into the uppercase letter so bindings can match on
/// the character alone.
pub fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}

/// Plain or shifted key, i.e. something that types a character.
fn is_plain(modifiers: KeyModifiers) -> bool {
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

#[cfg(test)]
pub(crate) fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}
