use crossterm::event::{KeyCode, KeyEvent};

use super::{is_plain, normalize_key};

/// Actions the file picker binds to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerCommand {
    Move(isize),
    ToggleSelect,
    ToggleSelectAll,
    ToggleView,
    Discard,
    Confirm,
    Cancel,
}

/// File picker key table.
pub fn picker_command(key: KeyEvent) -> Option<PickerCommand> {
    let key = normalize_key(key);
    let plain = is_plain(key.modifiers);
    match key.code {
        KeyCode::Up => Some(PickerCommand::Move(-1)),
        KeyCode::Down => Some(PickerCommand::Move(1)),
        KeyCode::Char(' ') if plain => Some(PickerCommand::ToggleSelect),
        // `a` and `A` are the same binding
        KeyCode::Char('a' | 'A') if plain => Some(PickerCommand::ToggleSelectAll),
        KeyCode::Char('d' | 'D') if plain => Some(PickerCommand::Discard),
        KeyCode::Tab => Some(PickerCommand::ToggleView),
        KeyCode::Enter => Some(PickerCommand::Confirm),
        KeyCode::Esc => Some(PickerCommand::Cancel),
        _ => None,
    }
}
