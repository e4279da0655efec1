use crossterm::event::{KeyCode, KeyEvent};

use crate::model::ActionTag;
use crate::tui::edit::EditKey;

use super::{is_plain, normalize_key};

/// Actions the commit editor binds to keys while browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    Move(isize),
    SetTag(ActionTag),
    BeginEdit,
    Confirm,
    Cancel,
}

/// Commit editor key table (browsing).
pub fn editor_command(key: KeyEvent) -> Option<EditorCommand> {
    let key = normalize_key(key);
    let plain = is_plain(key.modifiers);
    match key.code {
        KeyCode::Up => Some(EditorCommand::Move(-1)),
        KeyCode::Down => Some(EditorCommand::Move(1)),
        KeyCode::Char('p' | 'P') if plain => Some(EditorCommand::SetTag(ActionTag::Keep)),
        KeyCode::Char('d' | 'D') if plain => Some(EditorCommand::SetTag(ActionTag::Remove)),
        KeyCode::Char('s' | 'S') if plain => {
            Some(EditorCommand::SetTag(ActionTag::MergeIntoPrevious))
        }
        KeyCode::Char('r' | 'R') if plain => Some(EditorCommand::SetTag(ActionTag::Retitle)),
        KeyCode::Right => Some(EditorCommand::BeginEdit),
        KeyCode::Enter => Some(EditorCommand::Confirm),
        KeyCode::Esc => Some(EditorCommand::Cancel),
        _ => None,
    }
}

/// Inline editor key table.
pub fn edit_key(key: KeyEvent) -> EditKey {
    match key.code {
        KeyCode::Enter => EditKey::Commit,
        KeyCode::Esc => EditKey::Cancel,
        KeyCode::Backspace => EditKey::Backspace,
        KeyCode::Char(c) if is_plain(key.modifiers) => EditKey::Insert(c),
        _ => EditKey::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::key;
    use crossterm::event::KeyModifiers;

    #[test]
    fn tag_keys() {
        let cases = [
            ('p', ActionTag::Keep),
            ('d', ActionTag::Remove),
            ('s', ActionTag::MergeIntoPrevious),
            ('r', ActionTag::Retitle),
            ('S', ActionTag::MergeIntoPrevious),
        ];
        for (c, tag) in cases {
            assert_eq!(
                editor_command(key(KeyCode::Char(c))),
                Some(EditorCommand::SetTag(tag)),
                "key {}",
                c
            );
        }
    }

    #[test]
    fn right_arrow_opens_editor() {
        assert_eq!(editor_command(key(KeyCode::Right)), Some(EditorCommand::BeginEdit));
        assert_eq!(editor_command(key(KeyCode::Char(' '))), None);
        assert_eq!(editor_command(key(KeyCode::Tab)), None);
    }

    #[test]
    fn edit_keys() {
        assert_eq!(edit_key(key(KeyCode::Enter)), EditKey::Commit);
        assert_eq!(edit_key(key(KeyCode::Esc)), EditKey::Cancel);
        assert_eq!(edit_key(key(KeyCode::Backspace)), EditKey::Backspace);
        assert_eq!(edit_key(key(KeyCode::Char('p'))), EditKey::Insert('p'));
        assert_eq!(
            edit_key(KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT)),
            EditKey::Insert('X')
        );
        assert_eq!(
            edit_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)),
            EditKey::Ignore
        );
        assert_eq!(edit_key(key(KeyCode::Up)), EditKey::Ignore);
    }
}
