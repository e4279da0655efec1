use std::io::{self, IsTerminal};
use std::sync::OnceLock;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::text::{Line, Span};

use super::list::ListState;
use super::render;
use super::theme::Theme;
use super::viewport::viewport_height;

/// Error type for running a list session
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    #[error("interactive mode requires a terminal")]
    NotATerminal,
    #[error("nothing to show")]
    NoItems,
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<C, A> {
    /// Enter was pressed; carries the session's result
    Confirmed(C),
    /// A single-item shortcut ended the session immediately
    SingleItemAction(A),
    /// Esc was pressed
    Cancelled,
}

/// An interactive list instance driven by [`run`].
///
/// The loop owns drawing and scrolling; the session owns key handling and
/// how its items look.
pub trait Session {
    type Outcome;

    fn list(&self) -> &ListState;

    fn list_mut(&mut self) -> &mut ListState;

    /// Handle one key press. Returning `Some` ends the session.
    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Outcome>;

    /// `(key, description)` pairs for the help line
    fn key_hints(&self) -> &'static [(&'static str, &'static str)];

    /// Spans for one item row.
    fn item_spans(
        &self,
        index: usize,
        label: &str,
        indent: usize,
        is_cursor: bool,
        theme: &Theme,
    ) -> Vec<Span<'static>>;

    /// Footer line under the list
    fn summary_line(&self, theme: &Theme) -> Line<'static>;
}

/// Where key presses come from
pub trait KeySource {
    /// Whether input is attached to an interactive terminal
    fn is_interactive(&self) -> bool;

    /// Block until the next terminal event.
    fn next_event(&mut self) -> io::Result<Event>;
}

/// Reads events from the real terminal via crossterm.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn is_interactive(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn next_event(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// The stream the list is drawn on. Stdout stays free for the command's
/// printed outcome, so `glyph add --json > out.json` works.
fn ui_output() -> io::Stderr {
    io::stderr()
}

/// Raw mode + alternate screen for the lifetime of the guard. Restoration
/// is best-effort and runs on drop and on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(ui_output(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = execute!(ui_output(), crossterm::cursor::Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            restore_terminal();
            original_hook(panic_info);
        }));
    });
}

/// Run a session on the real terminal until it produces an outcome.
pub fn run<S: Session>(session: &mut S, theme: &Theme) -> Result<S::Outcome, TuiError> {
    let mut keys = TerminalKeys;
    check_preconditions(session, &keys)?;

    tracing::debug!(items = session.list().len(), "starting list session");
    let result = {
        let _guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(ui_output()))?;
        terminal.clear()?;
        run_loop(&mut terminal, &mut keys, session, theme)
    };
    tracing::debug!(ok = result.is_ok(), "list session ended");
    result
}

/// Render/dispatch loop over any backend and key source. The terminal
/// cursor is hidden while the loop runs and shown again on every exit path.
pub fn run_loop<B: Backend, K: KeySource, S: Session>(
    terminal: &mut Terminal<B>,
    keys: &mut K,
    session: &mut S,
    theme: &Theme,
) -> Result<S::Outcome, TuiError> {
    check_preconditions(session, keys)?;

    let _ = terminal.hide_cursor();
    let result = event_loop(terminal, keys, session, theme);
    let _ = terminal.show_cursor();
    result
}

fn check_preconditions<K: KeySource, S: Session>(session: &S, keys: &K) -> Result<(), TuiError> {
    if session.list().is_empty() {
        return Err(TuiError::NoItems);
    }
    if !keys.is_interactive() {
        return Err(TuiError::NotATerminal);
    }
    Ok(())
}

fn event_loop<B: Backend, K: KeySource, S: Session>(
    terminal: &mut Terminal<B>,
    keys: &mut K,
    session: &mut S,
    theme: &Theme,
) -> Result<S::Outcome, TuiError> {
    loop {
        let size = terminal.size()?;
        session.list_mut().set_height(viewport_height(size.height));
        terminal.draw(|frame| render::render(frame, &*session, theme))?;

        if let Event::Key(key) = keys.next_event()?
            && key.kind == KeyEventKind::Press
            && let Some(outcome) = session.handle_key(key)
        {
            return Ok(outcome);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;

    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::model::{ChangeKind, FileEntry};
    use crate::tui::file_picker::FilePicker;
    use crate::tui::render::test_helpers::buffer_to_string;

    /// Replays a fixed list of events; runs dry with an error.
    pub(crate) struct ScriptedKeys {
        pub interactive: bool,
        pub events: VecDeque<Event>,
        pub reads: usize,
    }

    impl ScriptedKeys {
        pub(crate) fn new(codes: &[KeyCode]) -> Self {
            ScriptedKeys {
                interactive: true,
                events: codes
                    .iter()
                    .map(|&code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
                    .collect(),
                reads: 0,
            }
        }
    }

    impl KeySource for ScriptedKeys {
        fn is_interactive(&self) -> bool {
            self.interactive
        }

        fn next_event(&mut self) -> io::Result<Event> {
            self.reads += 1;
            self.events
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }
    }

    fn files(n: usize) -> Vec<FileEntry> {
        (0..n)
            .map(|i| FileEntry::new(format!("src/file{}.rs", i), ChangeKind::Modified))
            .collect()
    }

    fn test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(60, 16)).unwrap()
    }

    #[test]
    fn refuses_non_interactive_input_without_drawing() {
        let mut terminal = test_terminal();
        let mut keys = ScriptedKeys::new(&[KeyCode::Enter]);
        keys.interactive = false;
        let mut picker = FilePicker::new(files(3));

        let result = run_loop(&mut terminal, &mut keys, &mut picker, &Theme::default());

        assert!(matches!(result, Err(TuiError::NotATerminal)));
        assert_eq!(keys.reads, 0);
        assert_eq!(buffer_to_string(terminal.backend().buffer()), "");
    }

    #[test]
    fn refuses_empty_list() {
        let mut terminal = test_terminal();
        let mut keys = ScriptedKeys::new(&[KeyCode::Enter]);
        let mut picker = FilePicker::new(Vec::new());

        let result = run_loop(&mut terminal, &mut keys, &mut picker, &Theme::default());
        assert!(matches!(result, Err(TuiError::NoItems)));
        assert_eq!(keys.reads, 0);
    }

    #[test]
    fn stops_at_first_outcome() {
        let mut terminal = test_terminal();
        let mut keys = ScriptedKeys::new(&[
            KeyCode::Down,
            KeyCode::Char(' '),
            KeyCode::Enter,
            KeyCode::Char('a'),
        ]);
        let mut picker = FilePicker::new(files(3));

        let outcome = run_loop(&mut terminal, &mut keys, &mut picker, &Theme::default()).unwrap();

        assert_eq!(outcome, Outcome::Confirmed(vec![files(3)[1].clone()]));
        assert_eq!(keys.reads, 3);
        assert_eq!(keys.events.len(), 1);
    }

    #[test]
    fn releases_and_non_key_events_do_not_dispatch() {
        let mut terminal = test_terminal();
        let mut release = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        let mut keys = ScriptedKeys::new(&[]);
        keys.events = VecDeque::from(vec![
            Event::Key(release),
            Event::Resize(60, 16),
            Event::FocusGained,
            Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
        ]);
        let mut picker = FilePicker::new(files(2));

        let outcome = run_loop(&mut terminal, &mut keys, &mut picker, &Theme::default()).unwrap();
        assert_eq!(outcome, Outcome::Cancelled);
        assert_eq!(keys.reads, 4);
    }

    #[test]
    fn draws_before_each_read() {
        let mut terminal = test_terminal();
        let mut keys = ScriptedKeys::new(&[KeyCode::Esc]);
        let mut picker = FilePicker::new(files(2));

        run_loop(&mut terminal, &mut keys, &mut picker, &Theme::default()).unwrap();

        let screen = buffer_to_string(terminal.backend().buffer());
        assert!(screen.contains("src/file0.rs"));
        assert!(screen.contains("0/2 selected"));
    }

    #[test]
    fn exhausted_input_is_an_io_error() {
        let mut terminal = test_terminal();
        let mut keys = ScriptedKeys::new(&[KeyCode::Down]);
        let mut picker = FilePicker::new(files(2));

        let result = run_loop(&mut terminal, &mut keys, &mut picker, &Theme::default());
        assert!(matches!(result, Err(TuiError::Io(_))));
    }

    #[test]
    fn viewport_height_tracks_terminal_size() {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        let mut keys = ScriptedKeys::new(&[KeyCode::Esc]);
        let mut picker = FilePicker::new(files(20));

        run_loop(&mut terminal, &mut keys, &mut picker, &Theme::default()).unwrap();
        // 10 rows minus 6 of chrome is below the floor of 5
        assert_eq!(picker.list().viewport().height, 5);
    }
}
