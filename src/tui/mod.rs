pub mod app;
pub mod commit_editor;
pub mod edit;
pub mod file_picker;
pub mod grouping;
pub mod input;
pub mod list;
pub mod render;
pub mod selection;
pub mod theme;
pub mod viewport;

pub use app::{Outcome, Session, TuiError, run};
pub use commit_editor::{CommitEditor, EditorOutcome};
pub use file_picker::{FilePicker, PickerOutcome};
