pub mod commit;
pub mod config;
pub mod file;

pub use commit::{ActionTag, CommitEntry, Directive, has_changes, render_directives};
pub use config::{Config, UiConfig};
pub use file::{ChangeKind, FileEntry};
