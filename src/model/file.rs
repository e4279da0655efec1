use serde::Serialize;

/// How a working-tree file differs from the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Modified,
    Added,
    Deleted,
    Renamed,
    TypeChanged,
}

impl ChangeKind {
    /// Single-letter status marker, as `git status --short` prints it
    pub fn letter(self) -> char {
        match self {
            ChangeKind::Modified => 'M',
            ChangeKind::Added => 'A',
            ChangeKind::Deleted => 'D',
            ChangeKind::Renamed => 'R',
            ChangeKind::TypeChanged => 'T',
        }
    }
}

/// A changed file in the working tree. `path` is repo-relative with `/`
/// separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub path: String,
    pub kind: ChangeKind,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, kind: ChangeKind) -> Self {
        FileEntry {
            path: path.into(),
            kind,
        }
    }

    /// Containing directory, or `None` for files at the repository root.
    pub fn directory(&self) -> Option<&str> {
        self.path
            .trim_end_matches('/')
            .rsplit_once('/')
            .map(|(dir, _)| dir)
            .filter(|dir| !dir.is_empty())
    }

    /// Last path component.
    pub fn file_name(&self) -> &str {
        let trimmed = self.path.trim_end_matches('/');
        trimmed.rsplit_once('/').map_or(trimmed, |(_, name)| name)
    }
}
