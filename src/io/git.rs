use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::model::{ActionTag, ChangeKind, CommitEntry, Directive, FileEntry, has_changes};

/// Error type for git subprocess calls
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("not a git repository: {}", .0.display())]
    NotARepository(PathBuf),
    #[error("could not run git: {0}")]
    Spawn(#[source] io::Error),
    #[error("git {command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
    #[error("HEAD is detached; check out a branch first")]
    DetachedHead,
    #[error("unexpected git output: {0}")]
    Parse(String),
    #[error("rebase stopped; resolve it and run `git rebase --continue` or `git rebase --abort`")]
    RebaseStopped,
    #[error("git rebase failed; the branch was left as it was")]
    RebaseFailed,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A git working tree, addressed by its top-level directory.
#[derive(Debug, Clone)]
pub struct Repo {
    root: PathBuf,
}

impl Repo {
    /// Find the repository containing `dir`.
    pub fn discover(dir: &Path) -> Result<Repo, GitError> {
        let output = Command::new("git")
            .arg("-C")
            .arg(dir)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .map_err(GitError::Spawn)?;
        if !output.status.success() {
            return Err(GitError::NotARepository(dir.to_path_buf()));
        }
        let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
        tracing::debug!(root = %root, "found repository");
        Ok(Repo {
            root: PathBuf::from(root),
        })
    }

    fn git(&self, args: &[&str]) -> Result<String, GitError> {
        tracing::debug!(?args, "git");
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(args)
            .output()
            .map_err(GitError::Spawn)?;
        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    pub fn current_branch(&self) -> Result<String, GitError> {
        let branch = self.git(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        match branch.trim() {
            "HEAD" => Err(GitError::DetachedHead),
            name => Ok(name.to_string()),
        }
    }

    /// Branch `branch` was started from: `glyph.branch.<name>.parent` from
    /// git config, else `default`.
    pub fn parent_branch(&self, branch: &str, default: &str) -> Result<String, GitError> {
        let key = format!("glyph.branch.{}.parent", branch);
        match self.git(&["config", "--get", &key]) {
            Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
            Ok(_) | Err(GitError::CommandFailed { .. }) => Ok(default.to_string()),
            Err(e) => Err(e),
        }
    }

    /// Record `parent` as the branch `branch` was started from.
    pub fn set_parent_branch(&self, branch: &str, parent: &str) -> Result<(), GitError> {
        let key = format!("glyph.branch.{}.parent", branch);
        self.git(&["config", &key, parent])?;
        Ok(())
    }

    /// Work-tree changes not yet staged, including untracked files, sorted
    /// by path.
    pub fn unstaged_files(&self) -> Result<Vec<FileEntry>, GitError> {
        let out = self.git(&["status", "--porcelain=v1", "-z", "--untracked-files=all"])?;
        parse_porcelain(&out)
    }

    pub fn merge_base(&self, a: &str, b: &str) -> Result<String, GitError> {
        Ok(self.git(&["merge-base", a, b])?.trim().to_string())
    }

    /// Commits on `branch` that are not on `parent`, oldest first.
    pub fn branch_commits(&self, branch: &str, parent: &str) -> Result<Vec<CommitEntry>, GitError> {
        let range = format!("{}..{}", parent, branch);
        let out = self.git(&["log", "--reverse", "--format=%h%x00%H%x00%s", &range])?;
        parse_log(&out)
    }

    pub fn stage(&self, paths: &[&str]) -> Result<(), GitError> {
        if paths.is_empty() {
            return Ok(());
        }
        let mut args = vec!["add", "--"];
        args.extend_from_slice(paths);
        self.git(&args)?;
        Ok(())
    }

    /// Throw away the work-tree change to one file. Untracked files are
    /// deleted.
    pub fn discard(&self, entry: &FileEntry) -> Result<(), GitError> {
        match entry.kind {
            ChangeKind::Added => self.git(&["clean", "-f", "--", &entry.path])?,
            _ => self.git(&["checkout", "--", &entry.path])?,
        };
        Ok(())
    }

    /// Rewrite the commits after `base` according to `directives`. Returns
    /// `false` without touching the repository when nothing would change.
    pub fn apply_rebase(&self, base: &str, directives: &[Directive]) -> Result<bool, GitError> {
        if !has_changes(directives) {
            return Ok(false);
        }

        let scratch = tempfile::TempDir::new()?;
        for (i, directive) in directives.iter().enumerate() {
            if directive.edited {
                fs::write(
                    message_path(scratch.path(), i),
                    format!("{}\n", directive.text),
                )?;
            }
        }
        let todo = scratch.path().join("git-rebase-todo");
        fs::write(&todo, render_rebase_todo(directives, scratch.path()))?;

        tracing::info!(base, commits = directives.len(), "running interactive rebase");
        let status = Command::new("git")
            .arg("-C")
            .arg(&self.root)
            .args(["rebase", "-i", base])
            .stdout(io::stderr())
            .env(
                "GIT_SEQUENCE_EDITOR",
                format!("cp {}", shell_quote(&todo.to_string_lossy())),
            )
            .status()
            .map_err(GitError::Spawn)?;
        if !status.success() {
            return Err(if self.rebase_in_progress()? {
                GitError::RebaseStopped
            } else {
                GitError::RebaseFailed
            });
        }
        Ok(true)
    }

    /// Whether an interactive rebase is waiting to be continued or aborted.
    fn rebase_in_progress(&self) -> Result<bool, GitError> {
        let dir = self.git(&["rev-parse", "--git-path", "rebase-merge"])?;
        Ok(self.root.join(dir.trim()).is_dir())
    }
}

/// Parse `git status --porcelain=v1 -z` into work-tree changes.
pub fn parse_porcelain(out: &str) -> Result<Vec<FileEntry>, GitError> {
    let mut fields = out.split('\0').filter(|f| !f.is_empty());
    let mut files = Vec::new();

    while let Some(field) = fields.next() {
        let (Some(status), Some(path)) = (field.get(..2), field.get(3..)) else {
            return Err(GitError::Parse(format!("status entry {:?}", field)));
        };
        let mut columns = status.chars();
        let (Some(index), Some(worktree)) = (columns.next(), columns.next()) else {
            return Err(GitError::Parse(format!("status entry {:?}", field)));
        };
        // Renames and copies carry the source path as the next field
        if matches!(index, 'R' | 'C') || matches!(worktree, 'R' | 'C') {
            fields.next();
        }

        let kind = match (index, worktree) {
            ('?', '?') => ChangeKind::Added,
            (_, 'M' | 'U') => ChangeKind::Modified,
            (_, 'D') => ChangeKind::Deleted,
            (_, 'A' | 'C') => ChangeKind::Added,
            (_, 'R') => ChangeKind::Renamed,
            (_, 'T') => ChangeKind::TypeChanged,
            _ => continue,
        };
        files.push(FileEntry::new(path, kind));
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Parse `git log --format=%h%x00%H%x00%s` output.
pub fn parse_log(out: &str) -> Result<Vec<CommitEntry>, GitError> {
    out.lines()
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut parts = line.splitn(3, '\0');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(short), Some(full), Some(subject)) => {
                    Ok(CommitEntry::new(short, full, subject))
                }
                _ => Err(GitError::Parse(format!("log line {:?}", line))),
            }
        })
        .collect()
}

/// Todo list for `git rebase -i`. Kept commits with an edited message are
/// picked and then amended from a message file in `message_dir`.
pub fn render_rebase_todo(directives: &[Directive], message_dir: &Path) -> String {
    let mut out = String::new();
    for (i, directive) in directives.iter().enumerate() {
        let amend = directive.edited
            && matches!(directive.tag, ActionTag::Keep | ActionTag::Retitle);
        let verb = if amend {
            ActionTag::Keep.rebase_verb()
        } else {
            directive.tag.rebase_verb()
        };
        out.push_str(&format!("{} {} {}\n", verb, directive.id, directive.text));
        if amend {
            out.push_str(&format!(
                "exec git commit --amend --allow-empty-message -F {}\n",
                shell_quote(&message_path(message_dir, i).to_string_lossy())
            ));
        }
    }
    out
}

fn message_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("message-{}.txt", index))
}

/// Single-quote a string for `sh`.
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
