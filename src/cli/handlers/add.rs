use crate::cli::commands::AddArgs;
use crate::cli::output::{AddJson, format_paths, plural};
use crate::io::git::Repo;
use crate::model::FileEntry;
use crate::tui::theme::Theme;
use crate::tui::{self, FilePicker, Outcome};

/// `glyph add`: pick files to stage, or discard the one under the cursor.
pub fn cmd_add(
    repo: &Repo,
    theme: &Theme,
    args: AddArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = repo.unstaged_files()?;
    if files.is_empty() {
        return report(json, "empty", &[], "No unstaged changes found.");
    }

    let mut picker = FilePicker::new(files);
    let outcome = tui::run(&mut picker, theme)?;

    match outcome {
        Outcome::Cancelled => {
            tracing::info!("file picker cancelled");
            report(json, "cancelled", &[], "Cancelled.")
        }
        Outcome::Confirmed(chosen) if chosen.is_empty() => {
            report(json, "selected", &[], "No files selected.")
        }
        Outcome::Confirmed(chosen) if args.print => {
            report(json, "selected", &chosen, &format_paths(&chosen))
        }
        Outcome::Confirmed(chosen) => {
            let paths: Vec<&str> = chosen.iter().map(|f| f.path.as_str()).collect();
            tracing::info!(files = paths.len(), "staging");
            repo.stage(&paths)?;
            let message = format!("Staged {}.", plural(chosen.len(), "file"));
            report(json, "staged", &chosen, &message)
        }
        Outcome::SingleItemAction(entry) if args.print => {
            let message = format!("discard {}", entry.path);
            report(json, "discard", std::slice::from_ref(&entry), &message)
        }
        Outcome::SingleItemAction(entry) => {
            tracing::info!(path = %entry.path, "discarding");
            repo.discard(&entry)?;
            let message = format!("Discarded {}.", entry.path);
            report(json, "discarded", std::slice::from_ref(&entry), &message)
        }
    }
}

fn report(
    json: bool,
    outcome: &'static str,
    files: &[FileEntry],
    text: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let out = AddJson {
            outcome,
            files: files.iter().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}
