use crate::cli::commands::EditArgs;
use crate::cli::output::{EditJson, format_plan, plural};
use crate::io::git::Repo;
use crate::model::{Config, Directive};
use crate::tui::theme::Theme;
use crate::tui::{self, CommitEditor, Outcome};

/// `glyph edit`: plan and apply a rewrite of the current branch.
pub fn cmd_edit(
    repo: &Repo,
    config: &Config,
    theme: &Theme,
    args: EditArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let branch = repo.current_branch()?;
    let parent = match args.parent {
        Some(parent) => parent,
        None => repo.parent_branch(&branch, &config.default_parent)?,
    };
    let base = repo.merge_base(&parent, &branch)?;
    let commits = repo.branch_commits(&branch, &base)?;
    tracing::debug!(%branch, %parent, %base, commits = commits.len(), "loaded branch");

    if commits.is_empty() {
        let message = format!("No commits on {} since {}.", branch, parent);
        return report(json, "empty", None, &[], &message);
    }

    let mut editor = CommitEditor::new(commits);
    let outcome = tui::run(&mut editor, theme)?;

    match outcome {
        Outcome::Cancelled => {
            tracing::info!("commit editor cancelled");
            report(json, "cancelled", None, &[], "Cancelled.")
        }
        Outcome::SingleItemAction(never) => match never {},
        Outcome::Confirmed(directives) if args.print => report(
            json,
            "planned",
            Some(&base),
            &directives,
            &format_plan(&directives),
        ),
        Outcome::Confirmed(directives) => {
            if repo.apply_rebase(&base, &directives)? {
                let message = format!(
                    "Rewrote {} on {}.",
                    plural(directives.len(), "commit"),
                    branch
                );
                report(json, "applied", Some(&base), &directives, &message)
            } else {
                report(json, "unchanged", Some(&base), &directives, "No changes to apply.")
            }
        }
    }
}

fn report(
    json: bool,
    outcome: &'static str,
    base: Option<&str>,
    directives: &[Directive],
    text: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let out = EditJson {
            outcome,
            base,
            directives,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}
