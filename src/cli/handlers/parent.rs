use crate::cli::commands::ParentArgs;
use crate::cli::output::ParentJson;
use crate::io::git::Repo;
use crate::model::Config;

/// `glyph parent`: show the current branch's parent, or record a new one.
pub fn cmd_parent(
    repo: &Repo,
    config: &Config,
    args: ParentArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let branch = repo.current_branch()?;

    let (parent, text) = match args.branch {
        Some(parent) => {
            repo.set_parent_branch(&branch, &parent)?;
            tracing::info!(%branch, %parent, "recorded parent branch");
            let text = format!("Set parent of {} to {}.", branch, parent);
            (parent, text)
        }
        None => {
            let parent = repo.parent_branch(&branch, &config.default_parent)?;
            let text = format!("Parent of {}: {}", branch, parent);
            (parent, text)
        }
    };

    if json {
        let out = ParentJson {
            branch: &branch,
            parent: &parent,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{}", text);
    }
    Ok(())
}
