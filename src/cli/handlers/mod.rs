mod add;
mod edit;
mod parent;

pub use add::cmd_add;
pub use edit::cmd_edit;
pub use parent::cmd_parent;

use std::path::PathBuf;

use crate::cli::commands::{Cli, Commands};
use crate::io::config_io;
use crate::io::git::Repo;
use crate::tui::theme::Theme;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let repo = Repo::discover(&start_dir(cli.repo_dir.as_deref())?)?;
    let config = config_io::load_config()?;
    let theme = Theme::from_config(&config.ui);

    match cli.command {
        Commands::Add(args) => cmd_add(&repo, &theme, args, json),
        Commands::Edit(args) => cmd_edit(&repo, &config, &theme, args, json),
        Commands::Parent(args) => cmd_parent(&repo, &config, args, json),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Directory to discover the repository from: `-C` if given, else the cwd.
fn start_dir(override_dir: Option<&str>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match override_dir {
        Some(dir) => Ok(std::fs::canonicalize(dir)
            .map_err(|e| format!("cannot resolve -C path '{}': {}", dir, e))?),
        None => Ok(std::env::current_dir()?),
    }
}
