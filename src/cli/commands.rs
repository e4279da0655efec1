use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "glyph", about = concat!("glyph v", env!("CARGO_PKG_VERSION"), " - stage files and reshape commits from a terminal list"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print outcomes as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different repository directory
    #[arg(short = 'C', long = "repo-dir", global = true)]
    pub repo_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pick unstaged files to stage (or discard one)
    Add(AddArgs),
    /// Keep, remove, merge or retitle the commits on the current branch
    Edit(EditArgs),
    /// Show or set the parent branch of the current branch
    Parent(ParentArgs),
}

#[derive(Args)]
pub struct AddArgs {
    /// Print the chosen paths instead of staging them
    #[arg(long)]
    pub print: bool,
}

#[derive(Args)]
pub struct EditArgs {
    /// Branch to compare against (default: glyph.branch.<name>.parent, then config)
    #[arg(long)]
    pub parent: Option<String>,
    /// Print the plan instead of rebasing
    #[arg(long)]
    pub print: bool,
}

#[derive(Args)]
pub struct ParentArgs {
    /// Parent branch to record (omit to show the current one)
    pub branch: Option<String>,
}
