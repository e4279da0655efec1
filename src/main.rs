use clap::Parser;
use glyph::cli::commands::Cli;
use glyph::cli::handlers;
use glyph::util::logging;

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
