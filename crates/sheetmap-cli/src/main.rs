//! sheetmap CLI
//!
//! Builds, checks and lists spreadsheet schemas described in catalog files.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Build {
            catalog,
            root,
            format,
            max_depth,
        } => {
            let options = commands::load_options(config, max_depth)?;
            commands::run_build(&catalog, &root, format, options)
        }
        Commands::Check {
            catalog,
            root,
            max_depth,
        } => {
            let options = commands::load_options(config, max_depth)?;
            commands::run_check(&catalog, root.as_deref(), options)
        }
        Commands::Types { catalog, json } => commands::run_types(&catalog, json),
    }
}
