//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// sheetmap - Build spreadsheet cell mappings from schema catalogs
#[derive(Parser, Debug)]
#[command(name = "sheetmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a sheetmap.toml with [build] options
    #[arg(short, long, global = true, env = "SHEETMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Build the configuration tree for a root type and print it
    ///
    /// Examples:
    ///   sheetmap build catalog.toml --root Workbook
    ///   sheetmap build types/ --root Workbook --format json
    Build {
        /// Catalog definition file or directory
        catalog: PathBuf,

        /// Name of the root type
        #[arg(short, long)]
        root: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Outline)]
        format: OutputFormat,

        /// Maximum nested type expansions below a sheet
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Build every root type in a catalog and report failures
    Check {
        /// Catalog definition file or directory
        catalog: PathBuf,

        /// Only check this root type
        #[arg(short, long)]
        root: Option<String>,

        /// Maximum nested type expansions below a sheet
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// List the types in a catalog with their markers
    Types {
        /// Catalog definition file or directory
        catalog: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

/// Output format for `build`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented text outline
    #[default]
    Outline,
    Json,
    Yaml,
    Toml,
}
