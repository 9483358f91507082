//! Check command: build every root type and report failures

use std::path::Path;

use colored::Colorize;
use sheetmap_core::{BuildOptions, SchemaBuilder};

use super::load_catalog;
use crate::error::{CliError, Result};

/// Run the check command
pub fn run_check(catalog_path: &Path, root: Option<&str>, options: BuildOptions) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let roots: Vec<&str> = match root {
        Some(name) => vec![name],
        None => catalog.roots().map(|def| def.name.as_str()).collect(),
    };
    if roots.is_empty() {
        return Err(CliError::user(format!(
            "No root types in {}",
            catalog_path.display()
        )));
    }

    let builder = SchemaBuilder::with_options(&catalog, options);
    let mut failed = 0;
    for name in &roots {
        match builder.build(name) {
            Ok(config) => println!(
                "{} {} ({} sheets, {} cells)",
                "ok".green().bold(),
                name,
                config.sheets.len(),
                config.cell_count()
            ),
            Err(e) => {
                failed += 1;
                println!("{} {}: {}", "FAIL".red().bold(), name, e);
            }
        }
    }

    if failed > 0 {
        return Err(CliError::user(format!(
            "{failed} of {} schemas failed",
            roots.len()
        )));
    }
    Ok(())
}
