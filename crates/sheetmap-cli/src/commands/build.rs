//! Build command: print the configuration tree of one root type

use std::path::Path;

use sheetmap_core::{BuildOptions, RootConfig, SchemaBuilder};

use super::load_catalog;
use crate::cli::OutputFormat;
use crate::error::Result;

/// Run the build command
pub fn run_build(
    catalog_path: &Path,
    root: &str,
    format: OutputFormat,
    options: BuildOptions,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let config = SchemaBuilder::with_options(&catalog, options).build(root)?;
    print!("{}", render(&config, format)?);
    Ok(())
}

/// Render a tree in the requested format, newline-terminated.
pub fn render(config: &RootConfig, format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Outline => config.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Yaml => serde_yaml::to_string(config)?,
        OutputFormat::Toml => toml::to_string(config)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
