//! Command implementations for sheetmap-cli

pub mod build;
pub mod check;
pub mod types;

use std::path::Path;

use sheetmap_core::{BuildOptions, SheetmapConfig};
use sheetmap_meta::{DefinitionLoader, TypeCatalog};

use crate::error::Result;

pub use build::run_build;
pub use check::run_check;
pub use types::run_types;

/// Build options from the config file, if any, with a CLI depth override.
pub fn load_options(config: Option<&Path>, max_depth: Option<usize>) -> Result<BuildOptions> {
    let mut options = match config {
        Some(path) => SheetmapConfig::load(path)?.build,
        None => BuildOptions::default(),
    };
    if let Some(depth) = max_depth {
        options = options.with_max_depth(depth);
    }
    Ok(options)
}

/// Load a catalog from a definition file or a directory of them.
pub fn load_catalog(path: &Path) -> Result<TypeCatalog> {
    let catalog = DefinitionLoader::new().load(path)?;
    tracing::debug!(?path, types = catalog.len(), "Loaded catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_options_defaults() {
        assert_eq!(load_options(None, None).unwrap(), BuildOptions::default());
    }

    #[test]
    fn test_cli_depth_overrides_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sheetmap.toml");
        fs::write(&path, "[build]\nmax_depth = 3\ncollections = [\"SmallVec\"]\n").unwrap();

        let options = load_options(Some(&path), None).unwrap();
        assert_eq!(options.max_depth, 3);

        let options = load_options(Some(&path), Some(9)).unwrap();
        assert_eq!(options.max_depth, 9);
        assert_eq!(options.collections, vec!["SmallVec".to_string()]);
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(load_options(Some(&dir.path().join("absent.toml")), None).is_err());
    }
}
