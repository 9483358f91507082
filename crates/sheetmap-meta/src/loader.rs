//! Loader for catalog definition files
//!
//! A catalog definition file lists described types under `types`. The
//! format is detected from the file extension:
//!
//! - `.toml` -> TOML
//! - `.json` -> JSON
//! - `.yaml`, `.yml` -> YAML
//!
//! ```toml
//! [[types]]
//! name = "Workbook"
//! root = { name = "Quarterly report" }
//!
//! [[types.fields]]
//! name = "orders"
//! type = "Vec<Order>"
//! sheet = { name = "Orders", start_line = 1, kind = "tabular" }
//!
//! [[types]]
//! name = "Order"
//!
//! [[types.fields]]
//! name = "id"
//! type = "u64"
//! cell = { name = "Id", start_x = 0 }
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::TypeCatalog;
use crate::descriptor::TypeDef;
use crate::error::{Error, Result};

/// Serialization format of a definition file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Toml,
    Json,
    Yaml,
}

impl DefinitionFormat {
    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        match extension.to_lowercase().as_str() {
            "toml" => Ok(DefinitionFormat::Toml),
            "json" => Ok(DefinitionFormat::Json),
            "yaml" | "yml" => Ok(DefinitionFormat::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }
}

impl fmt::Display for DefinitionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionFormat::Toml => write!(f, "TOML"),
            DefinitionFormat::Json => write!(f, "JSON"),
            DefinitionFormat::Yaml => write!(f, "YAML"),
        }
    }
}

/// On-disk shape of a definition file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct DefinitionFile {
    #[serde(default)]
    types: Vec<TypeDef>,
}

/// Loads type catalogs from definition files.
#[derive(Debug, Default)]
pub struct DefinitionLoader;

impl DefinitionLoader {
    /// Create a new DefinitionLoader
    pub fn new() -> Self {
        Self
    }

    /// Load a catalog from a file, or from every definition file in a
    /// directory.
    pub fn load(&self, path: &Path) -> Result<TypeCatalog> {
        if path.is_dir() {
            self.load_dir(path)
        } else {
            self.load_file(path)
        }
    }

    /// Load a catalog from a single definition file.
    pub fn load_file(&self, path: &Path) -> Result<TypeCatalog> {
        let format = DefinitionFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let catalog = self.parse(&content, format, path)?;
        tracing::debug!(path = %path.display(), types = catalog.len(), "Loaded definitions");
        Ok(catalog)
    }

    /// Parse definitions from a string. `origin` is only used in errors.
    pub fn parse(
        &self,
        content: &str,
        format: DefinitionFormat,
        origin: &Path,
    ) -> Result<TypeCatalog> {
        let parse_error = |message: String| Error::DefinitionParse {
            path: origin.to_path_buf(),
            format: format.to_string(),
            message,
        };

        let file: DefinitionFile = match format {
            DefinitionFormat::Toml => {
                toml::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
            DefinitionFormat::Json => {
                serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
            DefinitionFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
            }
        };

        TypeCatalog::from_defs(file.types)
    }

    /// Load and merge every definition file in a directory.
    ///
    /// Files are read in file-name order. Files that fail to parse are
    /// skipped with a warning; a type name defined in two files is an error.
    /// A missing directory yields an empty catalog.
    pub fn load_dir(&self, dir: &Path) -> Result<TypeCatalog> {
        let mut catalog = TypeCatalog::new();

        if !dir.exists() {
            return Ok(catalog);
        }

        let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
        let mut paths: Vec<PathBuf> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && DefinitionFormat::from_path(path).is_ok())
            .collect();
        paths.sort();

        for path in paths {
            match self.load_file(&path) {
                Ok(loaded) => catalog.merge(loaded)?,
                Err(e) => {
                    // Log warning but continue loading other files
                    tracing::warn!("Failed to load {:?}: {}", path, e);
                }
            }
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DefinitionFormat::from_path(Path::new("a.toml")).unwrap(),
            DefinitionFormat::Toml
        );
        assert_eq!(
            DefinitionFormat::from_path(Path::new("a.JSON")).unwrap(),
            DefinitionFormat::Json
        );
        assert_eq!(
            DefinitionFormat::from_path(Path::new("a.yml")).unwrap(),
            DefinitionFormat::Yaml
        );
        assert!(matches!(
            DefinitionFormat::from_path(Path::new("a.txt")),
            Err(Error::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_parse_empty_document() {
        let loader = DefinitionLoader::new();
        let catalog = loader
            .parse("", DefinitionFormat::Toml, Path::new("empty.toml"))
            .unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_parse_error_names_origin() {
        let loader = DefinitionLoader::new();
        let err = loader
            .parse("[[types]]\nname = 3\n", DefinitionFormat::Toml, Path::new("bad.toml"))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("bad.toml"), "got: {message}");
        assert!(message.contains("TOML"), "got: {message}");
    }

    #[test]
    fn test_load_from_nonexistent_dir() {
        let loader = DefinitionLoader::new();
        let catalog = loader.load_dir(Path::new("/nonexistent/path")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let loader = DefinitionLoader::new();
        let err = loader.load(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
