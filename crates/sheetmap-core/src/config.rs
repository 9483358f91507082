//! Builder configuration
//!
//! Options can be set in code or read from the `[build]` section of a
//! `sheetmap.toml` file:
//!
//! ```toml
//! [build]
//! max_depth = 16
//! collections = ["SmallVec", "ThinVec"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sheetmap_meta::CollectionRegistry;

use crate::{Error, Result};

fn default_max_depth() -> usize {
    64
}

/// Options controlling a schema build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOptions {
    /// Maximum number of nested type expansions below a sheet, the sheet's
    /// own element type included
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Container names treated as collections in addition to the builtins
    #[serde(default)]
    pub collections: Vec<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            collections: Vec::new(),
        }
    }
}

impl BuildOptions {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builtin collection containers plus the configured extras.
    pub fn collection_registry(&self) -> CollectionRegistry {
        let mut registry = CollectionRegistry::with_builtins();
        for name in &self.collections {
            registry.register(name.clone());
        }
        registry
    }
}

/// Contents of a `sheetmap.toml` file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SheetmapConfig {
    #[serde(default)]
    pub build: BuildOptions,
}

impl SheetmapConfig {
    /// Parse configuration from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use sheetmap_core::config::SheetmapConfig;
    ///
    /// let config = SheetmapConfig::parse(r#"
    /// [build]
    /// max_depth = 8
    /// "#).unwrap();
    ///
    /// assert_eq!(config.build.max_depth, 8);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let config: SheetmapConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(?path, "Loading sheetmap config");
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }
}
