//! Error types for sheetmap-meta

use std::path::PathBuf;

/// Result type for metadata operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while describing or loading schema metadata
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} definitions at {path}: {message}")]
    DefinitionParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported definition format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Invalid type expression '{input}': {message}")]
    InvalidTypeExpr { input: String, message: String },

    #[error("Type already registered: {name}")]
    DuplicateType { name: String },

    #[error("Invalid {kind} kind: {value}")]
    InvalidKind { kind: &'static str, value: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
