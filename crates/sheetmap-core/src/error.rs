//! Error types for sheetmap-core

use std::path::PathBuf;

use crate::builder::resolve::Unresolved;

/// Result type for sheetmap-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a configuration tree
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested root type is not in the type source
    #[error("Root type not found: {type_name}")]
    RootTypeNotFound { type_name: String },

    /// The root type carries no root marker
    #[error("Type {type_name} is not marked as a schema root")]
    MissingRootMarker { type_name: String },

    /// A collection field does not have exactly one element type
    #[error(
        "Cannot resolve element type of {field}: {container} has {params} type parameters, expected 1"
    )]
    AmbiguousElementType {
        field: String,
        container: String,
        params: usize,
    },

    /// A collection field whose element type is itself a collection
    #[error("Nested collection {declared} on {field} is not supported")]
    NestedCollection { field: String, declared: String },

    /// A field refers to a type that has no descriptor
    #[error("Type {type_name} referenced by {field} is not described")]
    UnknownType { field: String, type_name: String },

    /// Cell expansion revisited a type or exceeded the depth limit
    #[error("Unresolvable recursion at depth {depth}: {path}")]
    UnresolvableRecursion { path: String, depth: usize },

    /// Configuration file not found at expected path
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    // Transparent wrappers for underlying errors
    /// Metadata error from sheetmap-meta
    #[error(transparent)]
    Meta(#[from] sheetmap_meta::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    /// Attach the identity of the offending field to a resolver failure.
    pub fn element_type(field: impl Into<String>, unresolved: Unresolved) -> Self {
        let field = field.into();
        match unresolved {
            Unresolved::Ambiguous { container, params } => Error::AmbiguousElementType {
                field,
                container,
                params,
            },
            Unresolved::Nested { declared } => Error::NestedCollection { field, declared },
        }
    }
}
