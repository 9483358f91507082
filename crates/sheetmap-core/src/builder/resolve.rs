//! Element type resolution
//!
//! Sheet and region fields are usually collections of records. Before a
//! field's type can be scanned for cells, a collection type is replaced by
//! its single element type.

use sheetmap_meta::{CollectionRegistry, TypeExpr};

/// Why a declared type has no usable element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    /// Raw container, or a container with more than one type parameter
    Ambiguous { container: String, params: usize },
    /// Collection whose element is itself a collection
    Nested { declared: String },
}

/// Return the element type of a collection, or `declared` itself for any
/// other type.
///
/// Exactly one type parameter is required; `Vec`, `Vec<>` and
/// `HashSet<A, B>` are all ambiguous.
pub fn resolve_element_type<'t>(
    declared: &'t TypeExpr,
    collections: &CollectionRegistry,
) -> Result<&'t TypeExpr, Unresolved> {
    if !collections.is_collection(declared) {
        return Ok(declared);
    }

    match declared.args() {
        [element] if collections.is_collection(element) => Err(Unresolved::Nested {
            declared: declared.to_string(),
        }),
        [element] => Ok(element),
        args => Err(Unresolved::Ambiguous {
            container: declared.name().to_string(),
            params: args.len(),
        }),
    }
}
