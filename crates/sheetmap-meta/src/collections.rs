//! Known collection containers
//!
//! A field whose declared type is one of these containers is resolved to
//! its element type before its fields are scanned.

use std::collections::HashSet;

use crate::expr::TypeExpr;

const BUILTIN_COLLECTIONS: [&str; 9] = [
    "Vec",
    "VecDeque",
    "LinkedList",
    "HashSet",
    "BTreeSet",
    "IndexSet",
    "List",
    "Set",
    "Collection",
];

/// Registry of container names treated as single-element collections.
#[derive(Debug, Clone)]
pub struct CollectionRegistry {
    known: HashSet<String>,
}

impl CollectionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            known: HashSet::new(),
        }
    }

    /// Create a registry with the built-in collection containers
    ///
    /// Includes: Vec, VecDeque, LinkedList, HashSet, BTreeSet, IndexSet,
    /// List, Set, Collection
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for name in BUILTIN_COLLECTIONS {
            registry.register(name);
        }
        registry
    }

    /// Register an additional container name.
    pub fn register(&mut self, name: impl Into<String>) {
        self.known.insert(name.into());
    }

    /// Check whether the head of `expr` is a known collection container.
    ///
    /// Path-qualified names match on their last segment, so
    /// `std::collections::VecDeque` is a collection.
    pub fn is_collection(&self, expr: &TypeExpr) -> bool {
        self.known.contains(expr.base_name())
    }

    /// List all known containers, sorted alphabetically
    pub fn list_known(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.known.iter().map(String::as_str).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl Default for CollectionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
