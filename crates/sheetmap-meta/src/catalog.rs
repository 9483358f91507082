//! Type catalog
//!
//! The catalog maps type names to their descriptors so that the schema
//! builder can follow a field's declared type to the type's own fields.

use std::collections::HashMap;

use crate::descriptor::{Describe, TypeDef, TypeDescriptor};
use crate::error::{Error, Result};

/// Lookup of type descriptors by name.
pub trait TypeSource {
    fn lookup(&self, name: &str) -> Option<&dyn TypeDescriptor>;
}

/// Registry of described types, kept in registration order.
///
/// # Example
///
/// ```
/// use sheetmap_meta::{TypeCatalog, TypeDef, TypeSource};
///
/// let mut catalog = TypeCatalog::new();
/// catalog.register(TypeDef::new("Order")).unwrap();
/// assert!(catalog.lookup("Order").is_some());
/// assert!(catalog.register(TypeDef::new("Order")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: Vec<TypeDef>,
    by_name: HashMap<String, usize>,
}

impl TypeCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from definitions, rejecting duplicate names.
    pub fn from_defs(defs: impl IntoIterator<Item = TypeDef>) -> Result<Self> {
        let mut catalog = Self::new();
        for def in defs {
            catalog.register(def)?;
        }
        Ok(catalog)
    }

    /// Register a type definition.
    ///
    /// Type names are unique; registering a name twice is an error and
    /// leaves the first definition in place.
    pub fn register(&mut self, def: TypeDef) -> Result<()> {
        if self.by_name.contains_key(&def.name) {
            return Err(Error::DuplicateType { name: def.name });
        }
        self.by_name.insert(def.name.clone(), self.types.len());
        self.types.push(def);
        Ok(())
    }

    /// Register a Rust type through its [`Describe`] impl.
    pub fn register_type<T: Describe>(&mut self) -> Result<()> {
        self.register(T::describe())
    }

    /// Move every definition of `other` into this catalog.
    ///
    /// Fails without modifying `self` if any name is already registered.
    pub fn merge(&mut self, other: TypeCatalog) -> Result<()> {
        if let Some(def) = other.types.iter().find(|def| self.contains(&def.name)) {
            return Err(Error::DuplicateType {
                name: def.name.clone(),
            });
        }
        for def in other.types {
            self.register(def)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.by_name.get(name).map(|&idx| &self.types[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// All definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.iter()
    }

    /// Definitions carrying a root marker, in registration order.
    pub fn roots(&self) -> impl Iterator<Item = &TypeDef> {
        self.types.iter().filter(|def| def.is_root())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeSource for TypeCatalog {
    fn lookup(&self, name: &str) -> Option<&dyn TypeDescriptor> {
        self.get(name).map(|def| def as &dyn TypeDescriptor)
    }
}

impl PartialEq for TypeCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.types == other.types
    }
}
