//! Type and field descriptors
//!
//! [`TypeDescriptor`] is the capability the schema builder consumes: a type
//! name, an optional root marker and the type's fields in declaration
//! order. [`TypeDef`] is the provided implementation; it can be written by
//! hand, produced by a [`Describe`] impl, or deserialized from a catalog
//! definition file.

use serde::{Deserialize, Serialize};

use crate::expr::TypeExpr;
use crate::marker::{CellMarker, RootMarker, SheetMarker};

/// Structural view of a type's schema metadata.
pub trait TypeDescriptor {
    /// Name other fields use to refer to this type.
    fn name(&self) -> &str;

    /// The root marker, if this type is a schema root.
    fn root_marker(&self) -> Option<&RootMarker>;

    /// Fields in declaration order.
    fn fields(&self) -> &[FieldDescriptor];
}

/// Implemented by Rust types that describe their own schema metadata.
///
/// # Example
///
/// ```
/// use sheetmap_meta::{CellMarker, Describe, FieldDescriptor, TypeDef, TypeExpr};
///
/// struct Line {
///     sku: String,
/// }
///
/// impl Describe for Line {
///     fn describe() -> TypeDef {
///         TypeDef::new("Line").field(
///             FieldDescriptor::new("sku", TypeExpr::named("String"))
///                 .with_cell(CellMarker::new("SKU")),
///         )
///     }
/// }
///
/// assert_eq!(Line::describe().fields.len(), 1);
/// ```
pub trait Describe {
    fn describe() -> TypeDef;
}

/// One field of a described type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub declared_type: TypeExpr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<SheetMarker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell: Option<CellMarker>,
}

impl FieldDescriptor {
    /// A field without markers; it is ignored by the schema builder.
    pub fn new(name: impl Into<String>, declared_type: TypeExpr) -> Self {
        Self {
            name: name.into(),
            declared_type,
            sheet: None,
            cell: None,
        }
    }

    pub fn with_sheet(mut self, marker: SheetMarker) -> Self {
        self.sheet = Some(marker);
        self
    }

    pub fn with_cell(mut self, marker: CellMarker) -> Self {
        self.cell = Some(marker);
        self
    }
}

/// A described type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<RootMarker>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: None,
            fields: Vec::new(),
        }
    }

    /// Mark this type as a schema root with the given declared name.
    pub fn with_root(mut self, name: impl Into<String>) -> Self {
        self.root = Some(RootMarker::new(name));
        self
    }

    /// Append a field; fields keep the order in which they are added.
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn is_root(&self) -> bool {
        self.root.is_some()
    }
}

impl TypeDescriptor for TypeDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn root_marker(&self) -> Option<&RootMarker> {
        self.root.as_ref()
    }

    fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }
}
