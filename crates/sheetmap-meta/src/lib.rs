//! Schema metadata model for sheetmap.
//!
//! This crate describes the metadata a schema root and its nested field
//! types carry: root markers, sheet and cell markers, validator and
//! convertor descriptors. Types are exposed through the [`TypeDescriptor`]
//! capability and collected into a [`TypeCatalog`], either by hand-written
//! registration or by loading a definition file with [`DefinitionLoader`].

pub mod catalog;
pub mod collections;
pub mod descriptor;
pub mod error;
pub mod expr;
pub mod kinds;
pub mod loader;
pub mod marker;

pub use catalog::{TypeCatalog, TypeSource};
pub use collections::CollectionRegistry;
pub use descriptor::{Describe, FieldDescriptor, TypeDef, TypeDescriptor};
pub use error::{Error, Result};
pub use expr::TypeExpr;
pub use kinds::{CellKind, ConvertorKind, ProcessorKind, SheetKind, ValidatorKind};
pub use loader::{DefinitionFormat, DefinitionLoader};
pub use marker::{
    CellMarker, ConvertorDescriptor, Region, RootMarker, SheetMarker, ValidatorDescriptor,
};
