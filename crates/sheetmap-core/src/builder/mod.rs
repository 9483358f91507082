//! Schema builder
//!
//! Turns described types into a [`RootConfig`] tree:
//!
//! ```text
//! build (root type)
//!   └── build_sheet        one per sheet-marked root field
//!         └── build_cell   one per cell-marked field of the sheet's element type
//!               └── build_cell ...  recursing for non-single-value cells
//! ```
//!
//! A declared type the source describes is used as is, even when its name
//! matches a collection container. Other collection fields are resolved to
//! their element type with [`resolve_element_type`]. Cell expansion
//! keeps a trail of the types being expanded; revisiting a type on the
//! trail, or going deeper than [`BuildOptions::max_depth`], fails with
//! [`Error::UnresolvableRecursion`].

mod cell;
pub mod descriptors;
pub mod resolve;
mod sheet;

use std::sync::Arc;

use sheetmap_meta::{CollectionRegistry, FieldDescriptor, TypeDescriptor, TypeExpr, TypeSource};

use crate::config::BuildOptions;
use crate::slot::ConfigSlot;
use crate::tree::RootConfig;
use crate::{Error, Result};

pub use descriptors::{build_convertors, build_validators};
pub use resolve::{Unresolved, resolve_element_type};

/// Builds configuration trees from a [`TypeSource`].
///
/// # Example
///
/// ```
/// use sheetmap_core::SchemaBuilder;
/// use sheetmap_meta::{CellMarker, FieldDescriptor, SheetMarker, TypeCatalog, TypeDef, TypeExpr};
///
/// let catalog = TypeCatalog::from_defs([
///     TypeDef::new("Book").with_root("Book").field(
///         FieldDescriptor::new("rows", TypeExpr::vec_of("Row"))
///             .with_sheet(SheetMarker::new("Rows")),
///     ),
///     TypeDef::new("Row").field(
///         FieldDescriptor::new("id", TypeExpr::named("u64")).with_cell(CellMarker::new("Id")),
///     ),
/// ])
/// .unwrap();
///
/// let root = SchemaBuilder::new(&catalog).build("Book").unwrap();
/// assert_eq!(root.sheets[0].cells[0].name, "Id");
/// ```
pub struct SchemaBuilder<'a, S: TypeSource + ?Sized> {
    source: &'a S,
    options: BuildOptions,
    collections: CollectionRegistry,
}

impl<'a, S: TypeSource + ?Sized> SchemaBuilder<'a, S> {
    /// Create a builder with default options.
    pub fn new(source: &'a S) -> Self {
        Self::with_options(source, BuildOptions::default())
    }

    pub fn with_options(source: &'a S, options: BuildOptions) -> Self {
        let collections = options.collection_registry();
        Self {
            source,
            options,
            collections,
        }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build the tree for the named root type.
    pub fn build(&self, root_type: &str) -> Result<RootConfig> {
        let root = self
            .source
            .lookup(root_type)
            .ok_or_else(|| Error::RootTypeNotFound {
                type_name: root_type.to_string(),
            })?;
        self.build_descriptor(root)
    }

    /// Build the tree for a root descriptor that need not be in the source.
    pub fn build_descriptor(&self, root: &dyn TypeDescriptor) -> Result<RootConfig> {
        let marker = root
            .root_marker()
            .ok_or_else(|| Error::MissingRootMarker {
                type_name: root.name().to_string(),
            })?;

        let mut sheets = Vec::new();
        for field in root.fields() {
            if let Some(sheet) = &field.sheet {
                sheets.push(self.build_sheet(root, field, sheet)?);
            }
        }

        tracing::debug!(root = root.name(), sheets = sheets.len(), "Built schema");
        Ok(RootConfig {
            name: marker.name.clone(),
            type_name: root.name().to_string(),
            sheets,
        })
    }

    /// Build the tree and publish it to `slot`.
    ///
    /// The slot is only written when the build succeeds; the new tree
    /// replaces whatever the slot held.
    pub fn build_and_publish<C: ConfigSlot + ?Sized>(
        &self,
        root_type: &str,
        slot: &C,
    ) -> Result<Arc<RootConfig>> {
        let config = Arc::new(self.build(root_type)?);
        slot.set(Arc::clone(&config));
        Ok(config)
    }

    /// Resolve a field's declared type to the descriptor of its element type.
    fn element_descriptor(
        &self,
        field_id: &str,
        declared: &TypeExpr,
    ) -> Result<&'a dyn TypeDescriptor> {
        let source: &'a S = self.source;
        if let Some(described) = source.lookup(&declared.to_string()) {
            return Ok(described);
        }

        let element = resolve_element_type(declared, &self.collections)
            .map_err(|unresolved| Error::element_type(field_id, unresolved))?;

        let type_name = element.to_string();
        source.lookup(&type_name).ok_or_else(|| Error::UnknownType {
            field: field_id.to_string(),
            type_name,
        })
    }
}

/// Build the tree for `root_type` with default options and publish it to
/// `slot`.
pub fn build_schema<S, C>(source: &S, root_type: &str, slot: &C) -> Result<Arc<RootConfig>>
where
    S: TypeSource + ?Sized,
    C: ConfigSlot + ?Sized,
{
    SchemaBuilder::new(source).build_and_publish(root_type, slot)
}

/// `Type.field` identity used in errors and logs.
fn field_id(owner: &dyn TypeDescriptor, field: &FieldDescriptor) -> String {
    format!("{}.{}", owner.name(), field.name)
}

/// Types being expanded below the current sheet, outermost first.
#[derive(Debug, Default)]
struct Trail {
    steps: Vec<(String, String)>,
}

impl Trail {
    /// Push `type_name`, reached through `field_id`, onto the trail.
    fn enter(&mut self, field_id: &str, type_name: &str, max_depth: usize) -> Result<()> {
        let revisits = self.steps.iter().any(|(_, seen)| seen == type_name);
        if revisits || self.steps.len() >= max_depth {
            let path = self
                .steps
                .iter()
                .map(|(field, ty)| format!("{field}: {ty}"))
                .chain(std::iter::once(format!("{field_id}: {type_name}")))
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(Error::UnresolvableRecursion {
                path,
                depth: self.steps.len() + 1,
            });
        }
        self.steps.push((field_id.to_string(), type_name.to_string()));
        Ok(())
    }

    fn leave(&mut self) {
        self.steps.pop();
    }
}
