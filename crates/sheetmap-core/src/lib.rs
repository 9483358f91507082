//! Configuration tree builder for sheetmap
//!
//! This crate turns described types into the configuration tree that
//! spreadsheet readers and writers walk:
//!
//! - **Schema builder**: resolves sheet and cell fields, following
//!   collection element types and nested regions
//! - **Configuration tree**: immutable, ordered [`RootConfig`] /
//!   [`SheetConfig`] / [`CellConfig`] nodes
//! - **Slots**: per-thread or shared publication of the active tree
//! - **Options**: depth limit and extra collection containers, read from
//!   `sheetmap.toml`
//!
//! # Architecture
//!
//! ```text
//!                sheetmap-cli
//!                     |
//!               sheetmap-core
//!                     |
//!               sheetmap-meta
//! ```
//!
//! # Example
//!
//! ```
//! use sheetmap_core::{ConfigSlot, ThreadSlot, build_schema};
//! use sheetmap_meta::{CellMarker, FieldDescriptor, SheetMarker, TypeCatalog, TypeDef, TypeExpr};
//!
//! let catalog = TypeCatalog::from_defs([
//!     TypeDef::new("Report").with_root("Report").field(
//!         FieldDescriptor::new("items", TypeExpr::vec_of("Item"))
//!             .with_sheet(SheetMarker::new("Items").at(1, 0)),
//!     ),
//!     TypeDef::new("Item").field(
//!         FieldDescriptor::new("label", TypeExpr::named("String"))
//!             .with_cell(CellMarker::new("Label")),
//!     ),
//! ])
//! .unwrap();
//!
//! let config = build_schema(&catalog, "Report", &ThreadSlot).unwrap();
//! assert_eq!(config.cell_count(), 1);
//! assert_eq!(ThreadSlot.get(), Some(config));
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod processor;
pub mod slot;
pub mod tree;

pub use builder::{SchemaBuilder, Unresolved, build_schema, resolve_element_type};
pub use config::{BuildOptions, SheetmapConfig};
pub use error::{Error, Result};
pub use processor::{ExistProcessor, Point};
pub use slot::{ConfigSlot, SharedSlot, SlotGuard, ThreadSlot};
pub use tree::{CellConfig, ConvertorConfig, RootConfig, SheetConfig, ValidatorConfig};
