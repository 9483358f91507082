//! Marker metadata attached to types and fields
//!
//! - [`RootMarker`] tags a type as a schema root.
//! - [`SheetMarker`] tags a root field as a sheet.
//! - [`CellMarker`] tags a field of a sheet (or region) element type as a cell.
//!
//! # Example TOML
//!
//! ```toml
//! [[types.fields]]
//! name = "lines"
//! type = "Vec<Line>"
//!
//! [types.fields.cell]
//! name = "Lines"
//! kind = "region-list"
//! start_x = 0
//! start_y = 4
//! end_x = 5
//! end_y = 4
//! validators = [{ kind = "required" }]
//! ```

use serde::{Deserialize, Serialize};

use crate::kinds::{CellKind, ConvertorKind, ProcessorKind, SheetKind, ValidatorKind};

/// Marks a type as a schema root and gives it a declared name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootMarker {
    pub name: String,
}

impl RootMarker {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Sheet metadata on a root field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetMarker {
    /// Sheet name in the document
    pub name: String,
    /// First line holding data
    #[serde(default)]
    pub start_line: u32,
    /// First column holding data
    #[serde(default)]
    pub start_column: u32,
    #[serde(default)]
    pub kind: SheetKind,
    /// Processor consulted when a row is absent
    #[serde(default)]
    pub on_missing: ProcessorKind,
}

impl SheetMarker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start_line: 0,
            start_column: 0,
            kind: SheetKind::default(),
            on_missing: ProcessorKind::default(),
        }
    }

    pub fn at(mut self, start_line: u32, start_column: u32) -> Self {
        self.start_line = start_line;
        self.start_column = start_column;
        self
    }

    pub fn with_kind(mut self, kind: SheetKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_on_missing(mut self, processor: impl Into<ProcessorKind>) -> Self {
        self.on_missing = processor.into();
        self
    }
}

/// Bounds of a cell, relative to the start position of its sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Region {
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
}

impl Region {
    pub fn new(start_x: i32, start_y: i32, end_x: i32, end_y: i32) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }

    /// A region covering exactly one coordinate.
    pub fn single(x: i32, y: i32) -> Self {
        Self::new(x, y, x, y)
    }
}

/// A validator declared on a cell: kind plus an opaque parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorDescriptor {
    pub kind: ValidatorKind,
    #[serde(default)]
    pub param: String,
}

/// A convertor declared on a cell: kind plus an opaque parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertorDescriptor {
    pub kind: ConvertorKind,
    #[serde(default)]
    pub param: String,
}

/// Cell metadata on a field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellMarker {
    /// Cell name in the document
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: CellKind,
    #[serde(default)]
    pub start_x: i32,
    #[serde(default)]
    pub start_y: i32,
    #[serde(default)]
    pub end_x: i32,
    #[serde(default)]
    pub end_y: i32,
    #[serde(default)]
    pub position_processor: ProcessorKind,
    #[serde(default)]
    pub mapping_processor: ProcessorKind,
    #[serde(default)]
    pub on_missing: ProcessorKind,
    /// Validators in application order
    #[serde(default)]
    pub validators: Vec<ValidatorDescriptor>,
    /// Convertors in application order
    #[serde(default)]
    pub convertors: Vec<ConvertorDescriptor>,
}

impl CellMarker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn region(&self) -> Region {
        Region::new(self.start_x, self.start_y, self.end_x, self.end_y)
    }

    pub fn with_kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.start_x = region.start_x;
        self.start_y = region.start_y;
        self.end_x = region.end_x;
        self.end_y = region.end_y;
        self
    }

    pub fn with_position_processor(mut self, processor: impl Into<ProcessorKind>) -> Self {
        self.position_processor = processor.into();
        self
    }

    pub fn with_mapping_processor(mut self, processor: impl Into<ProcessorKind>) -> Self {
        self.mapping_processor = processor.into();
        self
    }

    pub fn with_on_missing(mut self, processor: impl Into<ProcessorKind>) -> Self {
        self.on_missing = processor.into();
        self
    }

    /// Append a validator; validators apply in the order they are added.
    pub fn validator(mut self, kind: ValidatorKind, param: impl Into<String>) -> Self {
        self.validators.push(ValidatorDescriptor {
            kind,
            param: param.into(),
        });
        self
    }

    /// Append a convertor; convertors apply in the order they are added.
    pub fn convertor(mut self, kind: ConvertorKind, param: impl Into<String>) -> Self {
        self.convertors.push(ConvertorDescriptor {
            kind,
            param: param.into(),
        });
        self
    }
}
