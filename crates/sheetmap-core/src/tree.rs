//! Configuration tree
//!
//! The tree produced by the schema builder. Every node is immutable once
//! built and owns its children; sequence order always mirrors the
//! declaration order of the metadata it was built from, which is the order
//! readers and writers visit cells and apply validators and convertors.

use std::fmt;

use serde::{Deserialize, Serialize};
use sheetmap_meta::{
    CellKind, ConvertorDescriptor, ConvertorKind, ProcessorKind, Region, SheetKind,
    ValidatorDescriptor, ValidatorKind,
};

/// Configuration of a whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootConfig {
    /// Declared name from the root marker
    pub name: String,
    /// Name of the type the tree was built from
    pub type_name: String,
    pub sheets: Vec<SheetConfig>,
}

impl RootConfig {
    /// Find a sheet by the name of the field it was declared on.
    pub fn sheet(&self, field_name: &str) -> Option<&SheetConfig> {
        self.sheets.iter().find(|s| s.field_name == field_name)
    }

    /// Total number of cells at every depth.
    pub fn cell_count(&self) -> usize {
        self.sheets.iter().map(SheetConfig::cell_count).sum()
    }
}

/// Configuration of one sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    pub field_name: String,
    pub name: String,
    pub start_line: u32,
    pub start_column: u32,
    pub kind: SheetKind,
    pub on_missing: ProcessorKind,
    pub cells: Vec<CellConfig>,
}

impl SheetConfig {
    /// Find a top-level cell by field name.
    pub fn cell(&self, field_name: &str) -> Option<&CellConfig> {
        self.cells.iter().find(|c| c.field_name == field_name)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.iter().map(CellConfig::cell_count).sum()
    }
}

/// Configuration of one cell or composite region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellConfig {
    pub field_name: String,
    pub name: String,
    pub kind: CellKind,
    /// Bounds relative to the sheet's start position
    pub bounds: Region,
    pub position_processor: ProcessorKind,
    pub mapping_processor: ProcessorKind,
    pub on_missing: ProcessorKind,
    /// Child cells; always empty for `SingleValue` cells
    pub cells: Vec<CellConfig>,
    pub validators: Vec<ValidatorConfig>,
    pub convertors: Vec<ConvertorConfig>,
}

impl CellConfig {
    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    /// Find a direct child cell by field name.
    pub fn cell(&self, field_name: &str) -> Option<&CellConfig> {
        self.cells.iter().find(|c| c.field_name == field_name)
    }

    /// This cell plus all of its descendants.
    pub fn cell_count(&self) -> usize {
        1 + self.cells.iter().map(CellConfig::cell_count).sum::<usize>()
    }
}

/// A validator to apply to a cell value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    pub kind: ValidatorKind,
    pub param: String,
}

impl ValidatorConfig {
    pub fn new(kind: ValidatorKind, param: impl Into<String>) -> Self {
        Self {
            kind,
            param: param.into(),
        }
    }
}

impl From<&ValidatorDescriptor> for ValidatorConfig {
    fn from(descriptor: &ValidatorDescriptor) -> Self {
        Self::new(descriptor.kind, descriptor.param.clone())
    }
}

/// A convertor to apply to a cell value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertorConfig {
    pub kind: ConvertorKind,
    pub param: String,
}

impl ConvertorConfig {
    pub fn new(kind: ConvertorKind, param: impl Into<String>) -> Self {
        Self {
            kind,
            param: param.into(),
        }
    }
}

impl From<&ConvertorDescriptor> for ConvertorConfig {
    fn from(descriptor: &ConvertorDescriptor) -> Self {
        Self::new(descriptor.kind, descriptor.param.clone())
    }
}

// Outline rendering, one node per line.

impl fmt::Display for RootConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.type_name)?;
        for sheet in &self.sheets {
            sheet.write_outline(f, 1)?;
        }
        Ok(())
    }
}

fn write_processor(f: &mut fmt::Formatter<'_>, label: &str, kind: &ProcessorKind) -> fmt::Result {
    if kind.is_default() {
        Ok(())
    } else {
        write!(f, " {label}={kind}")
    }
}

fn write_param(f: &mut fmt::Formatter<'_>, param: &str) -> fmt::Result {
    if param.is_empty() {
        Ok(())
    } else {
        write!(f, " {param:?}")
    }
}

impl SheetConfig {
    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(
            f,
            "{:indent$}sheet {} {:?} at {}:{} {}",
            "",
            self.field_name,
            self.name,
            self.start_line,
            self.start_column,
            self.kind,
            indent = depth * 2
        )?;
        write_processor(f, "on-missing", &self.on_missing)?;
        writeln!(f)?;
        for cell in &self.cells {
            cell.write_outline(f, depth + 1)?;
        }
        Ok(())
    }
}

impl CellConfig {
    fn write_outline(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let b = &self.bounds;
        write!(
            f,
            "{:indent$}cell {} {:?} {} [{},{} -> {},{}]",
            "",
            self.field_name,
            self.name,
            self.kind,
            b.start_x,
            b.start_y,
            b.end_x,
            b.end_y,
            indent = depth * 2
        )?;
        write_processor(f, "position", &self.position_processor)?;
        write_processor(f, "mapping", &self.mapping_processor)?;
        write_processor(f, "on-missing", &self.on_missing)?;
        writeln!(f)?;

        let inner = (depth + 1) * 2;
        for validator in &self.validators {
            write!(f, "{:inner$}validator {}", "", validator.kind)?;
            write_param(f, &validator.param)?;
            writeln!(f)?;
        }
        for convertor in &self.convertors {
            write!(f, "{:inner$}convertor {}", "", convertor.kind)?;
            write_param(f, &convertor.param)?;
            writeln!(f)?;
        }
        for cell in &self.cells {
            cell.write_outline(f, depth + 1)?;
        }
        Ok(())
    }
}
