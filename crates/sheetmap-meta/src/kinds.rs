//! Kind tags carried by sheet, cell, validator and convertor metadata
//!
//! Sheet, cell, validator and convertor kinds are closed enumerations.
//! Processor kinds are open identifiers: processors are pluggable and are
//! selected by name when the document is traversed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Layout of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SheetKind {
    /// The sheet maps onto a single record.
    #[default]
    Fixed,
    /// The sheet is a table; each row maps onto one element.
    Tabular,
}

impl FromStr for SheetKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(SheetKind::Fixed),
            "tabular" => Ok(SheetKind::Tabular),
            _ => Err(Error::InvalidKind {
                kind: "sheet",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetKind::Fixed => write!(f, "fixed"),
            SheetKind::Tabular => write!(f, "tabular"),
        }
    }
}

/// Shape of a cell.
///
/// `SingleValue` is the leaf kind: such cells are never expanded into
/// child cells. Every other kind is a composite region whose children come
/// from the cell-tagged fields of the field's element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellKind {
    /// A single value at one coordinate.
    #[default]
    SingleValue,
    /// A rectangular region holding one nested record.
    Region,
    /// A region repeated once per element of a collection.
    RegionList,
}

impl CellKind {
    /// Whether this kind terminates recursive expansion.
    pub fn is_leaf(&self) -> bool {
        matches!(self, CellKind::SingleValue)
    }
}

impl FromStr for CellKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "single-value" => Ok(CellKind::SingleValue),
            "region" => Ok(CellKind::Region),
            "region-list" => Ok(CellKind::RegionList),
            _ => Err(Error::InvalidKind {
                kind: "cell",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellKind::SingleValue => write!(f, "single-value"),
            CellKind::Region => write!(f, "region"),
            CellKind::RegionList => write!(f, "region-list"),
        }
    }
}

/// Validation rule applied to a raw cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidatorKind {
    Required,
    Regex,
    Length,
    Range,
    OneOf,
    Custom,
}

impl FromStr for ValidatorKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "required" => Ok(ValidatorKind::Required),
            "regex" => Ok(ValidatorKind::Regex),
            "length" => Ok(ValidatorKind::Length),
            "range" => Ok(ValidatorKind::Range),
            "one-of" => Ok(ValidatorKind::OneOf),
            "custom" => Ok(ValidatorKind::Custom),
            _ => Err(Error::InvalidKind {
                kind: "validator",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValidatorKind::Required => "required",
            ValidatorKind::Regex => "regex",
            ValidatorKind::Length => "length",
            ValidatorKind::Range => "range",
            ValidatorKind::OneOf => "one-of",
            ValidatorKind::Custom => "custom",
        };
        write!(f, "{s}")
    }
}

/// Conversion applied to a raw cell value before it is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConvertorKind {
    Trim,
    Date,
    Number,
    Boolean,
    Mapping,
    Custom,
}

impl FromStr for ConvertorKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "trim" => Ok(ConvertorKind::Trim),
            "date" => Ok(ConvertorKind::Date),
            "number" => Ok(ConvertorKind::Number),
            "boolean" => Ok(ConvertorKind::Boolean),
            "mapping" => Ok(ConvertorKind::Mapping),
            "custom" => Ok(ConvertorKind::Custom),
            _ => Err(Error::InvalidKind {
                kind: "convertor",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ConvertorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ConvertorKind::Trim => "trim",
            ConvertorKind::Date => "date",
            ConvertorKind::Number => "number",
            ConvertorKind::Boolean => "boolean",
            ConvertorKind::Mapping => "mapping",
            ConvertorKind::Custom => "custom",
        };
        write!(f, "{s}")
    }
}

/// Name of a pluggable processor (position, mapping or on-missing).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessorKind(String);

const DEFAULT_PROCESSOR: &str = "default";

impl ProcessorKind {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the built-in default processor.
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_PROCESSOR
    }
}

impl Default for ProcessorKind {
    fn default() -> Self {
        Self(DEFAULT_PROCESSOR.to_string())
    }
}

impl From<&str> for ProcessorKind {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for ProcessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
