//! Reader-side extension points
//!
//! The schema builder only records processor names. Readers resolve those
//! names to implementations; an [`ExistProcessor`] decides whether a value
//! read at some point of a region counts as present.

use serde::{Deserialize, Serialize};

use crate::tree::CellConfig;

/// Absolute cell coordinates within a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Decides whether a cell value exists.
///
/// `cells` are the siblings being read, `cell` the one under test,
/// `region_values` the raw values of the enclosing region by row.
pub trait ExistProcessor: Send + Sync {
    fn exists(
        &self,
        cells: &[CellConfig],
        cell: &CellConfig,
        point: Point,
        region_values: &[Vec<String>],
        value: &str,
    ) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetmap_meta::{CellKind, ProcessorKind, Region};

    /// Present when the value's row has any non-blank entry.
    struct RowHasValue;

    impl ExistProcessor for RowHasValue {
        fn exists(
            &self,
            _cells: &[CellConfig],
            _cell: &CellConfig,
            point: Point,
            region_values: &[Vec<String>],
            value: &str,
        ) -> bool {
            let row = usize::try_from(point.y)
                .ok()
                .and_then(|y| region_values.get(y));
            match row {
                Some(row) => row.iter().any(|v| !v.trim().is_empty()),
                None => !value.trim().is_empty(),
            }
        }
    }

    fn cell() -> CellConfig {
        CellConfig {
            field_name: "qty".into(),
            name: "Qty".into(),
            kind: CellKind::SingleValue,
            bounds: Region::single(1, 0),
            position_processor: ProcessorKind::default(),
            mapping_processor: ProcessorKind::default(),
            on_missing: ProcessorKind::default(),
            cells: Vec::new(),
            validators: Vec::new(),
            convertors: Vec::new(),
        }
    }

    #[test]
    fn test_point_defaults_to_origin() {
        assert_eq!(Point::default(), Point::new(0, 0));
    }

    #[test]
    fn test_processor_behind_trait_object() {
        let processor: Box<dyn ExistProcessor> = Box::new(RowHasValue);
        let cell = cell();
        let cells = [cell.clone()];
        let rows = vec![
            vec!["A-1".to_string(), String::new()],
            vec!["  ".to_string(), String::new()],
        ];

        assert!(processor.exists(&cells, &cell, Point::new(1, 0), &rows, ""));
        assert!(!processor.exists(&cells, &cell, Point::new(1, 1), &rows, ""));
        assert!(processor.exists(&cells, &cell, Point::new(1, 9), &rows, "x"));
    }
}
