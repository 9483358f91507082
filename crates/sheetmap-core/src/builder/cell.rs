//! Cell nodes

use sheetmap_meta::{CellMarker, FieldDescriptor, TypeDescriptor, TypeSource};

use super::{SchemaBuilder, Trail, build_convertors, build_validators, field_id};
use crate::Result;
use crate::tree::CellConfig;

impl<S: TypeSource + ?Sized> SchemaBuilder<'_, S> {
    /// Build a cell for every cell-marked field of `owner`, in field order.
    pub(super) fn build_cells(
        &self,
        owner: &dyn TypeDescriptor,
        trail: &mut Trail,
    ) -> Result<Vec<CellConfig>> {
        let mut cells = Vec::new();
        for field in owner.fields() {
            if let Some(marker) = &field.cell {
                cells.push(self.build_cell(owner, field, marker, trail)?);
            }
        }
        Ok(cells)
    }

    fn build_cell(
        &self,
        owner: &dyn TypeDescriptor,
        field: &FieldDescriptor,
        marker: &CellMarker,
        trail: &mut Trail,
    ) -> Result<CellConfig> {
        let cells = if marker.kind.is_leaf() {
            Vec::new()
        } else {
            let field_id = field_id(owner, field);
            let element = self.element_descriptor(&field_id, &field.declared_type)?;
            trail.enter(&field_id, element.name(), self.options.max_depth)?;
            let cells = self.build_cells(element, trail)?;
            trail.leave();
            cells
        };

        tracing::debug!(
            owner = owner.name(),
            field = %field.name,
            kind = %marker.kind,
            children = cells.len(),
            "Built cell"
        );

        Ok(CellConfig {
            field_name: field.name.clone(),
            name: marker.name.clone(),
            kind: marker.kind,
            bounds: marker.region(),
            position_processor: marker.position_processor.clone(),
            mapping_processor: marker.mapping_processor.clone(),
            on_missing: marker.on_missing.clone(),
            cells,
            validators: build_validators(&marker.validators),
            convertors: build_convertors(&marker.convertors),
        })
    }
}
