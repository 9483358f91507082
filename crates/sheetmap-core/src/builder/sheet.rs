//! Sheet nodes

use sheetmap_meta::{FieldDescriptor, SheetMarker, TypeDescriptor, TypeSource};

use super::{SchemaBuilder, Trail, field_id};
use crate::Result;
use crate::tree::SheetConfig;

impl<S: TypeSource + ?Sized> SchemaBuilder<'_, S> {
    /// Build one sheet from a sheet-marked field of the root type.
    ///
    /// The field's element type is scanned for cells; each sheet starts a
    /// fresh recursion trail.
    pub(super) fn build_sheet(
        &self,
        root: &dyn TypeDescriptor,
        field: &FieldDescriptor,
        marker: &SheetMarker,
    ) -> Result<SheetConfig> {
        let field_id = field_id(root, field);
        let element = self.element_descriptor(&field_id, &field.declared_type)?;

        let mut trail = Trail::default();
        trail.enter(&field_id, element.name(), self.options.max_depth)?;
        let cells = self.build_cells(element, &mut trail)?;
        trail.leave();

        tracing::debug!(
            sheet = %marker.name,
            field = %field_id,
            element = element.name(),
            cells = cells.len(),
            "Built sheet"
        );

        Ok(SheetConfig {
            field_name: field.name.clone(),
            name: marker.name.clone(),
            start_line: marker.start_line,
            start_column: marker.start_column,
            kind: marker.kind,
            on_missing: marker.on_missing.clone(),
            cells,
        })
    }
}
