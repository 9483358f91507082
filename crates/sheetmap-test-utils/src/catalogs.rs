//! Sample catalogs.
//!
//! Each scenario comes in two forms: a [`TypeCatalog`] built in code and the
//! equivalent TOML definition file text, so loader and builder tests can
//! exercise the same shapes.

use sheetmap_meta::{
    CellKind, CellMarker, ConvertorKind, FieldDescriptor, Region, SheetKind, SheetMarker,
    TypeCatalog, TypeDef, TypeExpr, ValidatorKind,
};

/// Order workbook with one tabular sheet, a leaf cell and a region list.
///
/// ```text
/// Workbook (root "Quarterly report")
///   orders: Vec<Order>   sheet "Orders" at 1:0, tabular
/// Order
///   id: u64              cell "Id", validators required + regex
///   customer: String     cell "Customer", convertor trim
///   lines: Vec<Line>     cell "Lines", region-list [2,0 -> 4,0]
/// Line
///   sku: String          cell "SKU"
///   qty: u32             cell "Qty"
/// ```
pub fn workbook() -> TypeCatalog {
    build(vec![
        TypeDef::new("Workbook")
            .with_root("Quarterly report")
            .field(
                FieldDescriptor::new("orders", TypeExpr::vec_of("Order")).with_sheet(
                    SheetMarker::new("Orders")
                        .at(1, 0)
                        .with_kind(SheetKind::Tabular),
                ),
            )
            .field(FieldDescriptor::new("notes", TypeExpr::named("String"))),
        TypeDef::new("Order")
            .field(
                FieldDescriptor::new("id", TypeExpr::named("u64")).with_cell(
                    CellMarker::new("Id")
                        .validator(ValidatorKind::Required, "")
                        .validator(ValidatorKind::Regex, "^[0-9]+$"),
                ),
            )
            .field(
                FieldDescriptor::new("customer", TypeExpr::named("String")).with_cell(
                    CellMarker::new("Customer")
                        .with_region(Region::single(1, 0))
                        .convertor(ConvertorKind::Trim, ""),
                ),
            )
            .field(
                FieldDescriptor::new("lines", TypeExpr::vec_of("Line")).with_cell(
                    CellMarker::new("Lines")
                        .with_kind(CellKind::RegionList)
                        .with_region(Region::new(2, 0, 4, 0)),
                ),
            ),
        TypeDef::new("Line")
            .field(
                FieldDescriptor::new("sku", TypeExpr::named("String"))
                    .with_cell(CellMarker::new("SKU")),
            )
            .field(
                FieldDescriptor::new("qty", TypeExpr::named("u32")).with_cell(
                    CellMarker::new("Qty")
                        .with_region(Region::single(1, 0))
                        .convertor(ConvertorKind::Number, "u32"),
                ),
            ),
    ])
}

/// TOML definition file equivalent to [`workbook`].
pub const WORKBOOK_TOML: &str = r#"
[[types]]
name = "Workbook"
root = { name = "Quarterly report" }

[[types.fields]]
name = "orders"
type = "Vec<Order>"
sheet = { name = "Orders", start_line = 1, start_column = 0, kind = "tabular" }

[[types.fields]]
name = "notes"
type = "String"

[[types]]
name = "Order"

[[types.fields]]
name = "id"
type = "u64"

[types.fields.cell]
name = "Id"
validators = [{ kind = "required" }, { kind = "regex", param = "^[0-9]+$" }]

[[types.fields]]
name = "customer"
type = "String"

[types.fields.cell]
name = "Customer"
start_x = 1
end_x = 1
convertors = [{ kind = "trim" }]

[[types.fields]]
name = "lines"
type = "Vec<Line>"
cell = { name = "Lines", kind = "region-list", start_x = 2, end_x = 4 }

[[types]]
name = "Line"

[[types.fields]]
name = "sku"
type = "String"
cell = { name = "SKU" }

[[types.fields]]
name = "qty"
type = "u32"

[types.fields.cell]
name = "Qty"
start_x = 1
end_x = 1
convertors = [{ kind = "number", param = "u32" }]
"#;

/// Two-sheet root whose second sheet nests a region three levels deep.
///
/// ```text
/// Ledger (root "Ledger")
///   summary: Summary         sheet "Summary", fixed
///   entries: Vec<Entry>      sheet "Entries" at 2:0, tabular
/// Summary
///   total: f64               cell "Total"
/// Entry
///   date: String             cell "Date"
///   split: Split             cell "Split", region
/// Split
///   account: String          cell "Account"
///   parts: Vec<Part>         cell "Parts", region-list
/// Part
///   amount: f64              cell "Amount"
/// ```
pub fn nested_regions() -> TypeCatalog {
    build(vec![
        TypeDef::new("Ledger")
            .with_root("Ledger")
            .field(
                FieldDescriptor::new("summary", TypeExpr::named("Summary"))
                    .with_sheet(SheetMarker::new("Summary")),
            )
            .field(
                FieldDescriptor::new("entries", TypeExpr::vec_of("Entry")).with_sheet(
                    SheetMarker::new("Entries")
                        .at(2, 0)
                        .with_kind(SheetKind::Tabular),
                ),
            ),
        TypeDef::new("Summary").field(
            FieldDescriptor::new("total", TypeExpr::named("f64"))
                .with_cell(CellMarker::new("Total")),
        ),
        TypeDef::new("Entry")
            .field(
                FieldDescriptor::new("date", TypeExpr::named("String"))
                    .with_cell(CellMarker::new("Date").convertor(ConvertorKind::Date, "%Y-%m-%d")),
            )
            .field(
                FieldDescriptor::new("split", TypeExpr::named("Split")).with_cell(
                    CellMarker::new("Split")
                        .with_kind(CellKind::Region)
                        .with_region(Region::new(1, 0, 3, 0)),
                ),
            ),
        TypeDef::new("Split")
            .field(
                FieldDescriptor::new("account", TypeExpr::named("String"))
                    .with_cell(CellMarker::new("Account")),
            )
            .field(
                FieldDescriptor::new("parts", TypeExpr::vec_of("Part")).with_cell(
                    CellMarker::new("Parts")
                        .with_kind(CellKind::RegionList)
                        .with_region(Region::new(1, 0, 2, 0))
                        .with_on_missing("skip"),
                ),
            ),
        TypeDef::new("Part").field(
            FieldDescriptor::new("amount", TypeExpr::named("f64")).with_cell(
                CellMarker::new("Amount")
                    .validator(ValidatorKind::Range, "0..")
                    .convertor(ConvertorKind::Number, "f64"),
            ),
        ),
    ])
}

/// A region whose element type leads back to itself.
///
/// ```text
/// Tree (root "Tree")
///   nodes: Vec<Node>     sheet "Nodes"
/// Node
///   label: String        cell "Label"
///   children: Vec<Node>  cell "Children", region-list
/// ```
pub fn recursive() -> TypeCatalog {
    build(vec![
        TypeDef::new("Tree").with_root("Tree").field(
            FieldDescriptor::new("nodes", TypeExpr::vec_of("Node"))
                .with_sheet(SheetMarker::new("Nodes")),
        ),
        TypeDef::new("Node")
            .field(
                FieldDescriptor::new("label", TypeExpr::named("String"))
                    .with_cell(CellMarker::new("Label")),
            )
            .field(
                FieldDescriptor::new("children", TypeExpr::vec_of("Node"))
                    .with_cell(CellMarker::new("Children").with_kind(CellKind::RegionList)),
            ),
    ])
}

/// TOML definition file equivalent to [`recursive`].
pub const RECURSIVE_TOML: &str = r#"
[[types]]
name = "Tree"
root = { name = "Tree" }

[[types.fields]]
name = "nodes"
type = "Vec<Node>"
sheet = { name = "Nodes" }

[[types]]
name = "Node"

[[types.fields]]
name = "label"
type = "String"
cell = { name = "Label" }

[[types.fields]]
name = "children"
type = "Vec<Node>"
cell = { name = "Children", kind = "region-list" }
"#;

/// A sheet declared on a container with two type parameters.
pub fn ambiguous() -> TypeCatalog {
    build(vec![
        TypeDef::new("Index").with_root("Index").field(
            FieldDescriptor::new(
                "entries",
                TypeExpr::generic("HashSet", [TypeExpr::named("Entry"), TypeExpr::named("Hasher")]),
            )
            .with_sheet(SheetMarker::new("Entries")),
        ),
        TypeDef::new("Entry").field(
            FieldDescriptor::new("key", TypeExpr::named("String"))
                .with_cell(CellMarker::new("Key")),
        ),
    ])
}

/// TOML definition file equivalent to [`ambiguous`].
pub const AMBIGUOUS_TOML: &str = r#"
[[types]]
name = "Index"
root = { name = "Index" }

[[types.fields]]
name = "entries"
type = "HashSet<Entry, Hasher>"
sheet = { name = "Entries" }

[[types]]
name = "Entry"

[[types.fields]]
name = "key"
type = "String"
cell = { name = "Key" }
"#;

/// A chain of `depth` region cells, `Level0` through `Level{depth}`, below
/// a single sheet. Each level also carries `width` leaf cells.
pub fn chain(depth: usize, width: usize) -> TypeCatalog {
    let mut defs = vec![TypeDef::new("Chain").with_root("Chain").field(
        FieldDescriptor::new("levels", TypeExpr::vec_of("Level0"))
            .with_sheet(SheetMarker::new("Levels")),
    )];

    for level in 0..=depth {
        let mut def = TypeDef::new(format!("Level{level}"));
        for column in 0..width {
            let x = i32::try_from(column).unwrap_or(i32::MAX);
            let marker = CellMarker::new(format!("V{column}")).with_region(Region::single(x, 0));
            def = def.field(
                FieldDescriptor::new(format!("value{column}"), TypeExpr::named("String"))
                    .with_cell(marker),
            );
        }
        if level < depth {
            def = def.field(
                FieldDescriptor::new("next", TypeExpr::named(format!("Level{}", level + 1)))
                    .with_cell(CellMarker::new("Next").with_kind(CellKind::Region)),
            );
        }
        defs.push(def);
    }

    build(defs)
}

fn build(defs: Vec<TypeDef>) -> TypeCatalog {
    TypeCatalog::from_defs(defs).unwrap_or_else(|e| panic!("invalid sample catalog: {e}"))
}
