//! Tests for catalog definition files and the DefinitionLoader

use pretty_assertions::assert_eq;
use sheetmap_meta::{
    CellKind, DefinitionLoader, Error, SheetKind, TypeDescriptor, TypeExpr, TypeSource,
    ValidatorKind,
};
use std::fs;
use tempfile::TempDir;

const WORKBOOK_TOML: &str = r#"
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
start_x = 0
validators = [{ kind = "required" }, { kind = "regex", param = "^[0-9]+$" }]

[[types.fields]]
name = "lines"
type = "Vec<Line>"
cell = { name = "Lines", kind = "region-list", start_x = 1, end_x = 4 }
"#;

const WORKBOOK_JSON: &str = r#"
{
  "types": [
    {
      "name": "Workbook",
      "root": { "name": "Quarterly report" },
      "fields": [
        {
          "name": "orders",
          "type": "Vec<Order>",
          "sheet": { "name": "Orders", "start_line": 1, "start_column": 0, "kind": "tabular" }
        },
        { "name": "notes", "type": "String" }
      ]
    },
    {
      "name": "Order",
      "fields": [
        {
          "name": "id",
          "type": "u64",
          "cell": {
            "name": "Id",
            "start_x": 0,
            "validators": [{ "kind": "required" }, { "kind": "regex", "param": "^[0-9]+$" }]
          }
        },
        {
          "name": "lines",
          "type": "Vec<Line>",
          "cell": { "name": "Lines", "kind": "region-list", "start_x": 1, "end_x": 4 }
        }
      ]
    }
  ]
}
"#;

const WORKBOOK_YAML: &str = r#"
types:
  - name: Workbook
    root:
      name: Quarterly report
    fields:
      - name: orders
        type: Vec<Order>
        sheet:
          name: Orders
          start_line: 1
          start_column: 0
          kind: tabular
      - name: notes
        type: String
  - name: Order
    fields:
      - name: id
        type: u64
        cell:
          name: Id
          start_x: 0
          validators:
            - kind: required
            - kind: regex
              param: "^[0-9]+$"
      - name: lines
        type: Vec<Line>
        cell:
          name: Lines
          kind: region-list
          start_x: 1
          end_x: 4
"#;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_toml_definitions() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "workbook.toml", WORKBOOK_TOML);

    let catalog = DefinitionLoader::new().load(&path).unwrap();
    assert_eq!(catalog.len(), 2);

    let workbook = catalog.lookup("Workbook").unwrap();
    assert_eq!(workbook.root_marker().unwrap().name, "Quarterly report");
    let fields: Vec<_> = workbook.fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fields, vec!["orders", "notes"]);

    let sheet = workbook.fields()[0].sheet.as_ref().unwrap();
    assert_eq!(sheet.kind, SheetKind::Tabular);
    assert_eq!(sheet.start_line, 1);
    assert!(workbook.fields()[1].sheet.is_none());

    let order = catalog.get("Order").unwrap();
    let id = order.fields[0].cell.as_ref().unwrap();
    let kinds: Vec<_> = id.validators.iter().map(|v| v.kind).collect();
    assert_eq!(kinds, vec![ValidatorKind::Required, ValidatorKind::Regex]);
    assert_eq!(order.fields[1].declared_type, TypeExpr::vec_of("Line"));
    assert_eq!(
        order.fields[1].cell.as_ref().unwrap().kind,
        CellKind::RegionList
    );
}

#[test]
fn test_all_formats_load_the_same_catalog() {
    let temp = TempDir::new().unwrap();
    let loader = DefinitionLoader::new();

    let from_toml = loader.load(&write(&temp, "a.toml", WORKBOOK_TOML)).unwrap();
    let from_json = loader.load(&write(&temp, "b.json", WORKBOOK_JSON)).unwrap();
    let from_yaml = loader.load(&write(&temp, "c.yaml", WORKBOOK_YAML)).unwrap();

    assert_eq!(from_toml, from_json);
    assert_eq!(from_toml, from_yaml);
}

#[test]
fn test_load_dir_merges_files_and_skips_broken_ones() {
    let temp = TempDir::new().unwrap();
    write(&temp, "10-workbook.toml", WORKBOOK_TOML);
    write(
        &temp,
        "20-line.yaml",
        "types:\n  - name: Line\n    fields:\n      - name: sku\n        type: String\n",
    );
    write(&temp, "30-broken.toml", "[[types]\nname = ");
    write(&temp, "README.md", "not a definition file");

    let catalog = DefinitionLoader::new().load(temp.path()).unwrap();
    let names: Vec<_> = catalog.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["Workbook", "Order", "Line"]);
}

#[test]
fn test_load_dir_rejects_duplicate_types_across_files() {
    let temp = TempDir::new().unwrap();
    write(&temp, "a.toml", WORKBOOK_TOML);
    write(&temp, "b.json", WORKBOOK_JSON);

    let err = DefinitionLoader::new().load_dir(temp.path()).unwrap_err();
    assert!(matches!(err, Error::DuplicateType { .. }), "got {err:?}");
}

#[test]
fn test_load_file_rejects_invalid_type_expression() {
    let temp = TempDir::new().unwrap();
    let path = write(
        &temp,
        "bad.toml",
        "[[types]]\nname = \"A\"\n[[types.fields]]\nname = \"x\"\ntype = \"Vec<\"\n",
    );

    let err = DefinitionLoader::new().load_file(&path).unwrap_err();
    assert!(matches!(err, Error::DefinitionParse { .. }), "got {err:?}");
}

#[test]
fn test_load_file_rejects_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "catalog.ini", "types = []");

    let err = DefinitionLoader::new().load_file(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat { ref extension } if extension == "ini"));
}
