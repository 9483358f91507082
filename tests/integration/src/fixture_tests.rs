//! Tests over the catalog files in test-fixtures/

use pretty_assertions::assert_eq;
use rstest::rstest;
use sheetmap_core::{Error, SchemaBuilder};
use sheetmap_meta::{DefinitionLoader, TypeCatalog};
use sheetmap_test_utils::catalogs;
use std::path::PathBuf;

/// Path to test-fixtures/catalogs (relative to the workspace root).
fn catalogs_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // tests/integration -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures/catalogs")
}

fn load(relative: &str) -> TypeCatalog {
    let path = catalogs_dir().join(relative);
    DefinitionLoader::new()
        .load(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", path.display(), e))
}

// ==========================================================================
// Fixture Validity Tests
// ==========================================================================

#[test]
fn test_workbook_fixture_matches_code_catalog() {
    assert_eq!(load("workbook.toml"), catalogs::workbook());
}

#[test]
fn test_ledger_split_across_formats_matches_code_catalog() {
    // 01-ledger.yaml holds the root types, 02-entries.json the nested records.
    assert_eq!(load("ledger"), catalogs::nested_regions());
}

#[test]
fn test_broken_directory_skips_unparseable_file() {
    let catalog = load("broken");
    let names: Vec<_> = catalog.iter().map(|def| def.name.as_str()).collect();
    // notes.yaml is truncated and skipped
    assert_eq!(names, vec!["Index", "Entry", "Tree", "Node"]);
}

#[test]
fn test_top_level_directory_does_not_recurse() {
    let catalog = load("");
    assert_eq!(catalog, catalogs::workbook());
}

// ==========================================================================
// Build Tests
// ==========================================================================

#[rstest]
#[case("workbook.toml", "Workbook", 5)]
#[case("ledger", "Ledger", 6)]
fn test_fixture_builds(#[case] fixture: &str, #[case] root: &str, #[case] cells: usize) {
    let catalog = load(fixture);
    let config = SchemaBuilder::new(&catalog).build(root).unwrap();
    assert_eq!(config.cell_count(), cells);
}

#[test]
fn test_broken_roots_fail_with_distinct_errors() {
    let catalog = load("broken");
    let builder = SchemaBuilder::new(&catalog);

    assert!(matches!(
        builder.build("Index"),
        Err(Error::AmbiguousElementType { params: 2, .. })
    ));
    assert!(matches!(
        builder.build("Tree"),
        Err(Error::UnresolvableRecursion { depth: 2, .. })
    ));
}
