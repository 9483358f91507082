//! End-to-end pipeline: definition files -> catalog -> tree -> slot

use assert_fs::prelude::*;
use pretty_assertions::assert_eq;
use sheetmap_core::{
    BuildOptions, ConfigSlot, SchemaBuilder, SharedSlot, SheetmapConfig, ThreadSlot, build_schema,
};
use sheetmap_meta::{DefinitionLoader, TypeDef, TypeDescriptor};
use sheetmap_test_utils::catalogs::{self, RECURSIVE_TOML, WORKBOOK_TOML};
use std::sync::Arc;
use std::thread;

#[test]
fn test_files_to_published_tree() {
    let temp = assert_fs::TempDir::new().unwrap();
    let defs = temp.child("defs");
    defs.child("workbook.toml").write_str(WORKBOOK_TOML).unwrap();
    defs.child("README.md").write_str("not a catalog").unwrap();
    defs.child("workbook.toml").assert(predicates::path::is_file());

    let catalog = DefinitionLoader::new().load(defs.path()).unwrap();
    let slot = SharedSlot::new();
    let config = build_schema(&catalog, "Workbook", &slot).unwrap();

    let expected = SchemaBuilder::new(&catalogs::workbook()).build("Workbook").unwrap();
    assert_eq!(*config, expected);
    assert!(Arc::ptr_eq(&slot.get().unwrap(), &config));
}

#[test]
fn test_config_file_controls_depth() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config_file = temp.child("sheetmap.toml");
    config_file
        .write_str("[build]\nmax_depth = 1\ncollections = [\"Bag\"]\n")
        .unwrap();

    let config = SheetmapConfig::load(config_file.path()).unwrap();
    let catalog = catalogs::workbook();

    let err = SchemaBuilder::with_options(&catalog, config.build.clone())
        .build("Workbook")
        .unwrap_err();
    assert!(err.to_string().starts_with("Unresolvable recursion at depth 2"));

    let relaxed = config.build.with_max_depth(2);
    assert!(SchemaBuilder::with_options(&catalog, relaxed).build("Workbook").is_ok());
}

#[test]
fn test_every_root_in_catalog() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("workbook.toml").write_str(WORKBOOK_TOML).unwrap();
    temp.child("tree.toml").write_str(RECURSIVE_TOML).unwrap();

    let catalog = DefinitionLoader::new().load(temp.path()).unwrap();
    let builder = SchemaBuilder::with_options(&catalog, BuildOptions::default());
    let results: Vec<(&str, bool)> = catalog
        .roots()
        .map(|def: &TypeDef| (def.name(), builder.build(def.name()).is_ok()))
        .collect();

    assert_eq!(results, vec![("Tree", false), ("Workbook", true)]);
}

#[test]
fn test_parallel_builds_publish_per_thread() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            thread::spawn(move || {
                let catalog = if i % 2 == 0 {
                    catalogs::workbook()
                } else {
                    catalogs::nested_regions()
                };
                let root = if i % 2 == 0 { "Workbook" } else { "Ledger" };
                for _ in 0..16 {
                    build_schema(&catalog, root, &ThreadSlot).unwrap();
                    assert_eq!(ThreadSlot.get().unwrap().type_name, root);
                }
                serde_json::to_string(&*ThreadSlot.get().unwrap()).unwrap()
            })
        })
        .collect();

    let outputs: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outputs[0], outputs[2]);
    assert_eq!(outputs[1], outputs[3]);
    assert_ne!(outputs[0], outputs[1]);
}
