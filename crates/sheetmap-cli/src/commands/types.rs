//! Types command: list catalog types and their markers

use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use sheetmap_meta::{TypeDef, TypeDescriptor};

use super::load_catalog;
use crate::error::Result;

/// One catalog type as reported by `types --json`
#[derive(Debug, Serialize)]
struct TypeSummary<'a> {
    name: &'a str,
    root: Option<&'a str>,
    sheets: Vec<&'a str>,
    cells: Vec<&'a str>,
}

impl<'a> From<&'a TypeDef> for TypeSummary<'a> {
    fn from(def: &'a TypeDef) -> Self {
        Self {
            name: def.name(),
            root: def.root_marker().map(|marker| marker.name.as_str()),
            sheets: def
                .fields()
                .iter()
                .filter(|f| f.sheet.is_some())
                .map(|f| f.name.as_str())
                .collect(),
            cells: def
                .fields()
                .iter()
                .filter(|f| f.cell.is_some())
                .map(|f| f.name.as_str())
                .collect(),
        }
    }
}

/// Run the types command
pub fn run_types(catalog_path: &Path, json: bool) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let summaries: Vec<TypeSummary<'_>> = catalog.iter().map(TypeSummary::from).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    println!("{}", "Catalog Types".bold());
    println!();
    for summary in &summaries {
        match summary.root {
            Some(root) => println!(
                "  {:<20} {} {:?}",
                summary.name.green(),
                "root".cyan(),
                root
            ),
            None => println!("  {:<20}", summary.name),
        }
        if !summary.sheets.is_empty() {
            println!("    {} {}", "sheets:".dimmed(), summary.sheets.join(", "));
        }
        if !summary.cells.is_empty() {
            println!("    {} {}", "cells:".dimmed(), summary.cells.join(", "));
        }
    }
    println!();
    println!("{} {} types", "Total:".dimmed(), summaries.len());

    Ok(())
}
