//! Shared test fixtures for the sheetmap workspace.
//!
//! A dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`catalogs`]: sample type catalogs, built in code and as TOML text
//! - [`dir`]: [`TestCatalogDir`](dir::TestCatalogDir) for tests that load
//!   definition files from disk

pub mod catalogs;
pub mod dir;
