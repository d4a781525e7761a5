//! modnav - Product module catalog and related-module navigation
//!
//! Holds the ordered catalog of product modules shown on marketing pages
//! and picks which modules a page's "related modules" widget links to,
//! either as a random sample or as the next few modules in catalog order.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod cli;
pub mod doctor;
pub mod log;
pub mod select;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types
pub use catalog::{CatalogError, LinkLookup, ModuleCatalog, ModuleRecord};
pub use doctor::{diagnose, DiagnosticReport, Finding, Severity};
pub use select::{
    next_modules, random_modules, select_next, Selection, SelectionStrategy,
};
