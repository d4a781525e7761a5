//! Module catalog
//!
//! The ordered list of product modules and how it is loaded and validated.

pub mod builtin;
pub mod config;
pub mod error;

pub use config::{LinkLookup, ModuleCatalog, ModuleRecord};
pub use error::CatalogError;
