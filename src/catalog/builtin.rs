//! Built-in product catalog
//!
//! The vendor's module list is compiled into the binary from `modules.toml`
//! so pages can render navigation without any file on disk.

use anyhow::{Context, Result};

use crate::catalog::config::ModuleCatalog;

/// Raw TOML for the built-in catalog
pub const BUILTIN_CATALOG: &str = include_str!("../../modules.toml");

impl ModuleCatalog {
    /// The vendor's built-in module catalog
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_CATALOG).context("Built-in catalog is invalid")
    }
}
