//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::catalog::{ModuleCatalog, ModuleRecord};

/// A four-module catalog `A(/a) B(/b) C(/c) D(/d)` in that order.
#[must_use]
pub fn abcd_catalog() -> ModuleCatalog {
    ModuleCatalog::new(
        ["A", "B", "C", "D"]
            .iter()
            .map(|name| {
                let link = format!("/{}", name.to_lowercase());
                ModuleRecord::new(name, &format!("Module {name}"), &link)
            })
            .collect(),
    )
    .unwrap()
}

/// Links of the given modules, in order.
#[must_use]
pub fn links<'a>(modules: &[&'a ModuleRecord]) -> Vec<&'a str> {
    modules.iter().map(|m| m.link.as_str()).collect()
}
