//! Module catalog definition
//!
//! Parses `modules.toml` into an ordered, validated catalog of product modules.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::error::CatalogError;

/// One sellable product module shown in marketing navigation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ModuleRecord {
    /// Display name, unique across the catalog
    pub name: String,
    /// Marketing copy shown on navigation cards
    pub description: String,
    /// Path-form identifier, e.g. `/hrms/payroll-management`
    pub link: String,
}

impl ModuleRecord {
    /// Build a record from borrowed parts
    #[must_use]
    pub fn new(name: &str, description: &str, link: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            link: link.to_string(),
        }
    }
}

/// Outcome of looking up a module by its link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkLookup {
    /// The link belongs to the record at this zero-based position
    Found(usize),
    /// No record carries the link
    NotFound,
}

/// On-disk shape of `modules.toml`
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "module", default)]
    modules: Vec<ModuleRecord>,
}

/// Ordered, immutable catalog of product modules.
///
/// Order is significant: it defines which module comes "next" for the
/// cyclic selector. Every constructor validates, so a live catalog always
/// has non-empty fields and unique names and links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCatalog {
    modules: Vec<ModuleRecord>,
}

impl ModuleCatalog {
    /// Build a catalog from records in display order
    pub fn new(modules: Vec<ModuleRecord>) -> Result<Self, CatalogError> {
        validate(&modules)?;
        Ok(Self { modules })
    }

    /// Parse a modules.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid catalog file: {}", path.display()))
    }

    /// Parse modules.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        Ok(Self::new(read_records(content)?)?)
    }

    /// All modules in catalog order
    #[must_use]
    pub fn all(&self) -> &[ModuleRecord] {
        &self.modules
    }

    /// Iterate modules in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, ModuleRecord> {
        self.modules.iter()
    }

    /// Number of modules
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// True when the catalog holds no modules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Position of the module whose link equals `link`
    #[must_use]
    pub fn find_index_by_link(&self, link: &str) -> LinkLookup {
        self.modules
            .iter()
            .position(|m| m.link == link)
            .map_or(LinkLookup::NotFound, LinkLookup::Found)
    }

    /// Find a module by link
    #[must_use]
    pub fn get(&self, link: &str) -> Option<&ModuleRecord> {
        self.modules.iter().find(|m| m.link == link)
    }

    /// All links in catalog order
    #[must_use]
    pub fn links(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.link.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a ModuleCatalog {
    type Item = &'a ModuleRecord;
    type IntoIter = std::slice::Iter<'a, ModuleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.iter()
    }
}

/// Deserialize modules.toml without checking catalog invariants.
///
/// Used by diagnostics, which want to report every problem rather than
/// stop at the first.
pub fn read_records(content: &str) -> Result<Vec<ModuleRecord>> {
    let file: CatalogFile = toml::from_str(content).context("Failed to parse modules.toml")?;
    Ok(file.modules)
}

/// Validate a list of records against the catalog invariants
fn validate(modules: &[ModuleRecord]) -> Result<(), CatalogError> {
    for (index, module) in modules.iter().enumerate() {
        if module.name.trim().is_empty() {
            return Err(CatalogError::EmptyName { index });
        }
        if module.description.trim().is_empty() {
            return Err(CatalogError::EmptyDescription {
                name: module.name.clone(),
            });
        }
        if module.link.trim().is_empty() {
            return Err(CatalogError::EmptyLink {
                name: module.name.clone(),
            });
        }
        if !module.link.starts_with('/') {
            return Err(CatalogError::InvalidLink {
                name: module.name.clone(),
                link: module.link.clone(),
            });
        }
    }

    let mut names = HashSet::new();
    let mut links = HashSet::new();
    for module in modules {
        if !names.insert(module.name.as_str()) {
            return Err(CatalogError::DuplicateName(module.name.clone()));
        }
        if !links.insert(module.link.as_str()) {
            return Err(CatalogError::DuplicateLink(module.link.clone()));
        }
    }

    Ok(())
}
