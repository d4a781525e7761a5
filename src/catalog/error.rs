//! Catalog validation errors

use thiserror::Error;

/// A reason a catalog definition was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A record has a blank `name`
    #[error("Module at position {index} has an empty name")]
    EmptyName {
        /// Zero-based position of the record in the definition
        index: usize,
    },

    /// A record has a blank `description`
    #[error("Module '{name}' has an empty description")]
    EmptyDescription {
        /// Name of the offending module
        name: String,
    },

    /// A record has a blank `link`
    #[error("Module '{name}' has an empty link")]
    EmptyLink {
        /// Name of the offending module
        name: String,
    },

    /// A link is not in path form
    #[error("Module '{name}' has link '{link}': links must start with '/'")]
    InvalidLink {
        /// Name of the offending module
        name: String,
        /// The rejected link
        link: String,
    },

    /// Two records share a name
    #[error("Duplicate module name: '{0}'")]
    DuplicateName(String),

    /// Two records share a link
    #[error("Duplicate module link: '{0}'")]
    DuplicateLink(String),
}
