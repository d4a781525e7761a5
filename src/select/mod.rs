//! Related-module selection
//!
//! Two pure selectors over a borrowed [`ModuleCatalog`](crate::catalog::ModuleCatalog):
//! a random sample and a cyclic "next N" walk.

pub mod cyclic;
pub mod random;

pub use cyclic::{next_modules, select_next, select_next_with, Selection, SelectionStrategy};
pub use random::{random_modules, random_modules_with};
