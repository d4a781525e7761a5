//! Random selector — "you might also like" samples
//!
//! Draws a uniformly shuffled, duplicate-free subset of the catalog that
//! leaves out the module the visitor is currently viewing.

use rand::Rng;

use crate::catalog::{ModuleCatalog, ModuleRecord};

/// Pick up to `count` random modules, excluding `exclude_link`.
///
/// `None` or an empty link excludes nothing. Returns fewer than `count`
/// modules when the catalog is too small; never pads or repeats.
#[must_use]
pub fn random_modules<'a>(
    catalog: &'a ModuleCatalog,
    count: usize,
    exclude_link: Option<&str>,
) -> Vec<&'a ModuleRecord> {
    random_modules_with(catalog, count, exclude_link, &mut rand::rng())
}

/// Same as [`random_modules`], drawing randomness from `rng`.
pub fn random_modules_with<'a, R: Rng + ?Sized>(
    catalog: &'a ModuleCatalog,
    count: usize,
    exclude_link: Option<&str>,
    rng: &mut R,
) -> Vec<&'a ModuleRecord> {
    let exclude = exclude_link.filter(|link| !link.is_empty());

    let mut pool: Vec<&ModuleRecord> = catalog
        .iter()
        .filter(|m| exclude != Some(m.link.as_str()))
        .collect();

    shuffle(&mut pool, rng);
    pool.truncate(count);

    tracing::debug!(
        count,
        exclude = exclude.unwrap_or(""),
        selected = pool.len(),
        "Selected random modules"
    );

    pool
}

/// In-place Fisher–Yates shuffle
fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
