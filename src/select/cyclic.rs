//! Cyclic selector — "keep reading" navigation
//!
//! Walks the catalog as a ring starting after the current module. When the
//! current module is not in the catalog the selector degrades to a random
//! sample and says so, both in the returned [`Selection`] and in the logs.

use rand::Rng;
use serde::Serialize;

use crate::catalog::{LinkLookup, ModuleCatalog, ModuleRecord};
use crate::select::random::random_modules_with;

/// How a selection was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// Next modules in catalog order
    Cyclic,
    /// The current link was unknown; modules were sampled at random
    RandomFallback,
}

/// Modules picked for a navigation widget, with the strategy that picked them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection<'a> {
    /// Selected modules, in display order
    pub modules: Vec<&'a ModuleRecord>,
    /// Which strategy produced `modules`
    pub strategy: SelectionStrategy,
}

impl Selection<'_> {
    /// True when the cyclic walk could not be used
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.strategy == SelectionStrategy::RandomFallback
    }
}

/// The `count` modules that follow `current_link`, wrapping past the end.
///
/// With `count` larger than the catalog the ring is walked more than once,
/// so modules repeat. Unknown links fall back to [`random_modules`].
///
/// [`random_modules`]: crate::select::random::random_modules
#[must_use]
pub fn next_modules<'a>(
    catalog: &'a ModuleCatalog,
    count: usize,
    current_link: &str,
) -> Vec<&'a ModuleRecord> {
    select_next(catalog, count, current_link).modules
}

/// Like [`next_modules`], also reporting whether the fallback was taken
#[must_use]
pub fn select_next<'a>(
    catalog: &'a ModuleCatalog,
    count: usize,
    current_link: &str,
) -> Selection<'a> {
    select_next_with(catalog, count, current_link, &mut rand::rng())
}

/// Like [`select_next`], drawing fallback randomness from `rng`
pub fn select_next_with<'a, R: Rng + ?Sized>(
    catalog: &'a ModuleCatalog,
    count: usize,
    current_link: &str,
    rng: &mut R,
) -> Selection<'a> {
    match catalog.find_index_by_link(current_link) {
        LinkLookup::Found(index) => {
            let modules = ring_after(catalog.all(), index, count);
            tracing::debug!(
                current = current_link,
                index,
                count,
                "Selected next modules"
            );
            Selection {
                modules,
                strategy: SelectionStrategy::Cyclic,
            }
        }
        LinkLookup::NotFound => {
            tracing::warn!(
                link = current_link,
                count,
                catalog_size = catalog.len(),
                "Module link not found in catalog, falling back to random selection"
            );
            Selection {
                modules: random_modules_with(catalog, count, None, rng),
                strategy: SelectionStrategy::RandomFallback,
            }
        }
    }
}

/// `count` items after `index`, treating `items` as a ring
fn ring_after<T>(items: &[T], index: usize, count: usize) -> Vec<&T> {
    items.iter().cycle().skip(index + 1).take(count).collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::testutil::{abcd_catalog, links};

    #[test]
    fn test_next_two_after_c_wraps_to_a() {
        let catalog = abcd_catalog();
        assert_eq!(links(&next_modules(&catalog, 2, "/c")), vec!["/d", "/a"]);
    }

    #[test]
    fn test_next_after_first() {
        let catalog = abcd_catalog();
        assert_eq!(
            links(&next_modules(&catalog, 3, "/a")),
            vec!["/b", "/c", "/d"]
        );
    }

    #[test]
    fn test_last_wraps_to_first() {
        let catalog = abcd_catalog();
        assert_eq!(links(&next_modules(&catalog, 1, "/d")), vec!["/a"]);
    }

    #[test]
    fn test_over_count_cycles_ring() {
        let catalog = abcd_catalog();
        let picked = links(&next_modules(&catalog, 9, "/b"));
        assert_eq!(
            picked,
            vec!["/c", "/d", "/a", "/b", "/c", "/d", "/a", "/b", "/c"]
        );
    }

    #[test]
    fn test_full_ring_ends_on_current() {
        let catalog = abcd_catalog();
        let picked = links(&next_modules(&catalog, 4, "/b"));
        assert_eq!(picked.last(), Some(&"/b"));
    }

    #[test]
    fn test_zero_count_returns_nothing() {
        let catalog = abcd_catalog();
        assert!(next_modules(&catalog, 0, "/a").is_empty());
    }

    #[test]
    fn test_deterministic_for_known_link() {
        let catalog = abcd_catalog();
        let first = next_modules(&catalog, 5, "/c");
        for _ in 0..20 {
            assert_eq!(next_modules(&catalog, 5, "/c"), first);
        }
    }

    #[test]
    fn test_known_link_reports_cyclic_strategy() {
        let catalog = abcd_catalog();
        let selection = select_next(&catalog, 2, "/a");
        assert_eq!(selection.strategy, SelectionStrategy::Cyclic);
        assert!(!selection.is_fallback());
    }

    #[test]
    fn test_unknown_link_falls_back_to_random() {
        let catalog = abcd_catalog();
        let mut rng = StdRng::seed_from_u64(3);
        let selection = select_next_with(&catalog, 1, "/not-found", &mut rng);

        assert!(selection.is_fallback());
        assert_eq!(selection.modules.len(), 1);
        assert!(catalog.get(&selection.modules[0].link).is_some());
    }

    #[test]
    fn test_fallback_draws_from_whole_catalog() {
        let catalog = abcd_catalog();
        let mut rng = StdRng::seed_from_u64(5);
        let selection = select_next_with(&catalog, 10, "/missing", &mut rng);

        let mut picked = links(&selection.modules);
        picked.sort_unstable();
        assert_eq!(picked, vec!["/a", "/b", "/c", "/d"]);
    }

    #[test]
    fn test_empty_catalog_falls_back_to_nothing() {
        let catalog = ModuleCatalog::new(vec![]).unwrap();
        let selection = select_next(&catalog, 3, "/a");
        assert!(selection.is_fallback());
        assert!(selection.modules.is_empty());
    }

    #[test]
    fn test_single_module_catalog_repeats_itself() {
        let catalog =
            ModuleCatalog::new(vec![ModuleRecord::new("Only", "The one", "/only")]).unwrap();
        assert_eq!(
            links(&next_modules(&catalog, 3, "/only")),
            vec!["/only", "/only", "/only"]
        );
    }

    #[test]
    fn test_ring_after_indexes() {
        let items = [0, 1, 2];
        assert_eq!(ring_after(&items, 2, 4), vec![&0, &1, &2, &0]);
        assert!(ring_after::<i32>(&[], 0, 3).is_empty());
    }
}
