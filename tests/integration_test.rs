#![allow(missing_docs)]

use std::collections::HashSet;
use std::fs;

use tempfile::TempDir;

use modnav::{
    diagnose, next_modules, random_modules, select_next, ModuleCatalog, ModuleRecord,
    SelectionStrategy,
};

const TEST_CATALOG: &str = r#"
[[module]]
name = "A"
description = "Module A"
link = "/a"

[[module]]
name = "B"
description = "Module B"
link = "/b"

[[module]]
name = "C"
description = "Module C"
link = "/c"

[[module]]
name = "D"
description = "Module D"
link = "/d"
"#;

fn links(modules: &[&ModuleRecord]) -> Vec<String> {
    modules.iter().map(|m| m.link.clone()).collect()
}

/// Integration test: load a catalog file from disk and drive both selectors.
#[test]
fn test_catalog_file_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("modules.toml");
    fs::write(&path, TEST_CATALOG).unwrap();

    let catalog = ModuleCatalog::from_path(&path).unwrap();
    assert_eq!(catalog.len(), 4);

    assert_eq!(links(&next_modules(&catalog, 2, "/c")), vec!["/d", "/a"]);

    let mut sample = links(&random_modules(&catalog, 4, Some("/a")));
    sample.sort();
    assert_eq!(sample, vec!["/b", "/c", "/d"]);

    let fallback = select_next(&catalog, 1, "/not-found");
    assert_eq!(fallback.strategy, SelectionStrategy::RandomFallback);
    assert_eq!(fallback.modules.len(), 1);
}

#[test]
fn test_invalid_catalog_file_names_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("modules.toml");
    fs::write(
        &path,
        r#"
[[module]]
name = "A"
description = "a"
link = "/a"

[[module]]
name = "A"
description = "again"
link = "/a2"
"#,
    )
    .unwrap();

    let err = ModuleCatalog::from_path(&path).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("Invalid catalog file"));
    assert!(chain.contains("Duplicate module name: 'A'"));
}

#[test]
fn test_random_widgets_across_builtin_catalog() {
    let catalog = ModuleCatalog::builtin().unwrap();

    for current in catalog.links() {
        let picked = random_modules(&catalog, 4, Some(current));
        assert_eq!(picked.len(), 4);
        assert!(picked.iter().all(|m| m.link != current));

        let unique: HashSet<&str> = picked.iter().map(|m| m.link.as_str()).collect();
        assert_eq!(unique.len(), picked.len());
    }
}

#[test]
fn test_keep_reading_walks_builtin_catalog_as_ring() {
    let catalog = ModuleCatalog::builtin().unwrap();
    let all = catalog.links();
    let last = all[all.len() - 1];

    let next = next_modules(&catalog, 1, last);
    assert_eq!(next[0].link, all[0]);

    let lap = next_modules(&catalog, all.len() * 2, all[0]);
    assert_eq!(lap.len(), all.len() * 2);
    assert_eq!(lap[all.len() - 1].link, all[0]);
    assert_eq!(lap[all.len()].link, all[1]);
}

#[test]
fn test_fallback_size_bounded_by_catalog() {
    let catalog = ModuleCatalog::parse(TEST_CATALOG).unwrap();
    let selection = select_next(&catalog, 10, "/gone");
    assert!(selection.is_fallback());
    assert_eq!(selection.modules.len(), 4);
}

#[test]
fn test_doctor_on_builtin_definition() {
    let catalog = ModuleCatalog::builtin().unwrap();
    let report = diagnose(catalog.all());
    assert!(report.is_clean());
}
