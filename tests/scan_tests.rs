// Scanner integration tests
// Catalog paths on a real (temporary) filesystem through to ScanResult

mod common;

use dustpan::repository::{CacheScanner, NoopProgress, PathCatalog};

#[test]
fn test_one_present_one_missing() {
    let (_dir, home) = common::create_home();
    let present = home.join("present");
    common::add_file(&present, "a/blob1", 500_000_000);
    common::add_file(&present, "a/blob2", 500_000_000);
    common::add_file(&present, "b/blob3", 500_000_000);

    let catalog = common::catalog(&[
        (present.clone(), "Present Cache"),
        (home.join("missing"), "Missing Cache"),
    ]);
    let result = CacheScanner::new(catalog).scan(&NoopProgress);

    assert_eq!(result.entries.len(), 1);
    let root = &result.entries[0];
    assert_eq!(root.size, 1_500_000_000);
    assert_eq!(root.file_count, 3);
    assert_eq!(result.total_size, root.size);
    assert_eq!(root.path, present);
}

#[test]
fn test_category_children_sorted_with_empty_child_dropped() {
    let (_dir, home) = common::create_home();
    let cache = home.join("cache");
    common::add_file(&cache, "mid/data", 300);
    common::add_file(&cache, "big/data", 700);
    common::add_file(&cache, "small/data", 100);
    common::add_file(&cache, "zero/data", 0);

    let result = CacheScanner::new(common::catalog(&[(cache, "Cache")])).scan(&NoopProgress);

    let root = &result.entries[0];
    assert!(root.is_category);
    let sizes: Vec<u64> = root.children.iter().map(|c| c.size).collect();
    assert_eq!(sizes, vec![700, 300, 100]);
    assert_eq!(root.size, 1100);
}

#[test]
fn test_invariants_over_scanned_tree() {
    let (_dir, home) = common::create_home();
    for (i, dir) in ["one", "two", "three"].iter().enumerate() {
        let base = home.join(dir);
        for j in 0..=i {
            common::add_file(&base, &format!("child{j}/f"), ((i + 1) * (j + 1) * 10) as u64);
        }
    }

    let catalog = common::catalog(&[
        (home.join("one"), "One"),
        (home.join("two"), "Two"),
        (home.join("three"), "Three"),
    ]);
    let result = CacheScanner::new(catalog).scan(&NoopProgress);

    // "one" has a single child and collapses to a flat entry
    let one = result.entries.iter().find(|e| e.name == "one").unwrap();
    assert!(!one.is_category);
    assert!(one.children.is_empty());

    for window in result.entries.windows(2) {
        assert!(window[0].size >= window[1].size);
    }
    for root in &result.entries {
        assert!(root.newest_mod_time >= root.oldest_mod_time);
        if root.is_category {
            assert!(root.children.len() > 1);
            assert_eq!(root.size, root.children.iter().map(|c| c.size).sum::<u64>());
            for pair in root.children.windows(2) {
                assert!(pair[0].size >= pair[1].size);
            }
        }
    }
    assert_eq!(result.total_size, result.entries.iter().map(|e| e.size).sum::<u64>());
}

#[test]
fn test_standard_catalog_under_custom_home() {
    let (_dir, home) = common::create_home();
    common::add_file(&home, ".cargo/registry/cache/crate-a.crate", 4096);
    common::add_file(&home, ".cargo/registry/index/config.json", 128);
    common::add_file(&home, ".cache/yarn/v6/pkg.tgz", 2048);

    let catalog = std::sync::Arc::new(PathCatalog::for_home(&home));
    let result = CacheScanner::new(catalog).scan(&NoopProgress);

    let labels: Vec<_> = result
        .entries
        .iter()
        .map(|e| e.description.as_deref().unwrap())
        .collect();
    assert_eq!(labels, vec!["Cargo Registry", "Yarn Cache"]);
    assert!(result.entries[0].is_category);
    assert!(!result.entries[1].is_category);
}
