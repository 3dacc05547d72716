// Cleanup integration tests
// Selection tree → cleanup plan → real deletions on a temporary filesystem

mod common;

use dustpan::model::EntryId;
use dustpan::repository::{run_plan, CacheScanner, CleanMode, NoopProgress};
use dustpan::viewmodel::SelectionTree;
use std::fs;

#[test]
fn test_permanent_delete_of_selected_children() {
    let (_dir, home) = common::create_home();
    let cache = home.join("cache");
    common::add_file(&cache, "keep/f", 50);
    common::add_file(&cache, "drop/f", 200);
    common::add_file(&cache, "also-drop.bin", 100);

    let result = CacheScanner::new(common::catalog(&[(cache.clone(), "Cache")])).scan(&NoopProgress);
    let mut tree = SelectionTree::new(result.entries);

    // Children sorted: drop (200), also-drop.bin (100), keep (50)
    tree.toggle_select(EntryId::child(0, 0));
    tree.toggle_select(EntryId::child(0, 1));
    assert_eq!(tree.selected_size(), 300);

    let report = run_plan(&tree.cleanup_plan(CleanMode::Permanent)).unwrap();
    assert_eq!(report.freed, 300);
    assert_eq!(report.removed, 2);

    assert!(!cache.join("drop").exists());
    assert!(!cache.join("also-drop.bin").exists());
    assert!(cache.join("keep/f").exists());
}

#[test]
fn test_missing_second_target_fails_without_rollback() {
    let (_dir, home) = common::create_home();
    let first = home.join("first");
    let second = home.join("second");
    common::add_file(&first, "f", 20);
    common::add_file(&second, "f", 10);

    let catalog = common::catalog(&[(first.clone(), "First"), (second.clone(), "Second")]);
    let result = CacheScanner::new(catalog).scan(&NoopProgress);
    let mut tree = SelectionTree::new(result.entries);
    tree.select_all();

    // Second path disappears between scan and cleanup
    fs::remove_dir_all(&second).unwrap();

    let err = run_plan(&tree.cleanup_plan(CleanMode::Permanent)).unwrap_err();
    assert_eq!(err.path, second);
    assert_eq!(err.removed, 1);
    assert!(!first.exists());
}

#[test]
fn test_selected_parent_removes_whole_root() {
    let (_dir, home) = common::create_home();
    let cache = home.join("cache");
    common::add_file(&cache, "a/f", 10);
    common::add_file(&cache, "b/f", 20);

    let result = CacheScanner::new(common::catalog(&[(cache.clone(), "Cache")])).scan(&NoopProgress);
    let mut tree = SelectionTree::new(result.entries);
    tree.toggle_select(EntryId::root(0));
    tree.toggle_select(EntryId::child(0, 0));

    let plan = tree.cleanup_plan(CleanMode::Permanent);
    assert_eq!(plan.targets.len(), 1);
    assert_eq!(plan.targets[0].path, cache);

    run_plan(&plan).unwrap();
    assert!(!cache.exists());
}

#[cfg(unix)]
#[test]
fn test_symlinked_child_reports_link_not_target() {
    let (_outside_dir, outside) = common::create_home();
    let blob = common::add_file(&outside, "blob", 1_000_000);

    let (_dir, home) = common::create_home();
    let cache = home.join("cache");
    common::add_file(&cache, "real/f", 100);
    std::os::unix::fs::symlink(&outside, cache.join("link")).unwrap();

    let result = CacheScanner::new(common::catalog(&[(cache.clone(), "Cache")])).scan(&NoopProgress);
    assert!(result.total_size < 1_000_000);

    let mut tree = SelectionTree::new(result.entries);
    let link = tree.roots()[0]
        .children
        .iter()
        .position(|c| c.name == "link")
        .unwrap();
    tree.toggle_select(EntryId::child(0, link));

    let report = run_plan(&tree.cleanup_plan(CleanMode::Permanent)).unwrap();
    assert!(report.freed < 1_000_000);
    assert!(fs::symlink_metadata(cache.join("link")).is_err());
    assert!(blob.exists());
}
