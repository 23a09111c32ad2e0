use dino_runner::error::ScoreStoreError;
use dino_runner::score_store::{FileScoreStore, MemoryScoreStore, ScoreStore};

#[test]
fn missing_file_loads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileScoreStore::in_dir(dir.path());
    assert_eq!(store.load().unwrap(), 0);
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileScoreStore::in_dir(dir.path());
    store.save(1234).unwrap();
    assert_eq!(store.load().unwrap(), 1234);
    assert_eq!(FileScoreStore::in_dir(dir.path()).load().unwrap(), 1234);
}

#[test]
fn save_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let mut store = FileScoreStore::in_dir(&nested);
    store.save(9).unwrap();
    assert!(store.path().exists());
}

#[test]
fn corrupt_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileScoreStore::in_dir(dir.path());
    std::fs::write(store.path(), "lots").unwrap();
    assert!(matches!(store.load(), Err(ScoreStoreError::Parse(_))));
    assert_eq!(store.load_or_zero(), 0);
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileScoreStore::in_dir(dir.path());
    std::fs::write(store.path(), "77\n").unwrap();
    assert_eq!(store.load().unwrap(), 77);
}

#[test]
fn memory_store_counts_saves() {
    let mut store = MemoryScoreStore::new(5);
    assert_eq!(store.load_or_zero(), 5);
    store.save(8).unwrap();
    store.save(11).unwrap();
    assert_eq!(store.saves(), 2);
    assert_eq!(store.load().unwrap(), 11);
}
