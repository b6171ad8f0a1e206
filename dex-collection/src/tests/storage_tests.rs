use super::*;

#[test]
fn file_storage_missing_key_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    assert_eq!(storage.get("saved-collection").unwrap(), None);
}

#[test]
fn file_storage_creates_directory_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("a").join("b");
    let mut storage = FileStorage::new(&root);

    storage.set("saved-collection", "[]").unwrap();

    assert_eq!(storage.get("saved-collection").unwrap().as_deref(), Some("[]"));
    assert!(root.join("saved-collection.json").exists());
    assert!(!root.join("saved-collection.json.tmp").exists());
}

#[test]
fn file_storage_reports_non_utf8_as_malformed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("k.json"), [0xff, 0xfe, 0x00]).unwrap();

    let storage = FileStorage::new(dir.path());
    match storage.get("k") {
        Err(StorageError::Malformed { key, .. }) => assert_eq!(key, "k"),
        other => panic!("expected Malformed, got {other:?}"),
    }
}

#[test]
fn file_storage_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());
    storage.set("k", "one").unwrap();
    storage.set("k", "two").unwrap();
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("two"));
}

#[test]
fn file_storage_remove_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());
    storage.set("k", "v").unwrap();
    storage.remove("k").unwrap();
    storage.remove("k").unwrap();
    assert_eq!(storage.get("k").unwrap(), None);
}

#[test]
fn file_storage_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path());
    assert!(matches!(
        storage.set("../escape", "x"),
        Err(StorageError::InvalidKey(_))
    ));
    assert!(matches!(storage.get(""), Err(StorageError::InvalidKey(_))));
}

#[test]
fn memory_storage_enforces_quota() {
    let mut storage = MemoryStorage::with_quota(4);
    storage.set("k", "1234").unwrap();
    let err = storage.set("k", "12345").unwrap_err();
    assert!(matches!(
        err,
        StorageError::QuotaExceeded {
            needed: 5,
            quota: 4
        }
    ));
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("1234"));
}
