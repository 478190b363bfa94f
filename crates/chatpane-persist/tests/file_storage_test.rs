use std::sync::Arc;

use chatpane_persist::{FileStorage, MessageRole, Storage, ThreadStore, STORAGE_KEY};

#[test]
fn test_file_storage_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("nested"));

    assert_eq!(storage.get_item("k").unwrap(), None);
    storage.set_item("k", "value").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("value"));
    assert!(dir.path().join("nested/k.json").exists());
    assert!(!dir.path().join("nested/k.json.tmp").exists());

    storage.remove_item("k").unwrap();
    storage.remove_item("k").unwrap();
    assert_eq!(storage.get_item("k").unwrap(), None);
}

#[test]
fn test_store_survives_reopen_from_disk() {
    let dir = tempfile::tempdir().unwrap();

    let (threads, active) = {
        let mut store = ThreadStore::open(Arc::new(FileStorage::new(dir.path())));
        let id = store.active_id().to_string();
        store
            .append_message(&id, MessageRole::User, "remember me")
            .unwrap();
        store.create_thread();
        (store.threads().to_vec(), store.threads()[0].id.clone())
    };

    let reopened = ThreadStore::open(Arc::new(FileStorage::new(dir.path())));
    assert_eq!(reopened.threads(), threads.as_slice());
    assert_eq!(reopened.active_id(), active);
    assert!(reopened
        .threads()
        .iter()
        .any(|t| t.title == "remember me"));
}

#[test]
fn test_corrupt_file_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(format!("{}.json", STORAGE_KEY)), "[{").unwrap();

    let store = ThreadStore::open(Arc::new(FileStorage::new(dir.path())));
    assert_eq!(store.len(), 1);
    assert_eq!(store.active().messages.len(), 1);
}
