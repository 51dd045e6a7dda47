use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let mut storage = MemoryStorage::new();
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k").as_deref(), Some("v"));
    storage.remove("k").unwrap();
    assert_eq!(storage.get("k"), None);
}

#[test]
fn json_helpers_round_trip_and_reject_malformed() {
    let mut storage = MemoryStorage::new();
    save_json(&mut storage, "nums", &vec![1, 2, 3]).unwrap();
    assert_eq!(load_json::<Vec<i32>>(&storage, "nums"), Some(vec![1, 2, 3]));

    storage.set("broken", "{not json").unwrap();
    assert_eq!(load_json::<Vec<i32>>(&storage, "broken"), None);
}

#[test]
fn file_storage_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");

    let mut storage = FileStorage::open(&path);
    assert_eq!(storage.get("yuksekolah_token"), None);
    storage.set("yuksekolah_token", "abc").unwrap();

    let reopened = FileStorage::open(&path);
    assert_eq!(reopened.get("yuksekolah_token").as_deref(), Some("abc"));
}

#[test]
fn file_storage_remove_is_durable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut storage = FileStorage::open(&path);
    storage.set("a", "1").unwrap();
    storage.set("b", "2").unwrap();
    storage.remove("a").unwrap();

    let reopened = FileStorage::open(&path);
    assert_eq!(reopened.get("a"), None);
    assert_eq!(reopened.get("b").as_deref(), Some("2"));
}

#[test]
fn file_storage_malformed_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let storage = FileStorage::open(&path);
    assert_eq!(storage.get("anything"), None);
    assert_eq!(storage.path(), path.as_path());
}
