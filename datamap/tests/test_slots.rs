use datamap::Storage;

#[test]
fn test_read_empty_slot() {
    let storage = Storage::open_in_memory().unwrap();
    assert_eq!(storage.read_slot("potato-farm-save").unwrap(), None);
}

#[test]
fn test_write_then_read_slot() {
    let storage = Storage::open_in_memory().unwrap();
    storage.write_slot("potato-farm-save", "{\"day\":3}").unwrap();
    assert_eq!(
        storage.read_slot("potato-farm-save").unwrap(),
        Some("{\"day\":3}".to_string())
    );
}

#[test]
fn test_overwrite_slot() {
    let storage = Storage::open_in_memory().unwrap();
    storage.write_slot("a", "first").unwrap();
    storage.write_slot("a", "second").unwrap();
    storage.write_slot("b", "other").unwrap();
    assert_eq!(storage.read_slot("a").unwrap(), Some("second".to_string()));
    assert_eq!(storage.read_slot("b").unwrap(), Some("other".to_string()));
    let count: i64 = storage
        .connection()
        .query_row("select count(*) from saves", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 2);
}

#[test]
fn test_erase_slot() {
    let storage = Storage::open_in_memory().unwrap();
    storage.write_slot("a", "data").unwrap();
    assert!(storage.erase_slot("a").unwrap());
    assert!(!storage.erase_slot("a").unwrap());
    assert_eq!(storage.read_slot("a").unwrap(), None);
}

#[test]
fn test_slots_survive_reopen() {
    let path = std::env::temp_dir().join(format!("datamap-slots-{}.sqlite", std::process::id()));
    {
        let storage = Storage::open(&path).unwrap();
        storage.write_slot("save", "kept").unwrap();
    }
    let storage = Storage::open(&path).unwrap();
    assert_eq!(storage.read_slot("save").unwrap(), Some("kept".to_string()));
    drop(storage);
    let _ = std::fs::remove_file(&path);
}
