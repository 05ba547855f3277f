use super::*;

#[test]
fn memory_storage_get_missing_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get_item("userData"), Ok(None));
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_set_overwrites() {
    let storage = MemoryStorage::new();
    storage.set_item("user", "a").unwrap();
    storage.set_item("user", "b").unwrap();
    assert_eq!(storage.get_item("user"), Ok(Some("b".to_owned())));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_missing_is_ok() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.remove_item("nope"), Ok(()));
}

#[test]
fn memory_storage_keys_are_independent() {
    let storage = MemoryStorage::new();
    storage.set_item("user", "1").unwrap();
    storage.set_item("userData", "2").unwrap();
    storage.remove_item("userData").unwrap();
    assert_eq!(storage.get_item("user"), Ok(Some("1".to_owned())));
    assert_eq!(storage.get_item("userData"), Ok(None));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_unavailable_outside_browser() {
    let storage = BrowserStorage;
    assert_eq!(storage.get_item("userData"), Err(StorageError::Unavailable));
    assert_eq!(storage.set_item("userData", "{}"), Err(StorageError::Unavailable));
    assert_eq!(storage.remove_item("userData"), Err(StorageError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn app_storage_outside_browser_is_in_memory() {
    let storage = app_storage();
    storage.set_item("userData", r#"{"id":1}"#).unwrap();
    assert_eq!(storage.get_item("userData"), Ok(Some(r#"{"id":1}"#.to_owned())));
    storage.remove_item("userData").unwrap();
    assert_eq!(storage.get_item("userData"), Ok(None));
}
