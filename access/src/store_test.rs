use super::*;
use crate::model::Role;

fn session(role: Role) -> Session {
    Session {
        id: 11,
        name: "Alice".to_owned(),
        username: "alice".to_owned(),
        role,
        token: "token-11".to_owned(),
    }
}

struct BrokenStorage;

impl SessionStorage for BrokenStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read("disk on fire".to_owned()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".to_owned()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================
// current / set_current / clear_current
// =============================================================

#[test]
fn empty_store_has_no_session() {
    let store = SessionStore::new(MemoryStorage::new());
    assert!(store.current().is_none());
}

#[test]
fn stored_session_reads_back_identical() {
    let store = SessionStore::new(MemoryStorage::new());
    let original = session(Role::Teacher);
    store.set_current(&original).unwrap();
    assert_eq!(store.current(), Some(original));
}

#[test]
fn set_current_overwrites_previous_session() {
    let store = SessionStore::new(MemoryStorage::new());
    store.set_current(&session(Role::Student)).unwrap();
    let mut next = session(Role::Manager);
    next.id = 12;
    store.set_current(&next).unwrap();
    assert_eq!(store.current(), Some(next));
}

#[test]
fn clear_then_read_is_absent() {
    let store = SessionStore::new(MemoryStorage::new());
    store.set_current(&session(Role::Student)).unwrap();
    store.clear_current().unwrap();
    assert!(store.current().is_none());
}

#[test]
fn clearing_empty_store_is_ok() {
    let store = SessionStore::new(MemoryStorage::new());
    assert!(store.clear_current().is_ok());
}

#[test]
fn session_is_written_under_current_user_key() {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(&storage);
    store.set_current(&session(Role::Student)).unwrap();
    let raw = storage.get_item("currentUser").unwrap().unwrap();
    assert!(raw.contains("\"role\":\"STUDENT\""));
}

// =============================================================
// failure handling
// =============================================================

#[test]
fn malformed_json_reads_as_absent() {
    let storage = MemoryStorage::new();
    storage.set_item(SESSION_STORAGE_KEY, "{not json").unwrap();
    assert!(SessionStore::new(&storage).current().is_none());
}

#[test]
fn unknown_role_reads_as_absent() {
    let storage = MemoryStorage::new();
    storage
        .set_item(
            SESSION_STORAGE_KEY,
            r#"{"id":1,"name":"x","username":"x","role":"ADMIN","token":"t"}"#,
        )
        .unwrap();
    assert!(SessionStore::new(&storage).current().is_none());
}

#[test]
fn null_entry_reads_as_absent() {
    let storage = MemoryStorage::new();
    storage.set_item(SESSION_STORAGE_KEY, "null").unwrap();
    assert!(SessionStore::new(&storage).current().is_none());
}

#[test]
fn backend_read_failure_reads_as_absent() {
    assert!(SessionStore::new(BrokenStorage).current().is_none());
}

#[test]
fn backend_write_failure_is_reported() {
    let err = SessionStore::new(BrokenStorage)
        .set_current(&session(Role::Student))
        .unwrap_err();
    assert!(matches!(err, StorageError::Write(_)));
    assert!(SessionStore::new(BrokenStorage).clear_current().is_err());
}

#[test]
fn custom_key_is_isolated_from_default() {
    let storage = MemoryStorage::new();
    let scoped = SessionStore::with_key(&storage, "otherUser");
    scoped.set_current(&session(Role::Manager)).unwrap();
    assert!(SessionStore::new(&storage).current().is_none());
    assert!(scoped.current().is_some());
}
