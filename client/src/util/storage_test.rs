#![cfg(not(feature = "csr"))]

use super::*;
use access::SessionStore;

#[test]
fn reads_are_empty_outside_browser() {
    assert_eq!(BrowserStorage.get_item("currentUser").unwrap(), None);
    assert!(SessionStore::new(BrowserStorage).current().is_none());
}

#[test]
fn writes_report_unavailable_outside_browser() {
    assert!(matches!(
        BrowserStorage.set_item("currentUser", "{}"),
        Err(StorageError::Unavailable)
    ));
    assert!(matches!(BrowserStorage.remove_item("currentUser"), Err(StorageError::Unavailable)));
}
