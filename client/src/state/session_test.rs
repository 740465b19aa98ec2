#![cfg(not(feature = "csr"))]

use super::*;
use access::Role;

fn teacher() -> Session {
    Session {
        id: 2,
        name: "John Teacher".to_owned(),
        username: "john".to_owned(),
        role: Role::Teacher,
        token: "tok-2".to_owned(),
    }
}

// =============================================================
// SessionProvider
// =============================================================

#[test]
fn load_without_storage_is_signed_out() {
    let provider = SessionProvider::load();
    assert!(!provider.is_signed_in());
    assert!(provider.get_untracked().is_none());
    assert!(matches!(provider.auth_headers(), Err(ApiError::AuthenticationRequired)));
}

#[test]
fn sign_in_publishes_session_even_when_storage_is_missing() {
    let provider = SessionProvider::load();
    provider.sign_in(teacher());
    assert_eq!(provider.get_untracked(), Some(teacher()));
    assert_eq!(provider.auth_headers().unwrap().authorization(), "Bearer tok-2");
}

#[test]
fn sign_out_clears_session() {
    let provider = SessionProvider::load();
    provider.sign_in(teacher());
    provider.sign_out();
    assert!(!provider.is_signed_in());
    assert!(provider.auth_headers().is_err());
}

#[test]
fn signing_in_again_replaces_the_session() {
    let provider = SessionProvider::load();
    provider.sign_in(teacher());
    let manager = Session {
        id: 9,
        name: "Mia Manager".to_owned(),
        username: "mia".to_owned(),
        role: Role::Manager,
        token: "tok-9".to_owned(),
    };
    provider.sign_in(manager.clone());
    assert_eq!(provider.get_untracked(), Some(manager));
    assert_eq!(provider.auth_headers().unwrap().authorization(), "Bearer tok-9");
}
