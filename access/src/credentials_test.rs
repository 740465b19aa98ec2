use super::*;
use crate::model::Role;
use crate::store::MemoryStorage;

fn session(token: &str) -> Session {
    Session {
        id: 9,
        name: "Mia Manager".to_owned(),
        username: "mia".to_owned(),
        role: Role::Manager,
        token: token.to_owned(),
    }
}

#[test]
fn bearer_header_uses_session_token() {
    let headers = AuthHeaders::for_session(Some(&session("abc.def"))).unwrap();
    assert_eq!(headers.authorization(), "Bearer abc.def");
}

#[test]
fn pairs_include_json_content_type() {
    let headers = AuthHeaders::for_session(Some(&session("abc"))).unwrap();
    let pairs = headers.pairs();
    assert_eq!(pairs[0], ("Authorization", "Bearer abc"));
    assert_eq!(pairs[1], ("Content-Type", "application/json; charset=UTF-8"));
}

#[test]
fn missing_session_fails_closed() {
    let err = AuthHeaders::for_session(None).unwrap_err();
    assert!(matches!(err, ApiError::AuthenticationRequired));
}

#[test]
fn blank_token_fails_closed() {
    let err = AuthHeaders::for_session(Some(&session("   "))).unwrap_err();
    assert!(matches!(err, ApiError::AuthenticationRequired));
}

#[test]
fn from_store_reads_current_session() {
    let store = SessionStore::new(MemoryStorage::new());
    assert!(matches!(AuthHeaders::from_store(&store), Err(ApiError::AuthenticationRequired)));
    store.set_current(&session("xyz")).unwrap();
    assert_eq!(AuthHeaders::from_store(&store).unwrap().authorization(), "Bearer xyz");
    store.clear_current().unwrap();
    assert!(AuthHeaders::from_store(&store).is_err());
}

#[test]
fn basic_header_encodes_username_and_password() {
    let headers = AuthHeaders::basic("user", "pass");
    assert_eq!(headers.authorization(), "Basic dXNlcjpwYXNz");
}

#[test]
fn debug_output_hides_credentials() {
    let headers = AuthHeaders::for_session(Some(&session("secret-token"))).unwrap();
    let rendered = format!("{headers:?}");
    assert!(rendered.contains("Bearer"));
    assert!(!rendered.contains("secret-token"));
}
