#![cfg(not(feature = "csr"))]

use super::*;
use access::Role;
use futures::executor::block_on;

fn student() -> Session {
    Session {
        id: 4,
        name: "Sam Student".to_owned(),
        username: "sam".to_owned(),
        role: Role::Student,
        token: "tok-4".to_owned(),
    }
}

fn course() -> Course {
    Course { id: 1, name: "Java Programming".to_owned(), instructor: None }
}

#[test]
fn protected_calls_fail_closed_when_signed_out() {
    let api = ApiClient::new(SessionProvider::load());
    assert!(matches!(block_on(api.my_courses()), Err(ApiError::AuthenticationRequired)));
    assert!(matches!(block_on(api.my_students()), Err(ApiError::AuthenticationRequired)));
    assert!(matches!(block_on(api.enrollments()), Err(ApiError::AuthenticationRequired)));
    assert!(matches!(block_on(api.enroll(course())), Err(ApiError::AuthenticationRequired)));
}

#[test]
fn public_calls_report_transport_error_outside_browser() {
    let api = ApiClient::new(SessionProvider::load());
    assert!(matches!(block_on(api.courses()), Err(ApiError::Transport(_))));
    let err = block_on(api.login("sam", "pw")).unwrap_err();
    assert_eq!(err.user_message(), "Unexpected error occurred.");
}

#[test]
fn signed_in_calls_get_past_the_credential_check() {
    let session = SessionProvider::load();
    session.sign_in(student());
    let api = ApiClient::new(session);
    assert!(matches!(block_on(api.my_courses()), Err(ApiError::Transport(_))));
}

#[test]
fn logout_clears_session_even_when_backend_is_unreachable() {
    let session = SessionProvider::load();
    session.sign_in(student());
    let api = ApiClient::new(session);
    block_on(api.logout());
    assert!(!session.is_signed_in());
}

#[test]
fn encode_serializes_registration() {
    let user = NewUser {
        name: "New".to_owned(),
        username: "new".to_owned(),
        password: "pw".to_owned(),
    };
    let raw = encode(&user).unwrap();
    assert!(raw.contains("\"username\":\"new\""));
}
