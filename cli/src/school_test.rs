use super::*;
use access::Role;

fn student() -> Session {
    Session {
        id: 4,
        name: "Sam Student".to_owned(),
        username: "sam".to_owned(),
        role: Role::Student,
        token: "tok-4".to_owned(),
    }
}

// Port 1 is never listening, so any request that is actually sent fails
// with a transport error.
fn client(dir: &tempfile::TempDir) -> SchoolClient {
    let backend = Backend::new("http://127.0.0.1:1").unwrap();
    let store = SessionStore::new(FileStorage::new(dir.path().join("session.json")));
    SchoolClient::new(backend, store)
}

#[tokio::test]
async fn protected_calls_fail_closed_when_signed_out() {
    let dir = tempfile::tempdir().unwrap();
    let client = client(&dir);
    assert!(matches!(
        client.my_courses().await,
        Err(CliError::Api(ApiError::AuthenticationRequired))
    ));
    assert!(matches!(
        client.my_students().await,
        Err(CliError::Api(ApiError::AuthenticationRequired))
    ));
    assert!(matches!(
        client.enrollments().await,
        Err(CliError::Api(ApiError::AuthenticationRequired))
    ));
}

#[tokio::test]
async fn enroll_without_session_asks_to_sign_in() {
    let dir = tempfile::tempdir().unwrap();
    let err = client(&dir).enroll(1).await.unwrap_err();
    assert_eq!(err.user_message(), "You should sign in to enroll a course");
}

#[tokio::test]
async fn blank_token_fails_closed() {
    let dir = tempfile::tempdir().unwrap();
    let client = client(&dir);
    let mut session = student();
    session.token = String::new();
    client.store.set_current(&session).unwrap();
    assert!(matches!(
        client.my_courses().await,
        Err(CliError::Api(ApiError::AuthenticationRequired))
    ));
}

#[tokio::test]
async fn signed_in_calls_reach_the_transport() {
    let dir = tempfile::tempdir().unwrap();
    let client = client(&dir);
    client.store.set_current(&student()).unwrap();
    assert!(matches!(client.my_courses().await, Err(CliError::Api(ApiError::Transport(_)))));
}

#[tokio::test]
async fn logout_clears_session_when_backend_is_unreachable() {
    let dir = tempfile::tempdir().unwrap();
    let client = client(&dir);
    client.store.set_current(&student()).unwrap();
    client.logout().await.unwrap();
    assert!(client.current().is_none());
}

#[tokio::test]
async fn failed_login_keeps_previous_state() {
    let dir = tempfile::tempdir().unwrap();
    let client = client(&dir);
    assert!(client.login("sam", "pw").await.is_err());
    assert!(client.current().is_none());
}
