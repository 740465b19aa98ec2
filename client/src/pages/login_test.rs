use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  alice  ", "secret"),
        Ok(("alice".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("alice", " pw "),
        Ok(("alice".to_owned(), " pw ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("alice", ""), Err("Enter both username and password."));
}

#[test]
fn no_notice_without_session() {
    assert_eq!(signed_in_notice(None), None);
}

#[test]
fn notice_names_the_current_identity() {
    let session = Session {
        id: 4,
        name: "Sam Student".to_owned(),
        username: "sam".to_owned(),
        role: access::Role::Student,
        token: "t".to_owned(),
    };
    assert_eq!(
        signed_in_notice(Some(&session)).as_deref(),
        Some("Signed in as Sam Student (STUDENT). Signing in again replaces this session.")
    );
}
