use super::*;
use access::Role;

#[test]
fn enroll_requires_session() {
    assert_eq!(enroll_precheck(None), Err("You should sign in to enroll a course"));
}

#[test]
fn enroll_allowed_when_signed_in() {
    let session = Session {
        id: 3,
        name: "S".to_owned(),
        username: "s".to_owned(),
        role: Role::Student,
        token: "t".to_owned(),
    };
    assert_eq!(enroll_precheck(Some(&session)), Ok(()));
}
