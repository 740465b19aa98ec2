use super::*;

fn user(id: i64, name: Option<&str>, username: &str) -> User {
    User { id, name: name.map(str::to_owned), username: username.to_owned(), role: None }
}

#[test]
fn roster_sorts_by_display_name() {
    let sorted = roster(vec![user(1, Some("Zed"), "z"), user(2, None, "amy"), user(3, Some("Bob"), "b")]);
    let ids: Vec<i64> = sorted.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn roster_drops_repeated_students() {
    let sorted = roster(vec![user(4, Some("Ann"), "ann"), user(4, Some("Ann"), "ann"), user(5, Some("Ben"), "ben")]);
    assert_eq!(sorted.len(), 2);
}

#[test]
fn roster_of_nothing_is_empty() {
    assert!(roster(Vec::new()).is_empty());
}
