use super::*;
use access::Role;

fn session(role: Role) -> Session {
    Session {
        id: 1,
        name: "Ann".to_owned(),
        username: "ann".to_owned(),
        role,
        token: "t".to_owned(),
    }
}

#[test]
fn public_pages_never_redirect() {
    for page in [Page::Home, Page::Login, Page::Register, Page::NotFound, Page::Unauthorized] {
        assert_eq!(gate_redirect(page, None), None, "{page:?}");
    }
}

#[test]
fn protected_pages_send_anonymous_visitors_to_login() {
    for page in [Page::Profile, Page::StudentCourses, Page::StudentCourse, Page::Teacher, Page::Manager] {
        assert_eq!(gate_redirect(page, None), Some("/login"), "{page:?}");
    }
}

#[test]
fn wrong_role_goes_to_unauthorized() {
    assert_eq!(gate_redirect(Page::Teacher, Some(&session(Role::Student))), Some("/401"));
    assert_eq!(gate_redirect(Page::Manager, Some(&session(Role::Teacher))), Some("/401"));
    assert_eq!(gate_redirect(Page::StudentCourse, Some(&session(Role::Manager))), Some("/401"));
}

#[test]
fn matching_role_is_admitted() {
    assert_eq!(gate_redirect(Page::Teacher, Some(&session(Role::Teacher))), None);
    assert_eq!(gate_redirect(Page::Manager, Some(&session(Role::Manager))), None);
    assert_eq!(gate_redirect(Page::StudentCourses, Some(&session(Role::Student))), None);
}

#[test]
fn profile_admits_any_role() {
    for role in Role::ALL {
        assert_eq!(gate_redirect(Page::Profile, Some(&session(role))), None);
    }
}

#[test]
fn login_page_stays_open_to_signed_in_users() {
    for role in Role::ALL {
        assert_eq!(gate_redirect(Page::Login, Some(&session(role))), None);
    }
}
