//! Top navigation bar with role-aware links.
//!
//! DESIGN
//! ======
//! Links are derived from the session role so users only see destinations
//! the route gate would admit them to.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use access::routes::{
    HOME_PATH, LOGIN_PATH, MANAGER_PATH, PROFILE_PATH, REGISTER_PATH, STUDENT_PATH, TEACHER_PATH,
};
use access::{Role, Session};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::use_session;

/// `(href, label)` pairs for the current identity.
pub fn nav_links(session: Option<&Session>) -> Vec<(&'static str, &'static str)> {
    let mut links = vec![(HOME_PATH, "Home")];
    match session.map(|s| s.role) {
        None => {
            links.push((LOGIN_PATH, "Sign In"));
            links.push((REGISTER_PATH, "Sign Up"));
            return links;
        }
        Some(Role::Student) => links.push((STUDENT_PATH, "My Courses")),
        Some(Role::Teacher) => links.push((TEACHER_PATH, "My Students")),
        Some(Role::Manager) => links.push((MANAGER_PATH, "Enrollments")),
    }
    links.push((PROFILE_PATH, "Profile"));
    links
}

#[component]
pub fn NavBar() -> impl IntoView {
    let session = use_session();

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Private School"</span>
            <ul class="nav-bar__links">
                {move || {
                    nav_links(session.get().as_ref())
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li class="nav-bar__item">
                                    <A href=href>{label}</A>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <span class="nav-bar__user">
                {move || session.get().map(|s| s.display_name().to_owned()).unwrap_or_default()}
            </span>
        </nav>
    }
}
