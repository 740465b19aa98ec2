//! Static route table and navigation resolution.
//!
//! DESIGN
//! ======
//! The table is built once on first use and never mutated. Each rule pairs a
//! path pattern with a [`Page`] and a [`RouteAccess`]; `:name` segments
//! capture parameters. [`RouteTable::navigate`] is the single entry point
//! used by the client router and the CLI: it resolves the path, runs the
//! gate for protected rules, and returns what to render or where to go.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::gate::authorize;
use crate::model::{Role, Session};

pub const HOME_PATH: &str = "/home";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const PROFILE_PATH: &str = "/profile";
pub const STUDENT_PATH: &str = "/student";
pub const TEACHER_PATH: &str = "/teacher";
pub const MANAGER_PATH: &str = "/manager";
pub const NOT_FOUND_PATH: &str = "/404";
pub const UNAUTHORIZED_PATH: &str = "/401";

/// Screens the client can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Login,
    Register,
    Profile,
    StudentCourses,
    StudentCourse,
    Teacher,
    Manager,
    NotFound,
    Unauthorized,
}

/// Who may open a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    /// Requires a session; a non-empty slice also restricts the role.
    Protected(&'static [Role]),
}

/// One entry of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRule {
    pub pattern: &'static str,
    pub page: Page,
    pub access: RouteAccess,
}

impl RouteRule {
    const fn public(pattern: &'static str, page: Page) -> Self {
        Self { pattern, page, access: RouteAccess::Public }
    }

    const fn protected(pattern: &'static str, page: Page, roles: &'static [Role]) -> Self {
        Self { pattern, page, access: RouteAccess::Protected(roles) }
    }

    /// Roles the gate checks, or `None` for public routes.
    #[must_use]
    pub fn required_roles(&self) -> Option<&'static [Role]> {
        match self.access {
            RouteAccess::Public => None,
            RouteAccess::Protected(roles) => Some(roles),
        }
    }

    fn matches(&self, segments: &[&str]) -> Option<BTreeMap<String, String>> {
        let pattern: Vec<&str> = split_segments(self.pattern);
        if pattern.len() != segments.len() {
            return None;
        }
        let mut params = BTreeMap::new();
        for (expected, actual) in pattern.iter().zip(segments) {
            if let Some(name) = expected.strip_prefix(':') {
                params.insert(name.to_owned(), (*actual).to_owned());
            } else if expected != actual {
                return None;
            }
        }
        Some(params)
    }
}

/// A resolved path: the rule that matched and any captured parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub rule: RouteRule,
    pub params: BTreeMap<String, String>,
}

/// Result of a navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Render {
        page: Page,
        params: BTreeMap<String, String>,
    },
    /// Replace the current location with this path.
    Redirect(&'static str),
}

static STANDARD: LazyLock<RouteTable> = LazyLock::new(|| RouteTable {
    rules: vec![
        RouteRule::public(HOME_PATH, Page::Home),
        RouteRule::public(LOGIN_PATH, Page::Login),
        RouteRule::public(REGISTER_PATH, Page::Register),
        RouteRule::protected(PROFILE_PATH, Page::Profile, &[]),
        RouteRule::protected(STUDENT_PATH, Page::StudentCourses, &[Role::Student]),
        RouteRule::protected("/student/:id", Page::StudentCourse, &[Role::Student]),
        RouteRule::protected(TEACHER_PATH, Page::Teacher, &[Role::Teacher]),
        RouteRule::protected(MANAGER_PATH, Page::Manager, &[Role::Manager]),
        RouteRule::public(NOT_FOUND_PATH, Page::NotFound),
        RouteRule::public(UNAUTHORIZED_PATH, Page::Unauthorized),
    ],
});

/// Immutable set of route rules.
#[derive(Clone, Debug)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    /// The application's route table.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// First rule rendering `page`.
    #[must_use]
    pub fn rule_for(&self, page: Page) -> Option<&RouteRule> {
        self.rules.iter().find(|rule| rule.page == page)
    }

    /// Match `path` against the table, ignoring query, fragment and trailing
    /// slashes.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let segments = split_segments(strip_query(path));
        self.rules.iter().find_map(|rule| {
            rule.matches(&segments)
                .map(|params| RouteMatch { rule: *rule, params })
        })
    }

    /// Resolve `path` and run the gate against `session`.
    ///
    /// The root path redirects home; unmatched paths redirect to the
    /// not-found page.
    #[must_use]
    pub fn navigate(&self, path: &str, session: Option<&Session>) -> Navigation {
        if split_segments(strip_query(path)).is_empty() {
            return Navigation::Redirect(HOME_PATH);
        }
        let Some(found) = self.resolve(path) else {
            tracing::debug!(path, "no route matched");
            return Navigation::Redirect(NOT_FOUND_PATH);
        };
        if let Some(required) = found.rule.required_roles() {
            let decision = authorize(required, session);
            tracing::debug!(path, ?decision, "route gate evaluated");
            if let Some(target) = decision.redirect_target() {
                return Navigation::Redirect(target);
            }
        }
        Navigation::Render { page: found.rule.page, params: found.params }
    }
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or_default()
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
