//! Role gate evaluated on every navigation to a protected route.
//!
//! The gate is a pure function of the route's required roles and the current
//! session; it keeps no state between calls and never talks to the backend.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::model::{Role, Session};
use crate::routes::{LOGIN_PATH, UNAUTHORIZED_PATH};

/// Outcome of one gate check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    /// No session: send the visitor to the login page.
    RedirectToLogin,
    /// Signed in, but the role is not in the route's allowed set.
    RedirectToUnauthorized,
}

impl GateDecision {
    /// Path the navigation is replaced with, if denied.
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToUnauthorized => Some(UNAUTHORIZED_PATH),
        }
    }
}

/// Decide whether `session` may enter a route requiring `required` roles.
///
/// An empty `required` set admits any signed-in user.
#[must_use]
pub fn authorize(required: &[Role], session: Option<&Session>) -> GateDecision {
    let Some(session) = session else {
        return GateDecision::RedirectToLogin;
    };
    if !required.is_empty() && !required.contains(&session.role) {
        return GateDecision::RedirectToUnauthorized;
    }
    GateDecision::Allow
}
