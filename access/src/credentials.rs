//! Request credentials for protected and login calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected endpoints need `Authorization: Bearer <token>` built from the
//! current session. Building the header is a capability check: without a
//! usable session it fails with [`ApiError::AuthenticationRequired`] before
//! any request leaves the client.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::api::ApiError;
use crate::model::Session;
use crate::store::{SessionStorage, SessionStore};

/// Content type sent with every JSON request.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";

/// Header set for a role-protected request.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    authorization: String,
}

impl AuthHeaders {
    /// Build bearer headers for `session`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::AuthenticationRequired`] when there is no session
    /// or its token is blank.
    pub fn for_session(session: Option<&Session>) -> Result<Self, ApiError> {
        let Some(session) = session else {
            tracing::debug!("protected request refused: no session");
            return Err(ApiError::AuthenticationRequired);
        };
        let token = session.token.trim();
        if token.is_empty() {
            tracing::warn!(user_id = session.id, "protected request refused: session has no token");
            return Err(ApiError::AuthenticationRequired);
        }
        Ok(Self { authorization: format!("Bearer {token}") })
    }

    /// Build bearer headers from whatever session `store` currently holds.
    ///
    /// # Errors
    ///
    /// Same as [`AuthHeaders::for_session`].
    pub fn from_store<S: SessionStorage>(store: &SessionStore<S>) -> Result<Self, ApiError> {
        Self::for_session(store.current().as_ref())
    }

    /// HTTP Basic headers for the login call.
    #[must_use]
    pub fn basic(username: &str, password: &str) -> Self {
        let encoded = STANDARD.encode(format!("{username}:{password}"));
        Self { authorization: format!("Basic {encoded}") }
    }

    #[must_use]
    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    /// Name/value pairs to copy onto an outgoing request.
    #[must_use]
    pub fn pairs(&self) -> [(&'static str, &str); 2] {
        [
            (AUTHORIZATION, self.authorization.as_str()),
            (CONTENT_TYPE, JSON_CONTENT_TYPE),
        ]
    }
}

// Credentials stay out of logs.
impl std::fmt::Debug for AuthHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scheme = self.authorization.split(' ').next().unwrap_or_default();
        f.debug_struct("AuthHeaders").field("scheme", &scheme).finish_non_exhaustive()
    }
}
