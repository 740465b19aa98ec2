//! Session provider shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates exactly one [`SessionProvider`] and provides it as context.
//! Route guards, pages, and the API client all receive identity from it; no
//! component reads browser storage on its own. The provider keeps a reactive
//! copy of the persisted session so views update on sign-in and sign-out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use access::{ApiError, AuthHeaders, Session, SessionStore};
use leptos::prelude::*;

use crate::util::storage::BrowserStorage;

/// Reactive handle to the signed-in identity.
#[derive(Clone, Copy, Debug)]
pub struct SessionProvider {
    current: RwSignal<Option<Session>>,
    store: SessionStore<BrowserStorage>,
}

impl SessionProvider {
    /// Read the persisted session once and seed the reactive copy.
    pub fn load() -> Self {
        let store = SessionStore::new(BrowserStorage);
        let current = store.current();
        if let Some(session) = &current {
            log::info!("restored session for user {} ({})", session.id, session.role);
        }
        Self { current: RwSignal::new(current), store }
    }

    /// Current session; tracked by the reactive graph.
    pub fn get(&self) -> Option<Session> {
        self.current.get()
    }

    pub fn get_untracked(&self) -> Option<Session> {
        self.current.get_untracked()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.with(Option::is_some)
    }

    /// Persist `session` and publish it.
    ///
    /// A storage failure is logged; the session still applies to this tab.
    pub fn sign_in(&self, session: Session) {
        if let Err(e) = self.store.set_current(&session) {
            log::warn!("session not persisted: {e}");
        }
        self.current.set(Some(session));
    }

    /// Remove the persisted session and publish the signed-out state.
    pub fn sign_out(&self) {
        if let Err(e) = self.store.clear_current() {
            log::warn!("session not removed from storage: {e}");
        }
        self.current.set(None);
    }

    /// Bearer headers for a protected request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::AuthenticationRequired`] when signed out.
    pub fn auth_headers(&self) -> Result<AuthHeaders, ApiError> {
        self.current.with_untracked(|s| AuthHeaders::for_session(s.as_ref()))
    }
}

/// Fetch the provider installed by `App`.
///
/// # Panics
///
/// Panics when called outside the `App` component tree.
pub fn use_session() -> SessionProvider {
    expect_context::<SessionProvider>()
}
