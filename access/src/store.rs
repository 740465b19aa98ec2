//! Persisted single-slot session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every consumer that needs to know who is signed in goes through
//! [`SessionStore`], so there is one decode path and one failure policy:
//! a missing, unreadable, or malformed entry reads as "logged out".
//! The backing medium (browser `localStorage`, a JSON file, memory) is a
//! [`SessionStorage`] implementation chosen by the embedding crate.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::model::Session;

/// Storage key holding the JSON-encoded session.
pub const SESSION_STORAGE_KEY: &str = "currentUser";

/// Error returned by a [`SessionStorage`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The medium is not reachable (no window, poisoned lock, ...).
    #[error("session storage unavailable")]
    Unavailable,
    #[error("session storage read failed: {0}")]
    Read(String),
    #[error("session storage write failed: {0}")]
    Write(String),
    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key/value medium behind a [`SessionStore`].
///
/// Mirrors the browser `Storage` API. Methods take `&self` because the
/// browser store is shared and interior-mutable.
pub trait SessionStorage {
    /// Read the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the medium cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the raw value for `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the medium cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`; removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the medium cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage, used by tests and server-side rendering.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        items.remove(key);
        Ok(())
    }
}

impl<T: SessionStorage + ?Sized> SessionStorage for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// The one session slot, persisted through a [`SessionStorage`] backend.
#[derive(Clone, Copy, Debug)]
pub struct SessionStore<S> {
    backend: S,
    key: &'static str,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Store using the default [`SESSION_STORAGE_KEY`].
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, SESSION_STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: &'static str) -> Self {
        Self { backend, key }
    }

    /// Read the current session.
    ///
    /// Returns `None` when nothing is stored, when the backend fails, or when
    /// the stored JSON does not decode into a [`Session`]. None of these are
    /// reported to the caller.
    pub fn current(&self) -> Option<Session> {
        let raw = match self.backend.get_item(self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "session read failed; treating as signed out");
                return None;
            }
        };
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(error = %e, "stored session is malformed; treating as signed out");
                None
            }
        }
    }

    /// Persist `session`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the session cannot be encoded or written.
    pub fn set_current(&self, session: &Session) -> Result<(), StorageError> {
        let raw = serde_json::to_string(session)?;
        self.backend.set_item(self.key, &raw)?;
        tracing::info!(user_id = session.id, role = %session.role, "session stored");
        Ok(())
    }

    /// Remove the persisted session.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the removal.
    pub fn clear_current(&self) -> Result<(), StorageError> {
        self.backend.remove_item(self.key)?;
        tracing::info!("session cleared");
        Ok(())
    }
}
