//! Persisted session accessors: the `token` and `user` storage keys.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure accessor layer under `state::session`. No routing policy lives here;
//! this module only guarantees that the two halves of a session are written,
//! read, and cleared together.
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: unreadable or malformed data is logged and reported as
//! absent, so corrupt storage degrades to a logged-out visitor. Writes report
//! failures after rolling both keys back.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::Arc;

use crate::net::types::UserProfile;
use crate::util::storage::{KeyValueStorage, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("refusing to persist a blank token")]
    EmptyToken,
    #[error("failed to encode user profile: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to persist session: {0}")]
    Storage(#[from] StorageError),
}

/// What hydration found in storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredSession {
    /// Both halves present and well-formed.
    Complete { token: String, user: UserProfile },
    /// Neither half present.
    Empty,
    /// Exactly one usable half. Storage has already been cleared.
    Partial,
}

/// Reads and writes the persisted credential and profile.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl SessionStore {
    pub fn new(storage: impl KeyValueStorage + 'static) -> Self {
        Self { storage: Arc::new(storage) }
    }

    /// Stored credential, or `None` when missing, blank, or unreadable.
    pub fn read_token(&self) -> Option<String> {
        match self.storage.get(TOKEN_KEY) {
            Ok(Some(token)) if !token.trim().is_empty() => Some(token),
            Ok(_) => None,
            Err(e) => {
                leptos::logging::warn!("session: token read failed: {e}");
                None
            }
        }
    }

    /// Stored profile, or `None` when missing, unreadable, or not schema-valid.
    pub fn read_user(&self) -> Option<UserProfile> {
        let raw = match self.storage.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                leptos::logging::warn!("session: user read failed: {e}");
                return None;
            }
        };
        match serde_json::from_str::<UserProfile>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                leptos::logging::warn!("session: discarding malformed stored user: {e}");
                None
            }
        }
    }

    /// Persist a session. Profile first, then token; any failure clears both.
    ///
    /// A blank token is rejected before anything is written, since
    /// [`SessionStore::read_token`] would never read it back.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is blank, the profile cannot be encoded,
    /// or either write fails.
    pub fn write_session(&self, token: &str, user: &UserProfile) -> Result<(), SessionError> {
        if token.trim().is_empty() {
            leptos::logging::warn!("session: blank token, clearing session");
            self.clear_session();
            return Err(SessionError::EmptyToken);
        }
        let encoded = serde_json::to_string(user)?;
        let written = self
            .storage
            .set(USER_KEY, &encoded)
            .and_then(|()| self.storage.set(TOKEN_KEY, token));
        if let Err(e) = written {
            leptos::logging::warn!("session: write failed, rolling back: {e}");
            self.clear_session();
            return Err(e.into());
        }
        Ok(())
    }

    /// Remove both keys. Clearing an empty store is a no-op.
    pub fn clear_session(&self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage.remove(key) {
                leptos::logging::warn!("session: clear failed: {e}");
            }
        }
    }

    /// True iff both the token and a schema-valid profile are stored.
    pub fn derive_authenticated(&self) -> bool {
        self.read_token().is_some() && self.read_user().is_some()
    }

    /// Read both halves for hydration. A half-present session is treated as
    /// corruption and cleared.
    pub fn load(&self) -> StoredSession {
        match (self.read_token(), self.read_user()) {
            (Some(token), Some(user)) => StoredSession::Complete { token, user },
            (None, None) => {
                if self.has_leftovers() {
                    // Blank token or malformed profile: nothing usable, drop it.
                    self.clear_session();
                }
                StoredSession::Empty
            }
            (token, user) => {
                leptos::logging::warn!(
                    "session: partial session in storage (token: {}, user: {}), clearing",
                    token.is_some(),
                    user.is_some()
                );
                self.clear_session();
                StoredSession::Partial
            }
        }
    }

    fn has_leftovers(&self) -> bool {
        [TOKEN_KEY, USER_KEY]
            .iter()
            .any(|key| matches!(self.storage.get(key), Ok(Some(_))))
    }
}
