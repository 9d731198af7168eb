//! Session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one [`SessionContext`] per page load and provides it through
//! Leptos context. Route guards, navigation shells, and pages read it; only
//! `login`, `logout`, and the one-time `hydrate` write it.
//!
//! DESIGN
//! ======
//! The context is a handle: clones share the same reactive cell and the same
//! storage, so a login performed anywhere is visible to every consumer.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{UserProfile, UserType};
use crate::util::session_store::{SessionError, SessionStore, StoredSession};

/// Authentication state of the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Storage has not been read yet; no routing decision may be made.
    #[default]
    Loading,
    Authenticated(UserProfile),
    Unauthenticated,
}

impl SessionState {
    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            SessionState::Loading | SessionState::Unauthenticated => None,
        }
    }

    #[must_use]
    pub fn user_type(&self) -> Option<UserType> {
        self.user().map(|user| user.user_type)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

impl From<StoredSession> for SessionState {
    fn from(stored: StoredSession) -> Self {
        match stored {
            StoredSession::Complete { user, .. } => SessionState::Authenticated(user),
            StoredSession::Empty | StoredSession::Partial => SessionState::Unauthenticated,
        }
    }
}

/// Shared handle to the tab's session.
#[derive(Clone)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    store: SessionStore,
}

impl SessionContext {
    /// New context in the `Loading` state. Call [`SessionContext::hydrate`]
    /// to resolve it from storage.
    pub fn new(store: SessionStore) -> Self {
        Self { state: RwSignal::new(SessionState::Loading), store }
    }

    /// Resolve `Loading` from storage. Later calls are no-ops.
    pub fn hydrate(&self) {
        if !self.state.with_untracked(SessionState::is_loading) {
            return;
        }
        let resolved = SessionState::from(self.store.load());
        leptos::logging::log!("session: hydrated (authenticated: {})", resolved.is_authenticated());
        self.state.set(resolved);
    }

    /// Current state, tracked.
    pub fn state(&self) -> SessionState {
        self.state.get()
    }

    /// Signed-in user. `None` while loading or when signed out.
    pub fn user(&self) -> Option<UserProfile> {
        self.state.with(|s| s.user().cloned())
    }

    pub fn loading(&self) -> bool {
        self.state.with(SessionState::is_loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// Persist `(token, user)` and switch to `Authenticated` before returning.
    ///
    /// # Errors
    ///
    /// Returns the storage failure; the session is then `Unauthenticated`
    /// and storage holds neither half.
    pub fn login(&self, token: &str, user: UserProfile) -> Result<(), SessionError> {
        match self.store.write_session(token, &user) {
            Ok(()) => {
                leptos::logging::log!("session: signed in as {} ({})", user.email, user.user_type);
                self.state.set(SessionState::Authenticated(user));
                Ok(())
            }
            Err(e) => {
                self.state.set(SessionState::Unauthenticated);
                Err(e)
            }
        }
    }

    /// Clear storage and switch to `Unauthenticated`.
    pub fn logout(&self) {
        self.store.clear_session();
        self.state.set(SessionState::Unauthenticated);
        leptos::logging::log!("session: signed out");
    }
}
