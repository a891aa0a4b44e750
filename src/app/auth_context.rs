//! Authenticated user context.
//!
//! Holds the current user for the whole app. On the web target the user
//! is restored from local storage before the first render, so a reload on
//! a guarded page does not bounce through the login view.

use dioxus::prelude::*;

use super::storage;
use crate::auth::{AuthUser, USER_STORAGE_KEY};

#[derive(Clone, Copy)]
pub struct AuthContext {
    user: Signal<Option<AuthUser>>,
}

impl AuthContext {
    pub fn user(&self) -> Option<AuthUser> {
        (self.user)()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    /// Set and persist the current user
    pub fn login(&self, user: AuthUser) {
        storage::save(USER_STORAGE_KEY, &user.to_json());
        tracing::info!("User {} logged in", user.display_name());
        let mut current = self.user;
        current.set(Some(user));
    }

    pub fn logout(&self) {
        storage::remove(USER_STORAGE_KEY);
        tracing::info!("User logged out");
        let mut current = self.user;
        current.set(None);
    }
}

/// Initialize auth context provider - call once at app root
pub fn use_auth_provider() -> AuthContext {
    let user = use_signal(|| storage::load(USER_STORAGE_KEY).and_then(|raw| AuthUser::from_json(&raw)));
    use_context_provider(|| AuthContext { user })
}

/// Get auth context - use in any component
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}
