//! Navigation side effects.
//!
//! Route resolution is pure; this module carries out its redirects and
//! keeps the state attached to the last redirect so the login flow can
//! send the user back.

use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::routing::{NavState, Redirect};

/// State attached to the most recent redirect
#[derive(Clone, Copy)]
pub struct NavStateContext {
    state: Signal<Option<NavState>>,
}

impl NavStateContext {
    pub fn get(&self) -> Option<NavState> {
        (self.state)()
    }

    /// Take the state, leaving none behind
    pub fn take(&self) -> Option<NavState> {
        let mut state = self.state;
        let taken = state.write().take();
        taken
    }

    fn set(&self, value: Option<NavState>) {
        let mut state = self.state;
        state.set(value);
    }
}

/// Initialize navigation state provider - call once at app root
pub fn use_nav_state_provider() {
    let state = use_signal(|| None);
    use_context_provider(|| NavStateContext { state });
}

/// Get navigation state - use in any component
pub fn use_nav_state() -> NavStateContext {
    use_context::<NavStateContext>()
}

/// Replace the current history entry with `href`.
pub fn replace_with(nav: Navigator, href: &str) {
    if let Some(failure) = nav.replace(href) {
        tracing::warn!("Navigation to {} failed: {:?}", href, failure);
    }
}

/// Performs `redirect` once mounted, recording its state first.
#[component]
pub fn Navigate(redirect: Redirect) -> Element {
    let nav = use_navigator();
    let nav_state = use_nav_state();

    use_effect(move || {
        nav_state.set(redirect.to.state.clone());
        replace_with(nav, &redirect.to.href());
    });

    rsx! {}
}
