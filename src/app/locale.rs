//! Locale context and the text-direction effect.
//!
//! The current locale key lives in a signal. An effect subscribed to it
//! re-applies the direction marker on the document body whenever it
//! changes, replacing the one-shot constructor toggle.

use dioxus::prelude::*;
use std::rc::Rc;

use super::storage;
use crate::i18n::{Catalog, CatalogTable};

const LOCALE_STORAGE_KEY: &str = "portal-locale";

#[derive(Clone, Copy)]
pub struct LocaleContext {
    current: Signal<String>,
}

impl LocaleContext {
    pub fn get(&self) -> String {
        (self.current)()
    }

    /// Current key without subscribing the caller
    pub fn peek(&self) -> String {
        self.current.peek().clone()
    }

    /// Set and persist locale
    pub fn set(&self, key: &str) {
        storage::save(LOCALE_STORAGE_KEY, key);
        let mut current = self.current;
        current.set(key.to_string());
    }
}

/// Initialize locale context provider - call once at app root, after the
/// catalog table has been provided.
pub fn use_locale_provider(default_locale: String) -> LocaleContext {
    let current = use_signal(move || storage::load(LOCALE_STORAGE_KEY).unwrap_or(default_locale));
    let ctx = use_context_provider(|| LocaleContext { current });

    // Client-side only: keep the body direction marker in sync
    #[cfg(target_arch = "wasm32")]
    {
        let table = use_context::<CatalogTable>();
        use_effect(move || {
            let key = current();
            crate::direction::apply_direction_to_body(table.direction_for(&key));
        });
    }

    ctx
}

/// Get locale context - use in any component
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>()
}

/// Catalog for the current locale
pub fn use_catalog() -> Rc<Catalog> {
    let table = use_context::<CatalogTable>();
    let locale = use_locale();
    table.resolve(&locale.get())
}
