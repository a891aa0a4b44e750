//! Dioxus application root.
//!
//! `App` provides the shared contexts (config, catalogs, locale, user,
//! color theme, notifications, view loader) and mounts the global widgets
//! around the router. Every URL is handed to [`ShellOutlet`], which asks
//! the route table what to do with it.

use dioxus::prelude::*;

pub mod auth_context;
pub mod color;
pub mod components;
pub mod locale;
pub mod navigation;
pub mod notifications;
pub mod storage;
pub mod views;

use crate::config::ShellConfig;
use crate::i18n::{CatalogTable, DEFAULT_LOCALE};
use crate::loader::{CachedLoader, LoaderHandle, RetryPolicy};
use crate::routing::{Location, Resolution, RouteTable};
use auth_context::{use_auth, use_auth_provider};
use color::use_color_provider;
use components::{ColorSwitcher, NotificationContainer, ViewHost};
use locale::use_locale_provider;
use navigation::{use_nav_state_provider, Navigate};
use notifications::use_notification_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        try_consume_context::<ShellConfig>().unwrap_or_else(|| {
            tracing::debug!("No shell config provided, using defaults");
            ShellConfig::default()
        })
    });

    let catalogs = use_hook(|| load_catalogs(&config.default_locale));
    let Some(catalogs) = catalogs else {
        return rsx! {
            div { class: "h-100 error-page", "Message catalogs failed to load." }
        };
    };

    use_context_provider(|| config.clone());
    let default_locale = catalogs.default_key().to_string();
    use_context_provider(|| catalogs);
    use_context_provider(RouteTable::standard);
    use_context_provider(|| {
        LoaderHandle::new(CachedLoader::new(
            views::registry(),
            RetryPolicy::new(config.view_load_attempts),
        ))
    });

    use_auth_provider();
    use_locale_provider(default_locale);
    use_color_provider();
    use_notification_provider();
    use_nav_state_provider();

    rsx! {
        div { class: "h-100",
            NotificationContainer {}
            if config.multi_color_active {
                ColorSwitcher {}
            }
            Router::<Route> {}
        }
    }
}

/// Built-in catalogs with the configured default, or the crate default if
/// the configured locale has no catalog.
fn load_catalogs(default_locale: &str) -> Option<CatalogTable> {
    match CatalogTable::builtin(default_locale) {
        Ok(table) => Some(table),
        Err(e) => {
            tracing::warn!("{}; falling back to {}", e, DEFAULT_LOCALE);
            CatalogTable::builtin(DEFAULT_LOCALE)
                .map_err(|e| tracing::error!("Failed to load message catalogs: {}", e))
                .ok()
        }
    }
}

/// Browser routes. Matching and guarding happen in [`RouteTable`]; the
/// router only captures the path and the raw query.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/?:..query")]
    Home { query: String },
    #[route("/:..segments?:..query")]
    Shell { segments: Vec<String>, query: String },
}

#[component]
fn Home(query: String) -> Element {
    rsx! {
        ShellOutlet { location: route_location("/", &query) }
    }
}

#[component]
fn Shell(segments: Vec<String>, query: String) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        ShellOutlet { location: route_location(&path, &query) }
    }
}

/// Location for a routed path and query. The fragment never reaches the
/// server, so it is only read from the browser.
fn route_location(path: &str, query: &str) -> Location {
    Location::from_parts(path, query, &browser_hash())
}

#[cfg(target_arch = "wasm32")]
fn browser_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_hash() -> String {
    String::new()
}

/// Resolves `location` against the route table and renders the outcome.
#[component]
fn ShellOutlet(location: Location) -> Element {
    let config = use_context::<ShellConfig>();
    let table = use_context::<RouteTable>();
    let auth = use_auth();

    let user = auth.user();
    match table.resolve(&location, user.as_ref(), config.demo_mode) {
        Resolution::Render { view, context } => rsx! {
            ViewHost { key: "{view:?}", view: view, context: context }
        },
        Resolution::Redirect(redirect) => {
            let target = redirect.to.href();
            rsx! {
                Navigate { key: "{target}", redirect: redirect }
            }
        }
    }
}
