//! Loads a view on demand and renders it.
//!
//! Shows the loading placeholder while the view's bundle is in flight and
//! an error alert with a retry action if loading fails. Only this subtree
//! waits; the rest of the shell stays interactive.

use dioxus::prelude::*;

use crate::app::components::ErrorAlert;
use crate::app::locale::{use_catalog, use_locale};
use crate::app::notifications::use_notifications;
use crate::i18n::CatalogTable;
use crate::loader::{LoadError, LoaderHandle, ViewId};
use crate::routing::RouteContext;

#[component]
pub fn ViewHost(view: ViewId, context: RouteContext) -> Element {
    let loader = use_context::<LoaderHandle>();
    let notifications = use_notifications();
    let catalog = use_catalog();
    let table = use_context::<CatalogTable>();
    let locale = use_locale();

    let mut module = use_resource(move || {
        let loader = loader.clone();
        async move { loader.load(view).await }
    });

    // Surface each failed load once, in the locale active at that moment
    use_effect(move || {
        if let Some(Err(e)) = &*module.read() {
            let (title, body) = failure_notice(&table, &locale.peek(), e);
            notifications.error(title, body);
        }
    });

    let loaded = module.read().clone();
    match loaded {
        None => rsx! {
            div { class: "loading" }
        },
        Some(Ok(loaded_view)) => loaded_view.render(context),
        Some(Err(e)) => rsx! {
            ErrorAlert {
                message: format!("{} ({})", catalog.message("load-failed"), e),
                retry_label: catalog.message("load-retry"),
                on_retry: move |_| module.restart(),
            }
        },
    }
}

/// Notification title and body for a failed load.
fn failure_notice(table: &CatalogTable, locale: &str, error: &LoadError) -> (String, String) {
    (table.resolve(locale).message("load-failed"), error.to_string())
}
