//! Layout component wrapping all views.

use dioxus::prelude::*;

use crate::app::auth_context::use_auth;
use crate::app::locale::{use_catalog, use_locale};
use crate::i18n::CatalogTable;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Message id of the page title (shown in browser tab)
    pub title_key: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all views.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("PORTAL_VERSION");
    let git_sha = env!("PORTAL_GIT_SHA");
    let catalog = use_catalog();
    let locale = use_locale();
    let auth = use_auth();
    let table = use_context::<CatalogTable>();

    let app_title = catalog.message("app-title");
    let full_title = format!("{} - {}", catalog.message(&props.title_key), app_title);
    let current = catalog.key().to_string();
    let locales: Vec<String> = table.keys().into_iter().map(str::to_string).collect();

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }

        header { class: "navbar",
            Link { to: "/", class: "navbar-logo", strong { "{app_title}" } }
            nav {
                Link { to: "/landing", {catalog.message("view-landing-title")} }
                Link { to: "/bookingform", {catalog.message("view-bookingform-title")} }
                if auth.is_authenticated() {
                    Link { to: "/app", {catalog.message("view-app-title")} }
                } else {
                    Link { to: "/user/login", {catalog.message("user-login-submit")} }
                }
            }
            label { class: "locale-select",
                {catalog.message("locale-label")}
                select {
                    onchange: move |evt| locale.set(&evt.value()),
                    for key in locales {
                        option { selected: key == current, value: "{key}", "{key}" }
                    }
                }
            }
        }
        main { class: "container",
            {props.children}
        }
        footer { class: "page-footer",
            small { class: "text-muted", "{app_title} v{version} ({git_sha})" }
        }
    }
}
