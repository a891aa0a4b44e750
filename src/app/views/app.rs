//! Main authenticated application view.

use dioxus::prelude::*;
use fluent_bundle::FluentArgs;

use crate::app::auth_context::use_auth;
use crate::app::components::Layout;
use crate::app::locale::use_catalog;
use crate::app::navigation::replace_with;
use crate::routing::RouteContext;

pub(super) fn render(context: RouteContext) -> Element {
    rsx! { AppView { context } }
}

#[component]
fn AppView(context: RouteContext) -> Element {
    let catalog = use_catalog();
    let auth = use_auth();
    let nav = use_navigator();

    // Demo mode lets visitors in without a user
    let name = auth
        .user()
        .map(|user| user.display_name())
        .unwrap_or_else(|| "demo".to_string());
    let mut args = FluentArgs::new();
    args.set("name", name);
    let welcome = catalog.format("app-welcome", Some(&args));

    let section = match context.remainder() {
        "" => "dashboard".to_string(),
        other => other.to_string(),
    };

    rsx! {
        Layout { title_key: "view-app-title",
            div { class: "app-view", "data-section": "{section}",
                h1 { "{welcome}" }
                if auth.is_authenticated() {
                    button {
                        class: "btn btn-outline-primary",
                        onclick: move |_| {
                            auth.logout();
                            replace_with(nav, "/");
                        },
                        {catalog.message("app-logout")}
                    }
                }
            }
        }
    }
}
