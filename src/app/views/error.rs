//! Error display view.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::locale::use_catalog;
use crate::routing::RouteContext;

pub(super) fn render(_context: RouteContext) -> Element {
    rsx! { ErrorView {} }
}

#[component]
fn ErrorView() -> Element {
    let catalog = use_catalog();

    rsx! {
        Layout { title_key: "view-error-title",
            div { class: "error-page",
                h1 { class: "display-1", "404" }
                p { {catalog.message("error-not-found")} }
                Link { to: "/", class: "btn btn-primary", {catalog.message("error-go-home")} }
            }
        }
    }
}
