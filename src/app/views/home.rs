//! Public home view.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::locale::use_catalog;
use crate::routing::RouteContext;

pub(super) fn render(_context: RouteContext) -> Element {
    rsx! { MainView {} }
}

#[component]
fn MainView() -> Element {
    let catalog = use_catalog();

    rsx! {
        Layout { title_key: "view-main-title",
            section { class: "hero",
                h1 { {catalog.message("main-headline")} }
                Link { to: "/bookingform", class: "btn btn-primary", {catalog.message("main-cta")} }
                Link { to: "/landing", class: "btn btn-link", {catalog.message("view-landing-title")} }
            }
        }
    }
}
