//! Public landing page.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::locale::use_catalog;
use crate::routing::RouteContext;

pub(super) fn render(context: RouteContext) -> Element {
    rsx! { LandingView { context } }
}

#[component]
fn LandingView(context: RouteContext) -> Element {
    let catalog = use_catalog();
    // Campaign links append a section, e.g. /landing/summer
    let section = context.remainder().to_string();

    rsx! {
        Layout { title_key: "view-landing-title",
            section { class: "landing", "data-section": "{section}",
                h1 { {catalog.message("landing-headline")} }
                Link { to: "/bookingform", class: "btn btn-primary", {catalog.message("landing-cta")} }
            }
        }
    }
}
