//! Color theme switcher.

use dioxus::prelude::*;

use crate::app::color::{use_color, ColorTheme};
use crate::app::locale::use_catalog;

/// Buttons for each color theme; the active one is highlighted.
#[component]
pub fn ColorSwitcher() -> Element {
    let color = use_color();
    let catalog = use_catalog();
    let active = color.get();

    rsx! {
        div { class: "theme-colors",
            p { class: "text-muted mb-2", {catalog.message("color-switcher-title")} }
            for theme in ColorTheme::ALL {
                button {
                    class: if theme == active { "theme-color active" } else { "theme-color" },
                    "data-theme": theme.as_str(),
                    onclick: move |_| color.set(theme),
                    {catalog.message(theme.label_key())}
                }
            }
        }
    }
}
