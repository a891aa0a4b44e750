//! Color theme management with localStorage persistence.
//!
//! Provides a color theme context used by the color switcher.

use dioxus::prelude::*;

use super::storage;
use crate::direction::ClassList;

const COLOR_STORAGE_KEY: &str = "portal-color";

/// Color theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorTheme {
    #[default]
    Light,
    Dark,
    Ocean,
    Forest,
}

impl ColorTheme {
    pub const ALL: [ColorTheme; 4] = [
        ColorTheme::Light,
        ColorTheme::Dark,
        ColorTheme::Ocean,
        ColorTheme::Forest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTheme::Light => "light",
            ColorTheme::Dark => "dark",
            ColorTheme::Ocean => "ocean",
            ColorTheme::Forest => "forest",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => ColorTheme::Dark,
            "ocean" => ColorTheme::Ocean,
            "forest" => ColorTheme::Forest,
            _ => ColorTheme::Light,
        }
    }

    /// Message id of the switcher label
    pub fn label_key(&self) -> &'static str {
        match self {
            ColorTheme::Light => "color-light",
            ColorTheme::Dark => "color-dark",
            ColorTheme::Ocean => "color-blue",
            ColorTheme::Forest => "color-green",
        }
    }

    /// CSS class applied to the document element
    pub fn css_class(&self) -> &'static str {
        match self {
            ColorTheme::Light => "theme-light",
            ColorTheme::Dark => "theme-dark",
            ColorTheme::Ocean => "theme-ocean",
            ColorTheme::Forest => "theme-forest",
        }
    }
}

/// Replace whatever theme class is present with the one for `theme`.
pub fn apply_color_theme(root: &impl ClassList, theme: ColorTheme) {
    for other in ColorTheme::ALL.iter().filter(|t| **t != theme) {
        root.remove(other.css_class());
    }
    root.add(theme.css_class());
}

/// Global color theme state shared via context
#[derive(Clone, Copy)]
pub struct ColorContext {
    pub current: Signal<ColorTheme>,
}

impl ColorContext {
    pub fn get(&self) -> ColorTheme {
        (self.current)()
    }

    /// Set and persist theme
    pub fn set(&self, theme: ColorTheme) {
        let mut current = self.current;
        current.set(theme);
        storage::save(COLOR_STORAGE_KEY, theme.as_str());

        #[cfg(target_arch = "wasm32")]
        apply_to_document(theme);
    }
}

/// Initialize color context provider - call once at app root
pub fn use_color_provider() {
    let current = use_signal(ColorTheme::default);
    use_context_provider(|| ColorContext { current });

    // Client-side only: load from localStorage and apply
    #[cfg(target_arch = "wasm32")]
    {
        let mut current = current;
        use_effect(move || {
            let saved = storage::load(COLOR_STORAGE_KEY)
                .map(|value| ColorTheme::parse(&value))
                .unwrap_or_default();
            current.set(saved);
            apply_to_document(saved);
        });
    }
}

/// Get color context - use in any component
pub fn use_color() -> ColorContext {
    use_context::<ColorContext>()
}

#[cfg(target_arch = "wasm32")]
fn apply_to_document(theme: ColorTheme) {
    if let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        apply_color_theme(&root.class_list(), theme);
    }
}
