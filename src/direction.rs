//! Text direction and the root-element class toggle.
//!
//! Direction is a pure function of the active catalog. Applying it touches
//! only the element handed in, so the effect can run against a real DOM
//! node on the web target or a recording stub in tests.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Class marker applied to the root element.
    pub fn css_class(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Ltr => Direction::Rtl,
            Direction::Rtl => Direction::Ltr,
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::Rtl)
    }

    /// Value for the `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        self.css_class()
    }
}

/// Minimal view of an element's class list.
pub trait ClassList {
    fn add(&self, class: &str);
    fn remove(&self, class: &str);
}

/// Add the marker for `direction` and remove the opposite one.
pub fn apply_direction(root: &impl ClassList, direction: Direction) {
    root.add(direction.css_class());
    root.remove(direction.opposite().css_class());
    tracing::debug!("Applied text direction: {}", direction.as_str());
}

#[cfg(target_arch = "wasm32")]
impl ClassList for web_sys::DomTokenList {
    fn add(&self, class: &str) {
        if let Err(e) = self.add_1(class) {
            tracing::warn!("Failed to add class {}: {:?}", class, e);
        }
    }

    fn remove(&self, class: &str) {
        if let Err(e) = self.remove_1(class) {
            tracing::warn!("Failed to remove class {}: {:?}", class, e);
        }
    }
}

/// Apply `direction` to `document.body` (client-side only).
#[cfg(target_arch = "wasm32")]
pub fn apply_direction_to_body(direction: Direction) {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body());
    match body {
        Some(body) => apply_direction(&body.class_list(), direction),
        None => tracing::warn!("No document body, skipping direction update"),
    }
}
