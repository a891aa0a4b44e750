//! The portal's views.
//!
//! View modules are private: the shell reaches them only through the
//! loader, via [`registry`].

use async_trait::async_trait;
use std::collections::HashMap;

use crate::loader::{LoadError, RenderFn, ViewId, ViewModule, ViewSource};

mod app;
mod booking_form;
mod error;
mod home;
mod landing;
mod user;

/// View source backed by entry points linked into this binary.
pub struct StaticViews {
    entries: HashMap<ViewId, RenderFn>,
}

impl StaticViews {
    pub fn new(entries: impl IntoIterator<Item = (ViewId, RenderFn)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn contains(&self, view: ViewId) -> bool {
        self.entries.contains_key(&view)
    }
}

#[async_trait(?Send)]
impl ViewSource for StaticViews {
    async fn fetch(&self, view: ViewId) -> Result<ViewModule, LoadError> {
        self.entries
            .get(&view)
            .map(|render| ViewModule::new(view, *render))
            .ok_or(LoadError::NotFound {
                bundle: view.bundle(),
            })
    }
}

/// Every view the route table can resolve to.
pub fn registry() -> StaticViews {
    StaticViews::new([
        (ViewId::Main, home::render as RenderFn),
        (ViewId::App, app::render as RenderFn),
        (ViewId::User, user::render as RenderFn),
        (ViewId::Landing, landing::render as RenderFn),
        (ViewId::BookingForm, booking_form::render as RenderFn),
        (ViewId::Error, error::render as RenderFn),
    ])
}
