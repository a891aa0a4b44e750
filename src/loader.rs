//! On-demand view loading.
//!
//! Views are fetched through a [`ViewSource`] the first time they are
//! navigated to. [`CachedLoader`] keeps successful loads for the rest of
//! the session and retries failed ones according to its [`RetryPolicy`].

use crate::routing::RouteContext;
use async_trait::async_trait;
use dioxus::prelude::Element;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// The portal's views, one per route table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewId {
    Main,
    App,
    User,
    Landing,
    BookingForm,
    Error,
}

impl ViewId {
    pub const ALL: [ViewId; 6] = [
        ViewId::Main,
        ViewId::App,
        ViewId::User,
        ViewId::Landing,
        ViewId::BookingForm,
        ViewId::Error,
    ];

    /// Name of the bundle the view ships in
    pub fn bundle(&self) -> &'static str {
        match self {
            ViewId::Main => "views",
            ViewId::App => "views-app",
            ViewId::User => "views-user",
            ViewId::Landing => "views-landing",
            ViewId::BookingForm => "views-bookingform",
            ViewId::Error => "views-error",
        }
    }

    /// Message id of the view title
    pub fn title_key(&self) -> &'static str {
        match self {
            ViewId::Main => "view-main-title",
            ViewId::App => "view-app-title",
            ViewId::User => "view-user-title",
            ViewId::Landing => "view-landing-title",
            ViewId::BookingForm => "view-bookingform-title",
            ViewId::Error => "view-error-title",
        }
    }
}

pub type RenderFn = fn(RouteContext) -> Element;

/// A loaded view: its id and renderable entry point.
#[derive(Clone, Copy)]
pub struct ViewModule {
    pub id: ViewId,
    pub render: RenderFn,
}

impl ViewModule {
    pub fn new(id: ViewId, render: RenderFn) -> Self {
        Self { id, render }
    }

    pub fn render(&self, context: RouteContext) -> Element {
        (self.render)(context)
    }
}

impl std::fmt::Debug for ViewModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewModule").field("id", &self.id).finish()
    }
}

impl PartialEq for ViewModule {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("view bundle {bundle} is not available")]
    NotFound { bundle: &'static str },
    #[error("failed to fetch view bundle {bundle}: {reason}")]
    Fetch { bundle: &'static str, reason: String },
}

/// Where view modules come from.
#[async_trait(?Send)]
pub trait ViewSource {
    async fn fetch(&self, view: ViewId) -> Result<ViewModule, LoadError>;
}

/// Loader interface used by the view host.
#[async_trait(?Send)]
pub trait ViewLoader {
    async fn load(&self, view: ViewId) -> Result<ViewModule, LoadError>;

    /// Whether `view` is already available without waiting
    fn is_loaded(&self, view: ViewId) -> bool;
}

/// How many times a single `load` call tries the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Whether another attempt follows failed attempt number `attempt` (1-based).
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Loader that caches successful loads. Failures are never cached, so a
/// later `load` (a manual retry) goes back to the source.
pub struct CachedLoader<S> {
    source: S,
    policy: RetryPolicy,
    cache: RefCell<HashMap<ViewId, ViewModule>>,
}

impl<S: ViewSource> CachedLoader<S> {
    pub fn new(source: S, policy: RetryPolicy) -> Self {
        Self {
            source,
            policy,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

#[async_trait(?Send)]
impl<S: ViewSource> ViewLoader for CachedLoader<S> {
    async fn load(&self, view: ViewId) -> Result<ViewModule, LoadError> {
        let cached = self.cache.borrow().get(&view).copied();
        if let Some(module) = cached {
            return Ok(module);
        }

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.source.fetch(view).await {
                Ok(module) => {
                    tracing::debug!("Loaded {} on attempt {}", view.bundle(), attempt);
                    self.cache.borrow_mut().insert(view, module);
                    return Ok(module);
                }
                Err(e) if self.policy.should_retry(attempt) => {
                    tracing::warn!("Attempt {} to load {} failed, retrying: {}", attempt, view.bundle(), e);
                }
                Err(e) => {
                    tracing::warn!("Giving up on {} after {} attempt(s): {}", view.bundle(), attempt, e);
                    return Err(e);
                }
            }
        }
    }

    fn is_loaded(&self, view: ViewId) -> bool {
        self.cache.borrow().contains_key(&view)
    }
}

/// Shared loader handle provided as app context.
#[derive(Clone)]
pub struct LoaderHandle(Rc<dyn ViewLoader>);

impl LoaderHandle {
    pub fn new(loader: impl ViewLoader + 'static) -> Self {
        Self(Rc::new(loader))
    }

    pub async fn load(&self, view: ViewId) -> Result<ViewModule, LoadError> {
        self.0.load(view).await
    }

    pub fn is_loaded(&self, view: ViewId) -> bool {
        self.0.is_loaded(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::prelude::*;
    use std::cell::Cell;

    fn blank(_: RouteContext) -> Element {
        rsx! {}
    }

    /// Source that fails a fixed number of times before succeeding.
    struct FlakySource {
        failures_left: Cell<u32>,
        fetches: Cell<u32>,
    }

    impl FlakySource {
        fn failing(times: u32) -> Self {
            Self {
                failures_left: Cell::new(times),
                fetches: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl ViewSource for FlakySource {
        async fn fetch(&self, view: ViewId) -> Result<ViewModule, LoadError> {
            self.fetches.set(self.fetches.get() + 1);
            if self.failures_left.get() > 0 {
                self.failures_left.set(self.failures_left.get() - 1);
                return Err(LoadError::Fetch {
                    bundle: view.bundle(),
                    reason: "network down".into(),
                });
            }
            Ok(ViewModule::new(view, blank))
        }
    }

    #[test]
    fn test_success_is_cached() {
        let loader = CachedLoader::new(FlakySource::failing(0), RetryPolicy::default());
        assert!(!loader.is_loaded(ViewId::App));

        let first = tokio_test::block_on(loader.load(ViewId::App)).unwrap();
        let second = tokio_test::block_on(loader.load(ViewId::App)).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.id, ViewId::App);
        assert!(loader.is_loaded(ViewId::App));
        assert!(!loader.is_loaded(ViewId::User));
        assert_eq!(loader.source().fetches.get(), 1);
    }

    #[test]
    fn test_retries_within_policy() {
        let loader = CachedLoader::new(FlakySource::failing(1), RetryPolicy::new(2));
        let module = tokio_test::block_on(loader.load(ViewId::User)).unwrap();
        assert_eq!(module.id, ViewId::User);
        assert_eq!(loader.source().fetches.get(), 2);
    }

    #[test]
    fn test_failure_is_not_cached() {
        let loader = CachedLoader::new(FlakySource::failing(2), RetryPolicy::new(2));

        let err = tokio_test::block_on(loader.load(ViewId::Landing)).unwrap_err();
        assert_eq!(
            err,
            LoadError::Fetch {
                bundle: "views-landing",
                reason: "network down".into()
            }
        );
        assert!(!loader.is_loaded(ViewId::Landing));

        // Manual retry goes back to the source
        assert!(tokio_test::block_on(loader.load(ViewId::Landing)).is_ok());
        assert_eq!(loader.source().fetches.get(), 3);
    }

    #[test]
    fn test_policy_has_at_least_one_attempt() {
        let policy = RetryPolicy::new(0);
        assert_eq!(policy.max_attempts(), 1);
        assert!(!policy.should_retry(1));
    }

    #[test]
    fn test_bundle_names_unique() {
        let mut bundles: Vec<_> = ViewId::ALL.iter().map(ViewId::bundle).collect();
        bundles.sort_unstable();
        bundles.dedup();
        assert_eq!(bundles.len(), ViewId::ALL.len());
    }

    #[test]
    fn test_handle_delegates() {
        let handle = LoaderHandle::new(CachedLoader::new(
            FlakySource::failing(0),
            RetryPolicy::default(),
        ));
        assert!(tokio_test::block_on(handle.load(ViewId::Error)).is_ok());
        assert!(handle.is_loaded(ViewId::Error));
    }
}
