//! Route table and authentication guard.
//!
//! Resolution is pure: a location plus the current user and demo flag go
//! in, and either a view to render or a redirect comes out. The Dioxus
//! shell performs the navigation side effect.

use crate::auth::AuthUser;
use crate::loader::ViewId;
use serde::{Deserialize, Serialize};

pub const LOGIN_PATH: &str = "/user/login";
pub const ERROR_PATH: &str = "/error";
pub const APP_HOME_PATH: &str = "/app";

/// A browser location: path, query, fragment and navigation state.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    pub pathname: String,
    /// Query string including the leading `?`, or empty
    #[serde(default)]
    pub search: String,
    /// Fragment including the leading `#`, or empty
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub state: Option<NavState>,
}

/// State attached to a navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    /// Location the user originally asked for
    pub from: Box<Location>,
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: normalize(&pathname.into()),
            ..Self::default()
        }
    }

    /// Parse an app-relative href such as `/app/dashboard?tab=2#top`.
    ///
    /// The path is kept verbatim: `//host/app` or `/\app` stay paths and
    /// are never read as URL references.
    pub fn parse(href: &str) -> Self {
        let (rest, fragment) = href.split_once('#').unwrap_or((href, ""));
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        Self::from_parts(path, query, fragment)
    }

    /// Location from a path plus raw query and fragment, each with or
    /// without its leading `?` / `#`.
    pub fn from_parts(pathname: &str, query: &str, fragment: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        Self {
            pathname: normalize(pathname),
            search: prefixed('?', query),
            hash: prefixed('#', fragment),
            state: None,
        }
    }

    pub fn with_state(mut self, state: NavState) -> Self {
        self.state = Some(state);
        self
    }

    /// Path, query and fragment joined back into an href.
    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }

    /// Decoded query pairs in order of appearance.
    pub fn query(&self) -> Vec<(String, String)> {
        let raw = self.search.strip_prefix('?').unwrap_or(&self.search);
        url::form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect()
    }
}

fn prefixed(marker: char, value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{}{}", marker, value)
    }
}

fn normalize(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Everything a view receives from the router.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteContext {
    pub location: Location,
    /// Pattern of the rule that matched
    pub pattern: &'static str,
    /// Portion of the pathname matched by the pattern
    pub url: String,
    pub query: Vec<(String, String)>,
}

impl RouteContext {
    /// Pathname below the matched prefix, without a leading slash.
    pub fn remainder(&self) -> &str {
        self.location
            .pathname
            .get(self.url.len()..)
            .unwrap_or_default()
            .trim_start_matches('/')
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchKind {
    /// Matches the pattern and anything below it on a segment boundary
    Prefix,
    /// Matches the pattern only, with an optional trailing slash
    Exact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub kind: MatchKind,
    pub access: Access,
    pub view: ViewId,
}

impl RouteEntry {
    pub const fn new(pattern: &'static str, kind: MatchKind, access: Access, view: ViewId) -> Self {
        Self {
            pattern,
            kind,
            access,
            view,
        }
    }

    /// Matched portion of `pathname`, if this entry applies. Case-insensitive.
    pub fn matches(&self, pathname: &str) -> Option<String> {
        let path = normalize(pathname);
        let pattern = self.pattern.trim_end_matches('/');

        if pattern.is_empty() {
            // Root pattern
            return match self.kind {
                MatchKind::Exact if path != "/" => None,
                _ => Some("/".to_string()),
            };
        }

        let head = path.get(..pattern.len())?;
        if !head.eq_ignore_ascii_case(pattern) {
            return None;
        }

        let rest = &path[pattern.len()..];
        let accepted = match self.kind {
            MatchKind::Exact => rest.is_empty() || rest == "/",
            MatchKind::Prefix => rest.is_empty() || rest.starts_with('/'),
        };
        accepted.then(|| head.to_string())
    }
}

/// Where the navigation should go instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub to: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Resolution {
    Render { view: ViewId, context: RouteContext },
    Redirect(Redirect),
}

impl Resolution {
    pub fn view(&self) -> Option<ViewId> {
        match self {
            Resolution::Render { view, .. } => Some(*view),
            Resolution::Redirect(_) => None,
        }
    }

    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            Resolution::Redirect(redirect) => Some(redirect),
            Resolution::Render { .. } => None,
        }
    }
}

/// Render `view` when a user is present or demo mode is on; otherwise
/// send the visitor to the login page, remembering where they were going.
pub fn guard(
    view: ViewId,
    context: RouteContext,
    user: Option<&AuthUser>,
    demo_mode: bool,
) -> Resolution {
    if user.is_some() || demo_mode {
        return Resolution::Render { view, context };
    }

    tracing::debug!(
        "Unauthenticated access to {}, redirecting to {}",
        context.location.pathname,
        LOGIN_PATH
    );
    Resolution::Redirect(Redirect {
        to: Location::new(LOGIN_PATH).with_state(NavState {
            from: Box::new(context.location),
        }),
    })
}

/// Ordered route table; the first matching entry wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    /// The portal's route table.
    pub fn standard() -> Self {
        use Access::{Authenticated, Public};
        use MatchKind::{Exact, Prefix};

        Self::new(vec![
            RouteEntry::new("/app", Prefix, Authenticated, ViewId::App),
            RouteEntry::new("/user", Prefix, Public, ViewId::User),
            RouteEntry::new("/landing", Prefix, Public, ViewId::Landing),
            RouteEntry::new("/bookingform", Prefix, Public, ViewId::BookingForm),
            RouteEntry::new("/error", Exact, Public, ViewId::Error),
            RouteEntry::new("/", Exact, Public, ViewId::Main),
        ])
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// First entry matching `pathname`, with the matched url.
    pub fn find(&self, pathname: &str) -> Option<(&RouteEntry, String)> {
        self.entries
            .iter()
            .find_map(|entry| entry.matches(pathname).map(|url| (entry, url)))
    }

    pub fn resolve(&self, location: &Location, user: Option<&AuthUser>, demo_mode: bool) -> Resolution {
        let Some((entry, url)) = self.find(&location.pathname) else {
            tracing::debug!("No route for {}, redirecting to {}", location.pathname, ERROR_PATH);
            return Resolution::Redirect(Redirect {
                to: Location::new(ERROR_PATH),
            });
        };

        let context = RouteContext {
            location: location.clone(),
            pattern: entry.pattern,
            url,
            query: location.query(),
        };

        match entry.access {
            Access::Public => Resolution::Render {
                view: entry.view,
                context,
            },
            Access::Authenticated => guard(entry.view, context, user, demo_mode),
        }
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Where to go after a successful login.
///
/// Returns the remembered location when there is one outside the account
/// views, otherwise the application home.
pub fn return_target(state: Option<&NavState>) -> String {
    let account = RouteEntry::new("/user", MatchKind::Prefix, Access::Public, ViewId::User);
    state
        .map(|s| s.from.as_ref())
        .filter(|from| account.matches(&from.pathname).is_none())
        .map(Location::href)
        .unwrap_or_else(|| APP_HOME_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolve(path: &str, user: Option<&AuthUser>, demo: bool) -> Resolution {
        RouteTable::standard().resolve(&Location::parse(path), user, demo)
    }

    #[test]
    fn test_parse_location() {
        let location = Location::parse("/app/dashboard?tab=2&q=a%20b#top");
        assert_eq!(location.pathname, "/app/dashboard");
        assert_eq!(location.search, "?tab=2&q=a%20b");
        assert_eq!(location.hash, "#top");
        assert_eq!(
            location.query(),
            vec![("tab".into(), "2".into()), ("q".into(), "a b".into())]
        );
        assert_eq!(location.href(), "/app/dashboard?tab=2&q=a%20b#top");
    }

    #[test]
    fn test_parse_keeps_path_verbatim() {
        let location = Location::parse("//evil.example/app/dashboard?tab=1");
        assert_eq!(location.pathname, "//evil.example/app/dashboard");
        assert_eq!(location.search, "?tab=1");

        assert_eq!(Location::parse("/\\app").pathname, "/\\app");
    }

    #[test]
    fn test_host_like_paths_redirect_to_error() {
        for path in ["//x/app", "//evil.example/app/dashboard", "/\\app", "/\\app/dashboard"] {
            let resolution = resolve(path, None, false);
            assert_eq!(
                resolution.redirect().map(|r| r.to.pathname.as_str()),
                Some(ERROR_PATH),
                "path {}",
                path
            );
        }
    }

    #[test]
    fn test_from_parts_accepts_bare_or_prefixed() {
        let bare = Location::from_parts("bookingform", "date=2026-07-01", "top");
        let prefixed = Location::from_parts("/bookingform", "?date=2026-07-01", "#top");
        assert_eq!(bare, prefixed);
        assert_eq!(bare.href(), "/bookingform?date=2026-07-01#top");
        assert_eq!(Location::from_parts("/", "", "").href(), "/");
    }

    #[test]
    fn test_empty_path_is_root() {
        assert_eq!(Location::parse("").pathname, "/");
        assert_eq!(Location::new("").pathname, "/");
    }

    #[test]
    fn test_prefix_matches_on_segment_boundary() {
        let entry = RouteEntry::new("/user", MatchKind::Prefix, Access::Public, ViewId::User);
        assert_eq!(entry.matches("/user").as_deref(), Some("/user"));
        assert_eq!(entry.matches("/user/").as_deref(), Some("/user"));
        assert_eq!(entry.matches("/user/login").as_deref(), Some("/user"));
        assert_eq!(entry.matches("/USER/Login").as_deref(), Some("/USER"));
        assert_eq!(entry.matches("/username"), None);
        assert_eq!(entry.matches("/use"), None);
    }

    #[test]
    fn test_exact_matches_with_trailing_slash_only() {
        let entry = RouteEntry::new("/error", MatchKind::Exact, Access::Public, ViewId::Error);
        assert!(entry.matches("/error").is_some());
        assert!(entry.matches("/error/").is_some());
        assert!(entry.matches("/error/details").is_none());
    }

    #[test]
    fn test_root_exact() {
        let entry = RouteEntry::new("/", MatchKind::Exact, Access::Public, ViewId::Main);
        assert_eq!(entry.matches("/").as_deref(), Some("/"));
        assert_eq!(entry.matches("").as_deref(), Some("/"));
        assert!(entry.matches("/abc").is_none());
    }

    #[test]
    fn test_public_routes() {
        assert_eq!(resolve("/", None, false).view(), Some(ViewId::Main));
        assert_eq!(resolve("/user/login", None, false).view(), Some(ViewId::User));
        assert_eq!(resolve("/landing", None, false).view(), Some(ViewId::Landing));
        assert_eq!(resolve("/landing/offers", None, false).view(), Some(ViewId::Landing));
        assert_eq!(resolve("/bookingform/42", None, false).view(), Some(ViewId::BookingForm));
        assert_eq!(resolve("/error", None, false).view(), Some(ViewId::Error));
    }

    #[test]
    fn test_unauthenticated_app_redirects_to_login() {
        let resolution = resolve("/app/dashboard", None, false);
        let redirect = resolution.redirect().expect("should redirect");
        assert_eq!(redirect.to.pathname, LOGIN_PATH);
        let from = &redirect.to.state.as_ref().expect("state").from;
        assert_eq!(from.pathname, "/app/dashboard");
    }

    #[test]
    fn test_redirect_state_keeps_whole_location() {
        let original = Location::parse("/app/bookings?page=3#list");
        let resolution = RouteTable::standard().resolve(&original, None, false);
        let redirect = resolution.redirect().unwrap();
        assert_eq!(
            redirect.to.state,
            Some(NavState {
                from: Box::new(original)
            })
        );
    }

    #[test]
    fn test_authenticated_app_renders_with_original_location() {
        let user = AuthUser::new(json!({"id": 1}));
        let original = Location::parse("/app/dashboard?tab=2");
        match RouteTable::standard().resolve(&original, Some(&user), false) {
            Resolution::Render { view, context } => {
                assert_eq!(view, ViewId::App);
                assert_eq!(context.location, original);
                assert_eq!(context.pattern, "/app");
                assert_eq!(context.url, "/app");
                assert_eq!(context.remainder(), "dashboard");
                assert_eq!(context.query_value("tab"), Some("2"));
            }
            other => panic!("expected render, got {:?}", other),
        }
    }

    #[test]
    fn test_demo_mode_opens_app() {
        assert_eq!(resolve("/app", None, true).view(), Some(ViewId::App));
    }

    #[test]
    fn test_unknown_paths_redirect_to_error() {
        for path in ["/unknown/xyz", "/abc", "/error/details", "/apps", "/userx"] {
            let resolution = resolve(path, None, false);
            let redirect = resolution.redirect().unwrap_or_else(|| panic!("{} should redirect", path));
            assert_eq!(redirect.to.pathname, ERROR_PATH);
            assert!(redirect.to.state.is_none());
        }
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(vec![
            RouteEntry::new("/user", MatchKind::Prefix, Access::Public, ViewId::User),
            RouteEntry::new("/user/login", MatchKind::Exact, Access::Public, ViewId::Landing),
        ]);
        let (entry, _) = table.find("/user/login").unwrap();
        assert_eq!(entry.view, ViewId::User);
    }

    #[test]
    fn test_return_target() {
        assert_eq!(return_target(None), APP_HOME_PATH);

        let state = NavState {
            from: Box::new(Location::parse("/app/bookings?page=3")),
        };
        assert_eq!(return_target(Some(&state)), "/app/bookings?page=3");

        let loop_state = NavState {
            from: Box::new(Location::parse("/user/login")),
        };
        assert_eq!(return_target(Some(&loop_state)), APP_HOME_PATH);
    }
}
