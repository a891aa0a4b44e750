//! End-to-end routing scenarios: locale → direction marker, path + user →
//! render or redirect.

use booking_portal::auth::AuthUser;
use booking_portal::direction::{apply_direction, ClassList};
use booking_portal::i18n::{CatalogTable, DEFAULT_LOCALE};
use booking_portal::loader::ViewId;
use booking_portal::routing::{
    return_target, Location, Resolution, RouteTable, ERROR_PATH, LOGIN_PATH,
};
use serde_json::json;
use std::cell::RefCell;
use std::collections::BTreeSet;

#[derive(Default)]
struct BodyClasses(RefCell<BTreeSet<String>>);

impl BodyClasses {
    fn has(&self, class: &str) -> bool {
        self.0.borrow().contains(class)
    }
}

impl ClassList for BodyClasses {
    fn add(&self, class: &str) {
        self.0.borrow_mut().insert(class.to_string());
    }

    fn remove(&self, class: &str) {
        self.0.borrow_mut().remove(class);
    }
}

/// Applies the locale's direction and resolves `path`.
fn mount(
    locale: &str,
    user: Option<&AuthUser>,
    demo: bool,
    path: &str,
) -> (BodyClasses, Resolution) {
    let catalogs = CatalogTable::builtin(DEFAULT_LOCALE).unwrap();
    let body = BodyClasses::default();
    apply_direction(&body, catalogs.direction_for(locale));

    let resolution = RouteTable::standard().resolve(&Location::parse(path), user, demo);
    (body, resolution)
}

#[test]
fn english_visitor_is_sent_to_login() {
    let (body, resolution) = mount("en", None, false, "/app/dashboard");

    assert!(body.has("ltr"));
    assert!(!body.has("rtl"));

    let redirect = resolution.redirect().expect("expected redirect");
    assert_eq!(redirect.to.pathname, LOGIN_PATH);
    let from = &redirect.to.state.as_ref().expect("redirect state").from;
    assert_eq!(from.pathname, "/app/dashboard");
}

#[test]
fn arabic_user_sees_app_right_to_left() {
    let user = AuthUser::new(json!({"id": 1}));
    let (body, resolution) = mount("ar", Some(&user), false, "/app/dashboard");

    assert!(body.has("rtl"));
    assert!(!body.has("ltr"));

    match resolution {
        Resolution::Render { view, context } => {
            assert_eq!(view, ViewId::App);
            assert_eq!(context.location.pathname, "/app/dashboard");
        }
        other => panic!("expected app view, got {:?}", other),
    }
}

#[test]
fn unknown_path_goes_to_error() {
    let (_, resolution) = mount("en", None, false, "/unknown/xyz");
    assert_eq!(resolution.redirect().unwrap().to.pathname, ERROR_PATH);
}

#[test]
fn root_is_exact() {
    let (_, home) = mount("en", None, false, "/");
    assert_eq!(home.view(), Some(ViewId::Main));

    let (_, other) = mount("en", None, false, "/abc");
    assert_eq!(other.redirect().unwrap().to.pathname, ERROR_PATH);
}

#[test]
fn demo_mode_skips_login() {
    let (_, resolution) = mount("es", None, true, "/app/bookings?page=2");
    match resolution {
        Resolution::Render { view, context } => {
            assert_eq!(view, ViewId::App);
            assert_eq!(context.location.search, "?page=2");
        }
        other => panic!("expected app view, got {:?}", other),
    }
}

#[test]
fn login_returns_to_requested_page() {
    let (_, resolution) = mount("en", None, false, "/app/bookings?page=2#latest");
    let redirect = resolution.redirect().expect("expected redirect");

    assert_eq!(
        return_target(redirect.to.state.as_ref()),
        "/app/bookings?page=2#latest"
    );
}

#[test]
fn public_routes_need_no_user() {
    let public = [
        ("/user/login", ViewId::User),
        ("/landing", ViewId::Landing),
        ("/bookingform", ViewId::BookingForm),
        ("/error", ViewId::Error),
        ("/", ViewId::Main),
    ];
    for (path, expected) in public {
        let (_, resolution) = mount("en", None, false, path);
        assert_eq!(resolution.view(), Some(expected), "path {}", path);
    }
}
