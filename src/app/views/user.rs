//! Authentication and account views.
//!
//! Sub-paths: `login` (default), `register`, `forgot-password`. Anything
//! else goes to the error view.

use dioxus::prelude::*;
use serde_json::json;

use crate::app::auth_context::use_auth;
use crate::app::components::Layout;
use crate::app::locale::use_catalog;
use crate::app::navigation::{replace_with, use_nav_state, Navigate};
use crate::auth::AuthUser;
use crate::routing::{return_target, Location, Redirect, RouteContext, ERROR_PATH};

pub(super) fn render(context: RouteContext) -> Element {
    rsx! { UserView { context } }
}

#[component]
fn UserView(context: RouteContext) -> Element {
    match context.remainder().trim_end_matches('/') {
        "" | "login" => rsx! { Login {} },
        "register" => rsx! { Register {} },
        "forgot-password" => rsx! { ForgotPassword {} },
        _ => {
            let to_error = Redirect {
                to: Location::new(ERROR_PATH),
            };
            rsx! {
                Navigate { redirect: to_error }
            }
        }
    }
}

#[component]
fn Login() -> Element {
    let catalog = use_catalog();
    let auth = use_auth();
    let nav_state = use_nav_state();
    let nav = use_navigator();
    let mut name = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let entered = name().trim().to_string();
        if entered.is_empty() {
            return;
        }
        auth.login(AuthUser::new(json!({ "id": entered.to_lowercase(), "name": entered })));
        let target = return_target(nav_state.take().as_ref());
        replace_with(nav, &target);
    };

    rsx! {
        Layout { title_key: "view-user-title",
            form { class: "auth-card", onsubmit: on_submit,
                h2 { {catalog.message("user-login-heading")} }
                label {
                    {catalog.message("user-login-name")}
                    input {
                        r#type: "text",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                }
                button { r#type: "submit", class: "btn btn-primary",
                    {catalog.message("user-login-submit")}
                }
                div { class: "auth-links",
                    Link { to: "/user/register", {catalog.message("user-register-heading")} }
                    Link { to: "/user/forgot-password", {catalog.message("user-forgot-heading")} }
                }
            }
        }
    }
}

#[component]
fn Register() -> Element {
    let catalog = use_catalog();

    rsx! {
        Layout { title_key: "view-user-title",
            div { class: "auth-card",
                h2 { {catalog.message("user-register-heading")} }
                Link { to: "/user/login", class: "btn btn-primary", {catalog.message("user-register-submit")} }
            }
        }
    }
}

#[component]
fn ForgotPassword() -> Element {
    let catalog = use_catalog();

    rsx! {
        Layout { title_key: "view-user-title",
            div { class: "auth-card",
                h2 { {catalog.message("user-forgot-heading")} }
                Link { to: "/user/login", {catalog.message("user-login-submit")} }
            }
        }
    }
}
