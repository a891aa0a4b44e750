//! Globally mounted notification list.

use dioxus::prelude::*;

use crate::app::notifications::use_notifications;

/// Renders every queued notification; clicking one dismisses it.
#[component]
pub fn NotificationContainer() -> Element {
    let notifications = use_notifications();

    rsx! {
        div { class: "notification-container",
            for item in notifications.items() {
                div {
                    key: "{item.id}",
                    class: format!("notification {}", item.level.css_class()),
                    onclick: move |_| notifications.dismiss(item.id),
                    div { class: "notification-message",
                        h4 { class: "title", "{item.title}" }
                        if !item.message.is_empty() {
                            div { class: "message", "{item.message}" }
                        }
                    }
                }
            }
        }
    }
}
