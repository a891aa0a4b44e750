//! Error alert with a retry action.

use dioxus::prelude::*;

/// An error alert that displays a message with a retry button.
#[component]
pub fn ErrorAlert(
    /// The error message to display
    message: String,
    /// Label of the retry button
    retry_label: String,
    /// Called when the retry button is clicked
    on_retry: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "alert alert-danger", role: "alert",
            "{message}"
            button {
                class: "btn btn-outline-danger btn-sm ml-2",
                onclick: move |_| on_retry.call(()),
                "{retry_label}"
            }
        }
    }
}
