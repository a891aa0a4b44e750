//! Public booking form.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::locale::use_catalog;
use crate::app::notifications::use_notifications;
use crate::routing::RouteContext;

pub(super) fn render(context: RouteContext) -> Element {
    rsx! { BookingFormView { context } }
}

#[component]
fn BookingFormView(context: RouteContext) -> Element {
    let catalog = use_catalog();
    let notifications = use_notifications();
    // Links from offers prefill the date: /bookingform?date=2026-07-01
    let mut date = use_signal(|| context.query_value("date").unwrap_or_default().to_string());
    let mut full_name = use_signal(String::new);
    let mut guests = use_signal(|| "2".to_string());

    let sent_title = catalog.message("booking-sent");
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        tracing::info!("Booking request for {} guest(s) on {}", guests(), date());
        notifications.success(sent_title.clone(), full_name());
        full_name.set(String::new());
    };

    rsx! {
        Layout { title_key: "view-bookingform-title",
            form { class: "booking-form", onsubmit: on_submit,
                label {
                    {catalog.message("booking-name")}
                    input {
                        r#type: "text",
                        required: true,
                        value: "{full_name}",
                        oninput: move |evt| full_name.set(evt.value()),
                    }
                }
                label {
                    {catalog.message("booking-date")}
                    input {
                        r#type: "date",
                        required: true,
                        value: "{date}",
                        oninput: move |evt| date.set(evt.value()),
                    }
                }
                label {
                    {catalog.message("booking-guests")}
                    input {
                        r#type: "number",
                        min: "1",
                        value: "{guests}",
                        oninput: move |evt| guests.set(evt.value()),
                    }
                }
                button { r#type: "submit", class: "btn btn-primary",
                    {catalog.message("booking-submit")}
                }
            }
        }
    }
}
