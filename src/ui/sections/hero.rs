use dioxus::prelude::*;

use crate::{
    domain::{catalog::TRUST_BADGES, TrackingQuery, TrackingResult},
    infra::SharedBackend,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        scroll_to, theme,
    },
};

#[component]
pub fn Hero() -> Element {
    let mut dialog_open = use_signal(|| false);

    rsx! {
        section { class: "hero",
            div { class: "hero-overlay" }
            div { class: "container hero-content",
                div { class: "hero-pill", "✔ Trusted by 500+ dealerships across North America" }
                h1 { class: "hero-title",
                    "Your vehicles. "
                    span { class: "text-gold", "Across the border." }
                    " Faster."
                }
                p { class: "hero-sub",
                    "Door-to-door auto logistics Canada ↔ USA. "
                    span { class: "text-gold strong", "Fully bonded. Fully insured." }
                }
                div { class: "hero-ctas",
                    button {
                        class: "btn btn-primary btn-large",
                        onclick: move |_| scroll_to("quote"),
                        "Get instant quote →"
                    }
                    button {
                        class: "btn btn-outline-light btn-large",
                        onclick: move |_| dialog_open.set(true),
                        "🔍 Track shipment"
                    }
                }
                div { class: "trust-badges",
                    for badge in TRUST_BADGES {
                        div { class: "trust-badge", title: badge.description,
                            span { "🛡️" }
                            span { class: "trust-name", "{badge.name}" }
                        }
                    }
                }
            }
            div { class: "scroll-cue", "⌄" }
            TrackingDialog { open: dialog_open(), on_close: move |_| dialog_open.set(false) }
        }
    }
}

/// Starts a lookup for the typed reference; blank input and in-flight lookups are ignored.
fn start_lookup(
    backend: SharedBackend,
    reference: Signal<String>,
    mut is_tracking: Signal<bool>,
    mut result: Signal<Option<TrackingResult>>,
    toasts: Signal<Vec<ToastMessage>>,
) {
    if is_tracking() {
        return;
    }
    let Some(query) = TrackingQuery::parse(&reference()) else {
        return;
    };

    is_tracking.set(true);
    spawn(async move {
        match backend.track(&query).await {
            Ok(found) => result.set(Some(found)),
            Err(err) => {
                tracing::warn!(%err, reference = query.reference(), "tracking lookup failed");
                push_toast(toasts, ToastKind::Error, "Tracking unavailable", err.to_string());
            }
        }
        is_tracking.set(false);
    });
}

/// Stays mounted while hidden so a lookup started before closing still lands.
#[component]
fn TrackingDialog(open: bool, on_close: EventHandler<()>) -> Element {
    let backend = use_context::<SharedBackend>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut reference = use_signal(String::new);
    let is_tracking = use_signal(|| false);
    let result = use_signal(|| None::<TrackingResult>);

    let key_backend = backend.clone();
    let dialog_class = if open { "dialog-backdrop open" } else { "dialog-backdrop" };

    rsx! {
        div { class: dialog_class, onclick: move |_| on_close.call(()),
            div {
                class: "dialog",
                role: "dialog",
                aria_label: "Track Your Shipment",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "dialog-header",
                    h3 { "🔍 Track Your Shipment" }
                    button { class: "dialog-close", aria_label: "Close", onclick: move |_| on_close.call(()), "✕" }
                }
                div { class: "dialog-body",
                    label { r#for: "tracking", "Tracking / AWB / Container Number" }
                    input {
                        id: "tracking",
                        class: theme::input_class(false),
                        placeholder: "Enter tracking number",
                        value: reference(),
                        oninput: move |evt| reference.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                start_lookup(key_backend.clone(), reference, is_tracking, result, toasts);
                            }
                        },
                    }
                    button {
                        class: theme::BTN_PRIMARY_WIDE,
                        disabled: is_tracking() || reference().trim().is_empty(),
                        onclick: move |_| start_lookup(backend.clone(), reference, is_tracking, result, toasts),
                        if is_tracking() { "Tracking..." } else { "Track Shipment" }
                    }

                    if let Some(found) = result() {
                        div { class: "tracking-result",
                            div { class: "tracking-row",
                                span { class: "muted", "Status:" }
                                span { class: "pill pill-success", "{found.status}" }
                            }
                            div { class: "tracking-row",
                                span { class: "muted", "📍" }
                                span { "{found.location}" }
                            }
                            div { class: "tracking-row",
                                span { class: "muted", "🕒" }
                                span { "{found.eta}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
