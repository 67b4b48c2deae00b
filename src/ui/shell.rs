use dioxus::prelude::*;

use crate::{
    app::persist_preferences,
    domain::{catalog::COMPANY, is_valid_email, Currency, Language, Preferences},
    infra::SharedBackend,
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        scroll_to, scroll_to_top, theme,
    },
    util::{assets, today, version::version_label},
};

const NAV_LINKS: [(&str, &str); 6] = [
    ("services", "Services"),
    ("coverage", "Coverage"),
    ("how-it-works", "How it works"),
    ("about", "About"),
    ("careers", "Careers"),
    ("contact", "Contact"),
];

#[component]
pub fn Shell(children: Element) -> Element {
    rsx! {
        div { class: "site",
            Navigation {}
            main { id: "main-content", {children} }
            Footer {}
        }
    }
}

fn set_language(mut preferences: Signal<Preferences>, code: &str) {
    if let Some(language) = Language::from_code(code) {
        preferences.with_mut(|prefs| prefs.language = language);
        persist_preferences(&preferences);
    }
}

fn set_currency(mut preferences: Signal<Preferences>, code: &str) {
    if let Some(currency) = Currency::from_code(code) {
        preferences.with_mut(|prefs| prefs.currency = currency);
        persist_preferences(&preferences);
    }
}

#[component]
fn Navigation() -> Element {
    let preferences = use_context::<Signal<Preferences>>();
    let mut menu_open = use_signal(|| false);
    let prefs = preferences();

    rsx! {
        header { class: "nav",
            nav { class: "container nav-bar",
                a {
                    class: "nav-logo",
                    href: "#",
                    onclick: move |evt| {
                        evt.prevent_default();
                        scroll_to_top();
                    },
                    img { src: assets::logo_data_uri(), alt: "TYRAS Logistics logo" }
                }

                div { class: "nav-links",
                    for (id, label) in NAV_LINKS {
                        button {
                            class: "nav-link",
                            onclick: move |_| scroll_to(id),
                            "{label}"
                        }
                    }
                }

                div { class: "nav-controls",
                    PreferenceSelects { prefs, preferences }
                    button { class: theme::BTN_PRIMARY, onclick: move |_| scroll_to("quote"), "Get Quote" }
                }

                button {
                    class: "nav-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |_| menu_open.set(!menu_open()),
                    if menu_open() { "✕" } else { "☰" }
                }
            }

            if menu_open() {
                div { class: "container nav-mobile",
                    for (id, label) in NAV_LINKS {
                        button {
                            class: "nav-mobile-link",
                            onclick: move |_| {
                                scroll_to(id);
                                menu_open.set(false);
                            },
                            "{label}"
                        }
                    }
                    div { class: "nav-mobile-controls",
                        PreferenceSelects { prefs, preferences }
                    }
                    button {
                        class: theme::BTN_PRIMARY_WIDE,
                        onclick: move |_| {
                            scroll_to("quote");
                            menu_open.set(false);
                        },
                        "Get Quote"
                    }
                }
            }
        }
    }
}

#[component]
fn PreferenceSelects(prefs: Preferences, preferences: Signal<Preferences>) -> Element {
    rsx! {
        select {
            class: "nav-select",
            aria_label: "Language",
            onchange: move |evt| set_language(preferences, &evt.value()),
            for lang in Language::ALL {
                option {
                    value: lang.code(),
                    selected: lang == prefs.language,
                    "{lang.flag()} {lang.label()}"
                }
            }
        }
        select {
            class: "nav-select",
            aria_label: "Currency",
            onchange: move |evt| set_currency(preferences, &evt.value()),
            for currency in Currency::ALL {
                option {
                    value: currency.code(),
                    selected: currency == prefs.currency,
                    "{currency.symbol()} {currency.code()}"
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let backend = use_context::<SharedBackend>();
    let mut email = use_signal(String::new);
    let year = today().year();

    let on_subscribe = move |evt: FormEvent| {
        evt.prevent_default();
        let address = email().trim().to_string();
        if address.is_empty() {
            return;
        }
        if !is_valid_email(&address) {
            push_toast(
                toasts,
                ToastKind::Error,
                "Invalid email",
                "Please enter a valid email address.",
            );
            return;
        }

        let backend = backend.clone();
        spawn(async move {
            match backend.subscribe(&address).await {
                Ok(()) => {
                    email.set(String::new());
                    push_toast(
                        toasts,
                        ToastKind::Success,
                        "Subscribed!",
                        "You'll receive our monthly industry insights.",
                    );
                }
                Err(err) => {
                    tracing::warn!(%err, "newsletter signup failed");
                    push_toast(toasts, ToastKind::Error, "Subscription failed", err.to_string());
                }
            }
        });
    };

    rsx! {
        footer { class: "footer",
            div { class: "container footer-grid",
                div {
                    div { class: "footer-brand",
                        span { class: "footer-mark", "T" }
                        span { class: "footer-name", "{COMPANY.name}" }
                    }
                    p { class: "footer-blurb",
                        "North America's trusted cross-border auto logistics provider. Moving vehicles safely between Canada and the United States since {COMPANY.founded}."
                    }
                    div { class: "footer-social",
                        a { href: "https://linkedin.com", target: "_blank", rel: "noopener noreferrer", "in" }
                        a { href: "https://youtube.com", target: "_blank", rel: "noopener noreferrer", "▶" }
                    }
                }
                div {
                    h4 { "Quick Links" }
                    ul { class: "footer-links",
                        li { a { href: "#services", "Services" } }
                        li { a { href: "#coverage", "Coverage Map" } }
                        li { a { href: "#quote", "Get a Quote" } }
                        li { a { href: "#careers", "Careers" } }
                        li { a { href: "#contact", "Contact" } }
                    }
                }
                div {
                    h4 { "Resources" }
                    ul { class: "footer-links",
                        for resource in ["Driver Vlogs", "Customs Guide", "RIV Process", "Insurance Certificate", "API Documentation"] {
                            li { a { href: "#", "{resource}" } }
                        }
                    }
                }
                div {
                    h4 { "Newsletter" }
                    p { class: "footer-blurb", "Get industry updates, route alerts, and logistics insights delivered monthly." }
                    form { class: "newsletter", onsubmit: on_subscribe,
                        input {
                            r#type: "email",
                            class: "input input-dark",
                            placeholder: "Enter your email",
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                        button { r#type: "submit", class: theme::BTN_PRIMARY, aria_label: "Subscribe", "✉" }
                    }
                }
            }
            div { class: "container footer-bottom",
                span { "© {year} {COMPANY.legal_name}. All rights reserved. {version_label()}" }
                div { class: "footer-legal",
                    a { href: "#", "Privacy Policy" }
                    a { href: "#", "Terms of Service" }
                    a { href: "#", "Accessibility" }
                }
            }
            button {
                class: "back-to-top",
                aria_label: "Back to top",
                onclick: move |_| scroll_to_top(),
                "↑"
            }
        }
    }
}
