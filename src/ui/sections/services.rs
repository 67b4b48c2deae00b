use dioxus::prelude::*;

use crate::{
    domain::catalog::SERVICES,
    ui::{components::section_header::SectionHeader, theme::Tone},
};

/// Service cards; at most one is expanded at a time.
#[component]
pub fn Services() -> Element {
    let mut expanded = use_signal(|| None::<usize>);

    rsx! {
        section { id: "services", class: Tone::Muted.section_class(),
            div { class: "container",
                SectionHeader {
                    eyebrow: "Services",
                    title: "Comprehensive Logistics Solutions",
                    lede: "From single vehicles to entire fleets, we handle every aspect of cross-border auto transport.",
                }
                div { class: "grid grid-3",
                    for (index, service) in SERVICES.into_iter().enumerate() {
                        div {
                            key: "{service.title}",
                            class: card_class(expanded() == Some(index)),
                            div { class: "service-icon", "{service.icon}" }
                            h3 { "{service.title}" }
                            p { class: "muted", "{service.teaser}" }
                            if expanded() == Some(index) {
                                ul { class: "checklist",
                                    for detail in service.details {
                                        li { "✓ {detail}" }
                                    }
                                }
                            }
                            button {
                                class: "link-button",
                                onclick: move |_| {
                                    let next = if expanded() == Some(index) { None } else { Some(index) };
                                    expanded.set(next);
                                },
                                if expanded() == Some(index) { "Show less ⌃" } else { "Learn more ⌄" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn card_class(expanded: bool) -> &'static str {
    if expanded {
        "card service-card expanded"
    } else {
        "card service-card"
    }
}
