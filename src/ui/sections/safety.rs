use dioxus::prelude::*;

use crate::{
    domain::catalog::{COMPLIANCE_BADGES, SAFETY_STATS},
    ui::{components::section_header::SectionHeader, scroll_to, theme},
};

#[component]
pub fn Safety() -> Element {
    rsx! {
        section { id: "about", class: theme::Tone::Navy.section_class(),
            div { class: "container",
                SectionHeader {
                    eyebrow: "Safety & Compliance",
                    title: "Safety Is Our Foundation",
                    lede: "Industry-leading safety records and full regulatory compliance on both sides of the border.",
                }
                div { class: "grid grid-3",
                    for stat in SAFETY_STATS {
                        div { class: theme::CARD_DARK,
                            div { class: "service-icon", "{stat.icon}" }
                            p { class: "stat-value", "{stat.display()}" }
                            p { class: "strong", "{stat.label}" }
                            p { class: "muted", "{stat.description}" }
                        }
                    }
                }
                div { class: "insurance-panel",
                    div {
                        h3 { "Fully Insured Up to $2M per Load" }
                        p { class: "muted",
                            "Every shipment is covered by comprehensive cargo insurance with no hidden deductibles."
                        }
                    }
                    button {
                        class: theme::BTN_OUTLINE,
                        onclick: move |_| scroll_to("contact"),
                        "Request Certificate"
                    }
                }
                div { class: "compliance-badges",
                    for badge in COMPLIANCE_BADGES {
                        div { class: "compliance-badge", title: badge.description,
                            strong { "{badge.name}" }
                            span { class: "muted small", "{badge.description}" }
                        }
                    }
                }
            }
        }
    }
}
