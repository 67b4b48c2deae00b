use dioxus::prelude::*;

use crate::{
    domain::catalog::STEPS,
    ui::{components::section_header::SectionHeader, scroll_to, theme},
};

#[component]
pub fn HowItWorks() -> Element {
    rsx! {
        section { id: "how-it-works", class: theme::Tone::Light.section_class(),
            div { class: "container",
                SectionHeader {
                    eyebrow: "Process",
                    title: "How It Works",
                    lede: "Four simple steps to get your vehicle across the border safely and on time.",
                }
                ol { class: "grid grid-4 steps",
                    for (index, step) in STEPS.into_iter().enumerate() {
                        li { class: "step",
                            div { class: "step-icon", "{step.icon}" }
                            span { class: "step-number", "{index + 1}" }
                            h3 { "{step.title}" }
                            p { class: "muted", "{step.description}" }
                        }
                    }
                }
                div { class: "center",
                    button {
                        class: "btn btn-primary btn-large",
                        onclick: move |_| scroll_to("quote"),
                        "Start Your Shipment"
                    }
                }
            }
        }
    }
}
