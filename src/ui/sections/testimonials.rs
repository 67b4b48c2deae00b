use dioxus::prelude::*;

use crate::{
    domain::catalog::{step_carousel, Testimonial, TESTIMONIALS},
    ui::{components::section_header::SectionHeader, theme::Tone},
};

const VISIBLE_CARDS: usize = 3;

/// Cards shown starting at `start`, wrapping past the end of the list.
fn visible_window(start: usize) -> Vec<Testimonial> {
    (0..VISIBLE_CARDS.min(TESTIMONIALS.len()))
        .map(|offset| TESTIMONIALS[(start + offset) % TESTIMONIALS.len()])
        .collect()
}

#[component]
pub fn Testimonials() -> Element {
    let mut current = use_signal(|| 0usize);
    let cards = visible_window(current());

    rsx! {
        section { id: "testimonials", class: Tone::Muted.section_class(),
            div { class: "container",
                SectionHeader {
                    eyebrow: "Testimonials",
                    title: "What Our Clients Say",
                    lede: "Trusted by dealerships, auction houses, and collectors across North America.",
                }
                div { class: "reviews-badge",
                    span { class: "stars", "★★★★★" }
                    strong { "4.9/5" }
                    span { class: "muted", "from 200+ Google Reviews" }
                }
                div { class: "carousel",
                    button {
                        class: "carousel-nav",
                        aria_label: "Previous testimonial",
                        onclick: move |_| current.set(step_carousel(current(), false, TESTIMONIALS.len())),
                        "‹"
                    }
                    div { class: "grid grid-3",
                        for card in cards {
                            TestimonialCard { key: "{card.name}", card }
                        }
                    }
                    button {
                        class: "carousel-nav",
                        aria_label: "Next testimonial",
                        onclick: move |_| current.set(step_carousel(current(), true, TESTIMONIALS.len())),
                        "›"
                    }
                }
                div { class: "carousel-dots",
                    for index in 0..TESTIMONIALS.len() {
                        button {
                            class: dot_class(index == current()),
                            aria_label: format!("Go to testimonial {}", index + 1),
                            onclick: move |_| current.set(index),
                        }
                    }
                }
            }
        }
    }
}

fn dot_class(active: bool) -> &'static str {
    if active {
        "dot active"
    } else {
        "dot"
    }
}

#[component]
fn TestimonialCard(card: Testimonial) -> Element {
    let stars = "★".repeat(usize::from(card.rating));

    rsx! {
        article { class: "card testimonial",
            span { class: "stars", "{stars}" }
            blockquote { "“{card.comment}”" }
            div { class: "testimonial-meta",
                p { class: "strong", "{card.name}" }
                p { class: "muted", "{card.company}" }
                p { class: "testimonial-route", "{card.vehicle} · {card.route}" }
                p { class: "muted small", "{card.date}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_wraps_past_the_last_card() {
        let names: Vec<_> = visible_window(4).iter().map(|card| card.name).collect();
        assert_eq!(names, vec!["Emily Watson", "Michael Chen", "Sarah Thompson"]);
    }
}
