use dioxus::prelude::*;

use crate::{
    domain::catalog::{Hub, HUBS, HUB_LANES},
    ui::{components::section_header::SectionHeader, theme::Tone},
};

// Rough outline of North America in the same 0-100 space as the hub coordinates.
const CONTINENT_PATH: &str = "M8 30 L20 18 L38 14 L58 16 L76 22 L90 30 L88 44 L82 52 L84 60 L78 70 L76 86 L70 88 L66 76 L56 80 L48 84 L40 76 L30 70 L20 62 L14 50 Z";
const BORDER_PATH: &str = "M14 49 L30 49 L50 49 L60 52 L70 50 L80 46 L88 44";

#[component]
pub fn CoverageMap() -> Element {
    let mut active = use_signal(|| None::<usize>);

    rsx! {
        section { id: "coverage", class: Tone::Navy.section_class(),
            div { class: "container",
                SectionHeader {
                    eyebrow: "Coverage",
                    title: "Our North American Network",
                    lede: "Strategic hubs across Canada and the United States ensure fast, reliable transit times.",
                }
                div { class: "coverage-map",
                    svg {
                        class: "coverage-svg",
                        view_box: "0 0 100 100",
                        preserve_aspect_ratio: "none",
                        path { d: CONTINENT_PATH, class: "continent" }
                        path { d: BORDER_PATH, class: "border-line" }
                        for (from, to) in HUB_LANES.into_iter().map(|(a, b)| (HUBS[a], HUBS[b])) {
                            line {
                                class: "lane",
                                x1: "{from.x}",
                                y1: "{from.y}",
                                x2: "{to.x}",
                                y2: "{to.y}",
                            }
                        }
                    }
                    for (index, hub) in HUBS.into_iter().enumerate() {
                        HubMarker {
                            key: "{hub.city}",
                            hub,
                            active: active() == Some(index),
                            on_hover: move |hovering: bool| active.set(hovering.then_some(index)),
                        }
                    }
                }
                div { class: "coverage-legend",
                    span { class: "legend-item", span { class: "legend-dot legend-ca" } "Canadian hubs" }
                    span { class: "legend-item", span { class: "legend-dot legend-us" } "US hubs" }
                    span { class: "legend-item", span { class: "legend-lane" } "Active lanes" }
                }
            }
        }
    }
}

#[component]
fn HubMarker(hub: Hub, active: bool, on_hover: EventHandler<bool>) -> Element {
    let country_class = if hub.country == "CA" { "hub-ca" } else { "hub-us" };
    let marker_class = if active {
        format!("hub-marker {country_class} active")
    } else {
        format!("hub-marker {country_class}")
    };

    rsx! {
        button {
            class: marker_class,
            style: "left: {hub.x}%; top: {hub.y}%;",
            aria_label: "{hub.city} hub",
            onmouseenter: move |_| on_hover.call(true),
            onmouseleave: move |_| on_hover.call(false),
            onfocus: move |_| on_hover.call(true),
            onblur: move |_| on_hover.call(false),
            span { class: "hub-dot" }
            if active {
                div { class: "hub-tooltip",
                    p { class: "hub-city", "{hub.city}" }
                    p { "Transit: {hub.transit}" }
                    p { "Departures: {hub.departures}" }
                }
            }
        }
    }
}
