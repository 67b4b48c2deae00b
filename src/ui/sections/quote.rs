use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use crate::{
    domain::{
        quote::{
            accept_ship_date, date_input_value, estimate, quote_rng, REGION_GROUPS, VEHICLE_MAKES,
        },
        QuoteEstimate, QuoteRequest,
    },
    ui::{
        components::{form_field::FormField, section_header::SectionHeader},
        scroll_to,
        theme::{self, Tone},
    },
    util::{config, today},
};

#[component]
pub fn QuoteCalculator() -> Element {
    let mut request = use_signal(QuoteRequest::default);
    let mut show_quote = use_signal(|| false);
    let rng = use_hook(|| Rc::new(RefCell::new(quote_rng(config::current().quote_seed))));

    let quote = use_memo(move || {
        let current = request.read();
        let result = estimate(&current, &mut *rng.borrow_mut());
        tracing::debug!(distance = result.distance, "recomputed quote estimate");
        result
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if request.read().is_ready() {
            let current = quote();
            tracing::info!(
                low = current.low_estimate,
                high = current.high_estimate,
                "quote shown"
            );
            show_quote.set(true);
        }
    };

    let req = request();
    let min_date = date_input_value(today());
    let ship_date = req.ship_date.map(date_input_value).unwrap_or_default();

    rsx! {
        section { id: "quote", class: Tone::Light.section_class(),
            div { class: "container",
                SectionHeader {
                    eyebrow: "Instant Quote",
                    title: "Get Your Quote",
                    lede: "Enter your route and vehicle details for an instant estimate.",
                }
                div { class: "quote-layout",
                    form { class: "card quote-form", onsubmit: on_submit,
                        fieldset {
                            legend { "📍 Pickup location" }
                            div { class: "grid grid-2",
                                FormField {
                                    id: "originCity",
                                    label: "City",
                                    value: req.origin_city.clone(),
                                    placeholder: "Toronto",
                                    required: true,
                                    oninput: move |value: String| request.with_mut(|r| r.origin_city = value),
                                }
                                RegionSelect {
                                    id: "originRegion",
                                    label: "Province / State",
                                    value: req.origin_region.clone(),
                                    onchange: move |value: String| request.with_mut(|r| r.origin_region = value),
                                }
                            }
                        }
                        fieldset {
                            legend { "🏁 Delivery location" }
                            div { class: "grid grid-2",
                                FormField {
                                    id: "destinationCity",
                                    label: "City",
                                    value: req.destination_city.clone(),
                                    placeholder: "Miami",
                                    required: true,
                                    oninput: move |value: String| request.with_mut(|r| r.destination_city = value),
                                }
                                RegionSelect {
                                    id: "destinationRegion",
                                    label: "Province / State",
                                    value: req.destination_region.clone(),
                                    onchange: move |value: String| request.with_mut(|r| r.destination_region = value),
                                }
                            }
                        }
                        fieldset {
                            legend { "🚗 Vehicle" }
                            div { class: "grid grid-3",
                                FormField {
                                    id: "vehicleYear",
                                    label: "Year",
                                    value: req.vehicle_year.clone(),
                                    placeholder: "2024",
                                    oninput: move |value: String| request.with_mut(|r| r.vehicle_year = value),
                                }
                                div { class: "field",
                                    label { r#for: "vehicleMake", "Make" }
                                    select {
                                        id: "vehicleMake",
                                        class: theme::SELECT_CLASS,
                                        required: true,
                                        onchange: move |evt| request.with_mut(|r| r.vehicle_make = evt.value()),
                                        option { value: "", disabled: true, selected: req.vehicle_make.is_empty(), "Select make" }
                                        for make in VEHICLE_MAKES {
                                            option { value: make, selected: req.vehicle_make == make, "{make}" }
                                        }
                                    }
                                }
                                FormField {
                                    id: "vehicleModel",
                                    label: "Model",
                                    value: req.vehicle_model.clone(),
                                    placeholder: "Camry",
                                    oninput: move |value: String| request.with_mut(|r| r.vehicle_model = value),
                                }
                            }
                            label { class: "toggle",
                                input {
                                    r#type: "checkbox",
                                    checked: req.is_running,
                                    onchange: move |evt| request.with_mut(|r| r.is_running = evt.checked()),
                                }
                                span { "Vehicle is running" }
                                if !req.is_running {
                                    span { class: "pill pill-secondary", "+$75 surcharge" }
                                }
                            }
                        }
                        FormField {
                            id: "shipDate",
                            label: "Preferred ship date",
                            input_type: "date",
                            value: ship_date,
                            min: Some(min_date),
                            oninput: move |value: String| {
                                request.with_mut(|r| r.ship_date = accept_ship_date(&value, today()))
                            },
                        }
                        button { r#type: "submit", class: "btn btn-primary btn-wide btn-large", "Calculate Quote" }
                    }

                    div { class: "quote-side",
                        if show_quote() {
                            QuoteResult { estimate: quote() }
                        } else {
                            div { class: "card quote-placeholder",
                                div { class: "service-icon", "🧮" }
                                p { class: "muted", "Fill in the route and vehicle to see your estimate." }
                            }
                        }
                        p { class: "disclaimer",
                            "* Estimates are for guidance only. Final pricing depends on vehicle size, season, and customs requirements."
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RegionSelect(
    id: &'static str,
    label: &'static str,
    value: String,
    onchange: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "field",
            label { r#for: id, "{label}" }
            select {
                id: id,
                class: theme::SELECT_CLASS,
                onchange: move |evt| onchange.call(evt.value()),
                option { value: "", disabled: true, selected: value.is_empty(), "Select" }
                for group in REGION_GROUPS {
                    optgroup { label: "{group.flag} {group.country}",
                        for code in group.codes.iter().copied() {
                            option { value: code, selected: value == code, "{code}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuoteResult(estimate: QuoteEstimate) -> Element {
    rsx! {
        div { class: "card card-dark quote-result",
            p { class: "eyebrow", "Estimated cost" }
            p { class: "quote-range",
                "${estimate.low_estimate} - ${estimate.high_estimate}"
                span { class: "quote-currency", " CAD" }
            }
            div { class: "quote-facts",
                div {
                    span { class: "muted", "Transit time" }
                    strong { "{estimate.transit_days} days" }
                }
                div {
                    span { class: "muted", "Distance" }
                    strong { "~{estimate.distance} miles" }
                }
            }
            p { class: "quote-note", "Includes customs brokerage and border fees." }
            button {
                class: theme::BTN_PRIMARY_WIDE,
                onclick: move |_| scroll_to("contact"),
                "Book Now"
            }
        }
    }
}
