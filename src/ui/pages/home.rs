use dioxus::prelude::*;

use crate::{
    domain::ContactSubmission,
    ui::sections::{
        Careers, Contact, CoverageMap, Hero, HowItWorks, QuoteCalculator, Safety, Services,
        Testimonials,
    },
};

#[component]
pub fn HomePage() -> Element {
    // Shared so job cards can prefill the contact message.
    let contact = use_signal(ContactSubmission::default);
    use_context_provider(|| contact);

    rsx! {
        Hero {}
        Services {}
        CoverageMap {}
        HowItWorks {}
        QuoteCalculator {}
        Testimonials {}
        Safety {}
        Careers {}
        Contact {}
    }
}
