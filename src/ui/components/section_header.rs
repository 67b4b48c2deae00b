use dioxus::prelude::*;

#[component]
pub fn SectionHeader(eyebrow: &'static str, title: &'static str, lede: &'static str) -> Element {
    rsx! {
        div { class: "section-header",
            span { class: "eyebrow", "{eyebrow}" }
            h2 { "{title}" }
            p { class: "lede", "{lede}" }
        }
    }
}
