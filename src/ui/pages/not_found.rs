use dioxus::prelude::*;

use crate::{app::Route, ui::theme};

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "unknown route");

    rsx! {
        section { class: theme::Tone::Light.section_class(),
            div { class: "container center",
                h1 { "404" }
                p { class: "muted", "Nothing lives at {path}." }
                Link { class: theme::BTN_PRIMARY, to: Route::Home {}, "Back to home" }
            }
        }
    }
}
