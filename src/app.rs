use std::sync::Arc;

use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{seo, Preferences},
    infra::{HttpBackend, SharedBackend, SimulatedBackend},
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{HomePage, NotFoundPage},
        shell::Shell,
    },
    util::{
        assets,
        config::{self, SiteConfig},
        persistence::{load_preferences, save_preferences},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let preferences = use_signal(|| load_preferences().unwrap_or_default());
    use_context_provider(|| preferences);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    let backend = use_hook(|| build_backend(config::current()));
    use_context_provider(|| backend);

    rsx! {
        document::Title { "{seo::PAGE_TITLE}" }
        document::Meta { name: "description", content: seo::PAGE_DESCRIPTION }
        document::Meta { name: "keywords", content: seo::PAGE_KEYWORDS }
        document::Meta { property: "og:title", content: seo::OG_TITLE }
        document::Meta { property: "og:description", content: seo::OG_DESCRIPTION }
        document::Meta { property: "og:type", content: seo::OG_TYPE }
        document::Link { rel: "canonical", href: seo::canonical_url() }
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Script { r#type: "application/ld+json", "{seo::json_ld()}" }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Posts leads to the configured service, or simulates them when none is set.
fn build_backend(config: &SiteConfig) -> SharedBackend {
    let Some(url) = config.backend_url.as_ref() else {
        tracing::info!(latency_ms = config.latency.as_millis() as u64, "using simulated lead backend");
        return Arc::new(SimulatedBackend::new(config.latency));
    };

    match HttpBackend::new(url.as_str()) {
        Ok(backend) => {
            tracing::info!(base = %backend.base_url(), "using HTTP lead backend");
            Arc::new(backend)
        }
        Err(err) => {
            tracing::warn!(%err, "lead backend unusable; falling back to simulation");
            Arc::new(SimulatedBackend::new(config.latency))
        }
    }
}

pub fn persist_preferences(preferences: &Signal<Preferences>) {
    let snapshot = *preferences.read();
    if let Err(err) = save_preferences(&snapshot) {
        tracing::warn!(%err, "failed to persist preferences");
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! { Shell { NotFoundPage { segments } } }
}
