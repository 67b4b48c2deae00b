pub mod components;
pub mod pages;
pub mod sections;
pub mod shell;
pub mod theme;

use dioxus::prelude::*;

/// Smooth-scrolls to the section whose element id is `id`.
pub fn scroll_to(id: &str) {
    let _ = document::eval(&format!(
        "document.getElementById({id:?})?.scrollIntoView({{ behavior: 'smooth' }});"
    ));
}

pub fn scroll_to_top() {
    let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}
