//! Class helpers shared by the page sections.

/// Background band a section sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Light,
    Muted,
    Navy,
}

impl Tone {
    pub fn section_class(&self) -> &'static str {
        match self {
            Tone::Light => "section section-light",
            Tone::Muted => "section section-muted",
            Tone::Navy => "section section-navy",
        }
    }
}

// ============================================
// BUTTON STYLES
// ============================================

pub const BTN_PRIMARY: &str = "btn btn-primary";
pub const BTN_PRIMARY_WIDE: &str = "btn btn-primary btn-wide";
pub const BTN_OUTLINE: &str = "btn btn-outline";

pub fn btn_filter(active: bool) -> &'static str {
    if active {
        "btn btn-small btn-primary"
    } else {
        "btn btn-small btn-outline"
    }
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "input input-invalid"
    } else {
        "input"
    }
}

pub const SELECT_CLASS: &str = "input select";
pub const TEXTAREA_CLASS: &str = "input textarea";

// ============================================
// PANEL / CARD STYLES
// ============================================

pub const CARD_DARK: &str = "card card-dark";

pub fn job_kind_badge(full_time: bool) -> &'static str {
    if full_time {
        "pill pill-primary"
    } else {
        "pill pill-secondary"
    }
}
