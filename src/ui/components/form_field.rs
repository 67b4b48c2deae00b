use dioxus::prelude::*;

use crate::ui::theme;

/// Labelled text input with its validation message underneath.
#[component]
pub fn FormField(
    id: &'static str,
    label: &'static str,
    value: String,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] placeholder: &'static str,
    #[props(default)] min: Option<String>,
    #[props(default)] required: bool,
    #[props(default)] error: Option<&'static str>,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "field",
            label { r#for: id, "{label}" }
            input {
                id: id,
                r#type: input_type,
                class: theme::input_class(error.is_some()),
                value: value,
                placeholder: placeholder,
                min: min,
                required: required,
                oninput: move |evt| oninput.call(evt.value()),
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}
