use dioxus::prelude::*;
use thiserror::Error;

use crate::{
    domain::{catalog::COMPANY, ContactField, ContactSubmission, FieldErrors},
    infra::{
        backend::{BackendError, SubmissionReceipt},
        LeadBackend, SharedBackend,
    },
    ui::{
        components::{
            form_field::FormField,
            section_header::SectionHeader,
            toast::{show_toast, ToastKind, ToastMessage},
        },
        theme::{self, Tone},
    },
    util::assets,
};

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(FieldErrors),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Validates and delivers `form`, clearing it once the backend accepts it.
/// Invalid forms are never sent; on any error `form` is left as typed.
pub async fn send_contact_form(
    form: &mut ContactSubmission,
    backend: &dyn LeadBackend,
) -> Result<SubmissionReceipt, SubmitError> {
    let valid = form.validate().map_err(SubmitError::Invalid)?;
    let receipt = backend.submit_contact(&valid).await?;
    tracing::info!(
        reference = %receipt.reference,
        vins = valid.vins().len(),
        "contact request delivered"
    );
    *form = ContactSubmission::default();
    Ok(receipt)
}

pub fn submit_toast(outcome: &Result<SubmissionReceipt, SubmitError>) -> ToastMessage {
    match outcome {
        Ok(_) => ToastMessage::new(
            ToastKind::Success,
            "Message Sent!",
            "We'll get back to you within 24 hours.",
        ),
        Err(SubmitError::Invalid(_)) => ToastMessage::new(
            ToastKind::Error,
            "Validation Error",
            "Please check the form for errors.",
        ),
        Err(SubmitError::Backend(err)) => ToastMessage::new(
            ToastKind::Error,
            "Message not sent",
            format!("{err}. Please try again."),
        ),
    }
}

#[component]
pub fn Contact() -> Element {
    let backend = use_context::<SharedBackend>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut form = use_context::<Signal<ContactSubmission>>();
    let mut errors = use_signal(FieldErrors::default);
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if is_submitting() {
            return;
        }

        let mut draft = form();
        let backend = backend.clone();
        is_submitting.set(true);
        spawn(async move {
            let outcome = send_contact_form(&mut draft, backend.as_ref()).await;
            match &outcome {
                Ok(_) => {
                    errors.set(FieldErrors::default());
                    form.set(draft);
                }
                Err(SubmitError::Invalid(field_errors)) => {
                    tracing::debug!(invalid = field_errors.len(), "contact form rejected");
                    errors.set(field_errors.clone());
                }
                Err(SubmitError::Backend(err)) => {
                    tracing::warn!(%err, "contact submission failed");
                }
            }
            show_toast(toasts, submit_toast(&outcome));
            is_submitting.set(false);
        });
    };

    rsx! {
        section { id: "contact", class: Tone::Muted.section_class(),
            div { class: "container",
                SectionHeader {
                    eyebrow: "Contact",
                    title: "Get In Touch",
                    lede: "Ready to ship? Contact our team for a personalized quote or any questions.",
                }
                div { class: "contact-layout",
                    form { class: "card contact-form", onsubmit: on_submit,
                        div { class: "grid grid-2",
                            ContactInput { field: ContactField::Name, label: "Full Name *", placeholder: "John Smith", form, errors }
                            ContactInput { field: ContactField::Company, label: "Company", placeholder: "ABC Motors", form, errors }
                            ContactInput { field: ContactField::Email, label: "Email *", input_type: "email", placeholder: "john@company.com", form, errors }
                            ContactInput { field: ContactField::Phone, label: "Phone *", input_type: "tel", placeholder: "+1 (555) 123-4567", form, errors }
                            ContactInput { field: ContactField::Origin, label: "Origin", placeholder: "Toronto, ON", form, errors }
                            ContactInput { field: ContactField::Destination, label: "Destination", placeholder: "Miami, FL", form, errors }
                        }
                        ContactInput { field: ContactField::PreferredDate, label: "Preferred Date", input_type: "date", form, errors }
                        ContactArea {
                            field: ContactField::Vins,
                            label: "VIN Numbers (optional)",
                            placeholder: "One per line",
                            rows: 2,
                            form,
                            errors,
                        }
                        ContactArea {
                            field: ContactField::Message,
                            label: "Message *",
                            placeholder: "Tell us about your shipment...",
                            rows: 4,
                            form,
                            errors,
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary btn-wide btn-large",
                            disabled: is_submitting(),
                            if is_submitting() { "Sending..." } else { "Send Message" }
                        }
                    }

                    div { class: "contact-side",
                        div { class: "card contact-hq",
                            img { src: assets::hq_marker_data_uri(), alt: "", class: "hq-marker" }
                            div {
                                p { class: "strong", "{COMPANY.legal_name} Headquarters" }
                                p { class: "muted", "{COMPANY.street}" }
                                p { class: "muted", "{COMPANY.locality}, {COMPANY.region} {COMPANY.postal_code}" }
                            }
                        }
                        a { class: "card contact-card", href: "tel:{COMPANY.phone_e164}",
                            span { class: "service-icon", "📞" }
                            div {
                                p { class: "strong", "Call Us 24/7" }
                                p { class: "muted", "{COMPANY.phone_display}" }
                            }
                        }
                        a { class: "card contact-card", href: "mailto:{COMPANY.email}",
                            span { class: "service-icon", "✉" }
                            div {
                                p { class: "strong", "Email Us" }
                                p { class: "muted", "{COMPANY.email}" }
                            }
                        }
                        div { class: "card contact-card",
                            span { class: "service-icon", "🕒" }
                            div {
                                p { class: "strong", "Office Hours" }
                                p { class: "muted", "Mon-Fri: 7AM - 7PM EST" }
                                p { class: "muted", "Dispatch: 24/7" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Writes a field edit into the form and drops that field's error.
fn edit_field(
    mut form: Signal<ContactSubmission>,
    mut errors: Signal<FieldErrors>,
    field: ContactField,
    value: String,
) {
    form.with_mut(|submission| submission.set(field, value));
    if errors.read().get(field).is_some() {
        errors.with_mut(|errors| errors.clear(field));
    }
}

#[component]
fn ContactInput(
    field: ContactField,
    label: &'static str,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] placeholder: &'static str,
    form: Signal<ContactSubmission>,
    errors: Signal<FieldErrors>,
) -> Element {
    rsx! {
        FormField {
            id: field.id(),
            label,
            input_type,
            placeholder,
            value: form.read().value(field).to_string(),
            error: errors.read().get(field),
            oninput: move |value: String| edit_field(form, errors, field, value),
        }
    }
}

#[component]
fn ContactArea(
    field: ContactField,
    label: &'static str,
    placeholder: &'static str,
    rows: u32,
    form: Signal<ContactSubmission>,
    errors: Signal<FieldErrors>,
) -> Element {
    let error = errors.read().get(field);
    let class = if error.is_some() {
        "input textarea input-invalid"
    } else {
        theme::TEXTAREA_CLASS
    };

    rsx! {
        div { class: "field",
            label { r#for: field.id(), "{label}" }
            textarea {
                id: field.id(),
                class,
                rows: "{rows}",
                placeholder,
                value: form.read().value(field).to_string(),
                oninput: move |evt| edit_field(form, errors, field, evt.value()),
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::infra::{backend::SIMULATED_LATENCY, HttpBackend, SimulatedBackend};

    fn filled_form() -> ContactSubmission {
        ContactSubmission {
            name: "John Smith".into(),
            email: "john@x.com".into(),
            phone: "5551234567".into(),
            message: "Need a quote for 2 cars".into(),
            ..ContactSubmission::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn accepted_form_is_cleared_and_confirmed() {
        let backend = SimulatedBackend::default();
        let mut form = filled_form();

        let started = Instant::now();
        let outcome = send_contact_form(&mut form, &backend).await;

        assert!(outcome.is_ok());
        assert!(started.elapsed() >= SIMULATED_LATENCY);
        assert_eq!(form, ContactSubmission::default());

        let toast = submit_toast(&outcome);
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.title, "Message Sent!");
        assert_eq!(toast.text, "We'll get back to you within 24 hours.");
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_form_is_never_sent() {
        let backend = SimulatedBackend::default();
        let typed = ContactSubmission {
            name: "Al".into(),
            email: "bad".into(),
            phone: "123".into(),
            message: "hi".into(),
            ..ContactSubmission::default()
        };
        let mut form = typed.clone();

        let started = Instant::now();
        let outcome = send_contact_form(&mut form, &backend).await;

        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(form, typed);
        match &outcome {
            Err(SubmitError::Invalid(errors)) => assert_eq!(
                errors.fields().collect::<Vec<_>>(),
                vec![ContactField::Email, ContactField::Phone, ContactField::Message]
            ),
            other => panic!("expected validation errors, got {other:?}"),
        }

        let toast = submit_toast(&outcome);
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Validation Error");
    }

    #[tokio::test]
    async fn failed_delivery_keeps_what_was_typed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let backend = HttpBackend::new(&server.uri()).unwrap();
        let mut form = filled_form();

        let outcome = send_contact_form(&mut form, &backend).await;

        assert!(matches!(
            outcome,
            Err(SubmitError::Backend(BackendError::Api(_)))
        ));
        assert_eq!(form, filled_form());

        let toast = submit_toast(&outcome);
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.title, "Message not sent");
    }
}
