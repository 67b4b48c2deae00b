use dioxus::prelude::*;

use crate::{
    domain::{
        catalog::{application_message, jobs_in, Job, ALL_DEPARTMENTS, BENEFITS, DEPARTMENTS},
        ContactField, ContactSubmission,
    },
    ui::{components::section_header::SectionHeader, scroll_to, theme},
};

#[component]
pub fn Careers() -> Element {
    let mut department = use_signal(|| ALL_DEPARTMENTS);
    let jobs = jobs_in(department());

    rsx! {
        section { id: "careers", class: theme::Tone::Light.section_class(),
            div { class: "container",
                SectionHeader {
                    eyebrow: "Careers",
                    title: "Join Our Team",
                    lede: "Build your career with North America's fastest-growing cross-border logistics company.",
                }
                ul { class: "benefits",
                    for benefit in BENEFITS {
                        li { "✓ {benefit}" }
                    }
                }
                div { class: "filters",
                    for name in DEPARTMENTS {
                        button {
                            class: theme::btn_filter(department() == name),
                            onclick: move |_| department.set(name),
                            "{name}"
                        }
                    }
                }
                div { class: "grid grid-2",
                    for job in jobs {
                        JobCard { key: "{job.id}", job: *job }
                    }
                }
            }
        }
    }
}

#[component]
fn JobCard(job: Job) -> Element {
    let mut contact = use_context::<Signal<ContactSubmission>>();

    rsx! {
        article { class: "card job-card",
            div { class: "job-header",
                h3 { "{job.title}" }
                span { class: theme::job_kind_badge(job.is_full_time()), "{job.kind}" }
            }
            p { class: "muted", "{job.description}" }
            div { class: "job-facts",
                span { "📍 {job.location}" }
                span { "💵 {job.salary}" }
                span { "🏢 {job.department}" }
            }
            button {
                class: theme::BTN_PRIMARY,
                onclick: move |_| {
                    tracing::info!(job = job.title, "application started");
                    contact.with_mut(|form| form.set(ContactField::Message, application_message(&job)));
                    scroll_to("contact");
                },
                "Apply Now"
            }
        }
    }
}
