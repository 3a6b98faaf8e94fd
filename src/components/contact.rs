use dioxus::prelude::*;
use folio_core::{ContactInfo, Section};
use folio_ui::{ButtonVariant, LinkButton, SectionHeading};

use crate::components::{LinkedInIcon, MailIcon};

const INVITATION: &str = "I'm currently open to new opportunities and collaborations. \
Whether you have a question or just want to connect, feel free to reach out. \
I'll do my best to get back to you!";

#[component]
pub fn Contact(contact: ContactInfo) -> Element {
    rsx! {
        div { class: "section-body narrow centered fade-in-up",
            SectionHeading { title: Section::Contact.heading().to_string() }
            p { class: "contact-invitation", "{INVITATION}" }
            div { class: "contact-actions",
                LinkButton {
                    variant: ButtonVariant::Card,
                    href: format!("mailto:{}", contact.email),
                    MailIcon { class: "icon-md" }
                    "{contact.email}"
                }
                LinkButton {
                    href: contact.linkedin.clone(),
                    external: true,
                    LinkedInIcon { class: "icon-md" }
                    "Connect on LinkedIn"
                }
            }
        }
    }
}
