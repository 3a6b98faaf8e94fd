use dioxus::prelude::*;
use folio_core::{CertificationItem, Section};
use folio_ui::SectionHeading;

use crate::components::{CertificationIcon, ExternalLinkIcon};

#[component]
pub fn Certifications(items: Vec<CertificationItem>) -> Element {
    rsx! {
        div { class: "section-body narrow fade-in-up",
            SectionHeading { title: Section::Certifications.heading().to_string() }
            div { class: "cert-list",
                for (index, item) in items.iter().enumerate() {
                    div { key: "{index}", class: "card cert-card",
                        CertificationIcon { class: "icon-lg accent-text" }
                        div { class: "cert-body",
                            h3 { class: "card-title", "{item.name}" }
                            p { class: "card-text", "{item.issuer}" }
                            p { class: "muted-text", "{item.date}" }
                        }
                        a {
                            class: "icon-link",
                            href: "{item.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "aria-label": "View Credential",
                            ExternalLinkIcon { class: "icon-md" }
                        }
                    }
                }
            }
        }
    }
}
