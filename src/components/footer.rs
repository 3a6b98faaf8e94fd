use chrono::Datelike;
use dioxus::prelude::*;
use folio_core::ContactInfo;

use crate::components::{GitHubIcon, LinkedInIcon};

fn copyright(year: i32, name: &str) -> String {
    format!("\u{a9} {} {}. All Rights Reserved.", year, name)
}

#[component]
pub fn Footer(name: String, contact: ContactInfo) -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-row",
                p { class: "muted-text", "{copyright(year, &name)}" }
                div { class: "footer-links",
                    a {
                        class: "icon-link",
                        href: "{contact.github}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "aria-label": "GitHub",
                        GitHubIcon { class: "icon-md" }
                    }
                    a {
                        class: "icon-link",
                        href: "{contact.linkedin}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "aria-label": "LinkedIn",
                        LinkedInIcon { class: "icon-md" }
                    }
                }
            }
        }
    }
}
