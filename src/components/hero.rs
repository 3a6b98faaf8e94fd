//! Hero banner: name, title, bio, calls to action and headshot.

use dioxus::prelude::*;
use folio_core::{PersonalInfo, Section};
use folio_ui::{ButtonVariant, LinkButton};

use crate::components::DownloadIcon;

/// File name offered when the visitor downloads the CV.
pub fn resume_file_name(name: &str) -> String {
    let slug: Vec<&str> = name.split_whitespace().collect();
    format!("{}_Resume.pdf", slug.join("_"))
}

#[component]
pub fn Hero(info: PersonalInfo) -> Element {
    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-text fade-in-up",
                h1 { class: "hero-title",
                    "{info.name}"
                    br {}
                    span { class: "accent-text text-glow", "{info.title}" }
                }
                p { class: "hero-bio", "{info.bio}" }
                div { class: "hero-actions",
                    LinkButton { href: Section::Projects.href(), "View My Work" }
                    if let Some(resume) = info.resume.clone() {
                        LinkButton {
                            variant: ButtonVariant::Card,
                            href: resume,
                            external: true,
                            download: resume_file_name(&info.name),
                            DownloadIcon { class: "icon-sm" }
                            "Download CV"
                        }
                    }
                    LinkButton {
                        variant: ButtonVariant::Card,
                        href: Section::Contact.href(),
                        "Get In Touch"
                    }
                }
            }
            div { class: "hero-portrait fade-in-up delayed",
                div { class: "headshot",
                    if info.headshot.is_empty() {
                        span { class: "headshot-placeholder", "Headshot" }
                    } else {
                        img { src: "{info.headshot}", alt: "{info.name}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_name_follows_owner() {
        assert_eq!(resume_file_name("Avery Quinn"), "Avery_Quinn_Resume.pdf");
        assert_eq!(resume_file_name("  Solo  "), "Solo_Resume.pdf");
    }
}
