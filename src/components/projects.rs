use dioxus::prelude::*;
use folio_core::{Project, Section};
use folio_ui::{SectionHeading, Tag};

use crate::components::{ExternalLinkIcon, GitHubIcon};

#[component]
pub fn Projects(projects: Vec<Project>) -> Element {
    rsx! {
        div { class: "section-body wide centered fade-in-up",
            SectionHeading { title: Section::Projects.heading().to_string() }
            div { class: "project-grid",
                for (index, project) in projects.iter().enumerate() {
                    div {
                        key: "{project.title}",
                        class: "card project-card fade-in-up",
                        style: "animation-delay: {index * 150}ms;",
                        div {
                            h3 { class: "card-title", "{project.title}" }
                            p { class: "card-text", "{project.description}" }
                            div { class: "tag-row",
                                for tag in project.tags.iter() {
                                    Tag { key: "{tag}", label: tag.clone() }
                                }
                            }
                        }
                        div { class: "project-links",
                            if let Some(url) = project.repo_url.as_ref() {
                                a {
                                    class: "icon-link",
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "aria-label": "Source code",
                                    GitHubIcon { class: "icon-md" }
                                }
                            }
                            if let Some(url) = project.live_url.as_ref() {
                                a {
                                    class: "icon-link",
                                    href: "{url}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "aria-label": "Live demo",
                                    ExternalLinkIcon { class: "icon-md" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
