//! Skill categories as tile grids.

use dioxus::prelude::*;
use folio_core::{Section, SkillCategory, SkillIcon};
use folio_ui::SectionHeading;

/// Stagger between category entrance animations.
const STAGGER_MS: usize = 150;

#[component]
fn SkillBadge(icon: SkillIcon) -> Element {
    let tint = match icon {
        SkillIcon::Placeholder => "var(--accent-color)",
        other => other.tint(),
    };

    rsx! {
        span {
            class: "skill-badge",
            style: "color: {tint}; border-color: {tint};",
            "{icon.glyph()}"
        }
    }
}

#[component]
pub fn Skills(categories: Vec<SkillCategory>) -> Element {
    rsx! {
        div { class: "section-body wide centered fade-in-up",
            SectionHeading { title: Section::Skills.heading().to_string() }
            div { class: "skill-categories",
                for (index, category) in categories.iter().enumerate() {
                    div {
                        key: "{category.title}",
                        class: "skill-category fade-in-up",
                        style: "animation-delay: {index * STAGGER_MS}ms;",
                        h3 { class: "skill-category-title", "{category.title}" }
                        div { class: "skill-grid",
                            for skill in category.skills.iter() {
                                div { key: "{skill.name}", class: "skill-tile",
                                    SkillBadge { icon: SkillIcon::for_skill(&skill.name) }
                                    span { class: "skill-name", "{skill.name}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
