//! Headings and small labels

use dioxus::prelude::*;

/// Section title with the accent underline bar.
#[component]
pub fn SectionHeading(
    title: String,
    /// Center the title (most sections) or left-align it
    #[props(default = true)]
    centered: bool,
) -> Element {
    rsx! {
        div { class: if centered { "section-heading centered" } else { "section-heading" },
            h2 { class: "section-title", "{title}" }
            div { class: "section-rule" }
        }
    }
}

/// Rounded tag pill (project technologies).
#[component]
pub fn Tag(label: String) -> Element {
    rsx! {
        span { class: "tag", "{label}" }
    }
}
