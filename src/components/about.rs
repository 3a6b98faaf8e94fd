use dioxus::prelude::*;
use folio_core::Section;
use folio_ui::SectionHeading;

#[component]
pub fn About(paragraphs: Vec<String>) -> Element {
    rsx! {
        div { class: "section-body narrow centered fade-in-up",
            SectionHeading { title: Section::About.heading().to_string() }
            for (i, paragraph) in paragraphs.iter().enumerate() {
                p { key: "{i}", class: "about-paragraph", "{paragraph}" }
            }
        }
    }
}
