//! Home page - the whole portfolio on one scrolling page.

use dioxus::prelude::*;
use folio_core::theme::mode_class_script;
use folio_core::Section;

use crate::components::{
    use_reveal_tracker, About, Background, Certifications, Chatbot, Contact, Experience, Footer,
    Hero, Navbar, Projects, RevealSection, Skills, SparklesIcon, ThemeCustomizer,
};
use crate::context::{use_appearance, use_portfolio};

#[component]
pub fn Home() -> Element {
    let portfolio = use_portfolio();
    let appearance = use_appearance();
    let customizer_open = use_signal(|| false);
    let mut chat_open = use_signal(|| false);
    let revealed = use_reveal_tracker();

    // The light palette is scoped to <html>, keep its class in step with the mode
    use_effect(move || {
        let Some(mode) = appearance.read().as_ref().map(|a| a.mode()) else {
            return;
        };
        let _ = document::eval(&mode_class_script(mode));
    });

    let Some(data) = portfolio() else {
        return rsx! { div { class: "load-screen", "Loading Portfolio..." } };
    };
    let mode = appearance
        .read()
        .as_ref()
        .map(|a| a.mode())
        .unwrap_or_default();

    let is_revealed = move |section: Section| revealed.read().contains(&section);
    let info = data.personal_info.clone();

    rsx! {
        div { class: "folio-root",
            Background {}
            ThemeCustomizer { open: customizer_open }
            Chatbot { open: chat_open, data: data.clone() }

            div { class: "page",
                Navbar {
                    name: info.name.clone(),
                    mode: mode,
                    customizer_open: customizer_open,
                }
                main { class: "container",
                    Hero { info: info.clone() }

                    RevealSection { section: Section::About, revealed: is_revealed(Section::About),
                        About { paragraphs: data.about.clone() }
                    }
                    RevealSection { section: Section::Experience, revealed: is_revealed(Section::Experience),
                        Experience { items: data.experience.clone() }
                    }
                    RevealSection { section: Section::Skills, revealed: is_revealed(Section::Skills),
                        Skills { categories: data.skills.clone() }
                    }
                    RevealSection { section: Section::Projects, revealed: is_revealed(Section::Projects),
                        Projects { projects: data.projects.clone() }
                    }
                    RevealSection { section: Section::Certifications, revealed: is_revealed(Section::Certifications),
                        Certifications { items: data.certifications.clone() }
                    }
                    RevealSection { section: Section::Contact, revealed: is_revealed(Section::Contact),
                        Contact { contact: info.contact.clone() }
                    }
                }
                Footer { name: info.name.clone(), contact: info.contact.clone() }
            }

            button {
                class: if chat_open() { "chat-fab hidden" } else { "chat-fab" },
                "aria-label": "Open AI assistant",
                onclick: move |_| chat_open.set(true),
                SparklesIcon { class: "icon-md" }
            }
        }
    }
}
