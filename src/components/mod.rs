//! UI Components for Folio.
//!
//! Page sections, overlays and the background layer. Shared primitives
//! (buttons, fields, tabs) live in `folio-ui`.

mod about;
mod background;
mod certifications;
mod chatbot;
mod contact;
mod experience;
mod footer;
mod hero;
mod icons;
mod navbar;
mod projects;
mod reveal;
mod skills;
mod theme_customizer;

pub use about::About;
pub use background::Background;
pub use certifications::Certifications;
pub use chatbot::Chatbot;
pub use contact::Contact;
pub use experience::Experience;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use navbar::Navbar;
pub use projects::Projects;
pub use reveal::{use_reveal_tracker, RevealSection};
pub use skills::Skills;
pub use theme_customizer::ThemeCustomizer;
