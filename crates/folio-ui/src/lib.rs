//! Folio UI Components
//!
//! Dioxus primitives shared by the portfolio shell. They carry no state of
//! their own beyond what a control needs; colors come from the CSS custom
//! properties the theme injects (`--accent-color`, `--card-bg`, ...), so
//! every component follows palette edits without re-rendering.

pub mod components;

pub use components::*;
