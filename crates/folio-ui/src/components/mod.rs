//! Reusable UI components
//!
//! Class names map to rules in the shell's global stylesheet.

mod button;
mod heading;
mod input;
mod tabs;

pub use button::*;
pub use heading::*;
pub use input::*;
pub use tabs::*;
