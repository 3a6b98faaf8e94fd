//! Shared state for the portfolio shell.
//!
//! The App component loads the data document, restores the visitor's
//! appearance and prepares the assistant session, then provides all three
//! to the component tree via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! let data = use_portfolio();
//! let appearance = use_appearance();
//!
//! update_appearance(appearance, |a| a.toggle_mode().map(|_| ()));
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{Appearance, AssistantConfig, ChatSession, FolioError, PortfolioData};
use tokio::sync::Mutex;

/// Shared assistant session.
///
/// `None` when no model is configured; the panel then answers every question
/// with the "trouble connecting" reply. The mutex serializes turns so the
/// history never interleaves.
pub type SharedSession = Arc<Mutex<Option<ChatSession>>>;

/// Get the data directory for the application.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Get the portfolio document override (if set via --data-file).
pub fn get_data_file() -> Option<PathBuf> {
    crate::get_data_file()
}

/// Get the assistant connection settings.
pub fn get_assistant_config() -> AssistantConfig {
    crate::get_assistant_config()
}

/// Hook to access the loaded portfolio document.
///
/// `None` until loading has finished.
pub fn use_portfolio() -> Signal<Option<Arc<PortfolioData>>> {
    use_context::<Signal<Option<Arc<PortfolioData>>>>()
}

/// Hook to access the visitor's appearance state.
pub fn use_appearance() -> Signal<Option<Appearance>> {
    use_context::<Signal<Option<Appearance>>>()
}

/// Hook to access the assistant session.
pub fn use_session() -> Signal<SharedSession> {
    use_context::<Signal<SharedSession>>()
}

/// Apply a change to the appearance state.
///
/// The change persists before the signal notifies, so readers always see
/// what is stored. Storage failures are logged and the state is left as
/// the operation left it.
pub fn update_appearance<F>(mut appearance: Signal<Option<Appearance>>, change: F)
where
    F: FnOnce(&mut Appearance) -> Result<(), FolioError>,
{
    let mut guard = appearance.write();
    let Some(state) = guard.as_mut() else {
        tracing::warn!("Appearance change before preferences were loaded");
        return;
    };
    if let Err(e) = change(state) {
        tracing::error!("Failed to save appearance: {}", e);
    }
}
