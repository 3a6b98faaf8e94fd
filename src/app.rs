use std::sync::Arc;

use dioxus::prelude::*;
use folio_core::{Appearance, ChatSession, GeminiClient, PortfolioData, Preferences};
use tokio::sync::Mutex;

use crate::context::{get_assistant_config, get_data_dir, get_data_file, SharedSession};
use crate::pages::Home;
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - The single-page portfolio; sections are reached by anchor links
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Loads the portfolio document and restores stored preferences.
fn load() -> anyhow::Result<(PortfolioData, Appearance)> {
    use anyhow::Context;

    let data = match get_data_file() {
        Some(path) => PortfolioData::load(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PortfolioData::bundled().context("parsing bundled portfolio data")?,
    };

    for issue in data.validate() {
        tracing::warn!(%issue, "Portfolio data issue");
    }

    let data_dir = get_data_dir();
    let prefs = Preferences::in_dir(&data_dir)
        .with_context(|| format!("opening preferences in {}", data_dir.display()))?;
    let appearance = Appearance::load(prefs, data.theme_config.clone())?;

    Ok((data, appearance))
}

/// Root application component.
///
/// Provides global styles, portfolio/appearance/assistant context, and routing.
#[component]
pub fn App() -> Element {
    let portfolio: Signal<Option<Arc<PortfolioData>>> = use_signal(|| None);
    let appearance: Signal<Option<Appearance>> = use_signal(|| None);
    let session: Signal<SharedSession> = use_signal(|| Arc::new(Mutex::new(None)));
    let mut load_error: Signal<Option<String>> = use_signal(|| None);

    use_context_provider(|| portfolio);
    use_context_provider(|| appearance);
    use_context_provider(|| session);

    // Load on mount
    use_effect(move || {
        let mut portfolio = portfolio;
        let mut appearance = appearance;
        spawn(async move {
            match load() {
                Ok((data, state)) => {
                    let config = get_assistant_config();
                    match GeminiClient::from_config(&config) {
                        Some(client) => match ChatSession::new(Arc::new(client), &data) {
                            Ok(chat) => {
                                let shared = session();
                                *shared.lock().await = Some(chat);
                                tracing::info!(model = %config.model, "Assistant session ready");
                            }
                            Err(e) => tracing::error!("Failed to start assistant session: {}", e),
                        },
                        None => tracing::info!("Assistant disabled: no API key"),
                    }

                    tracing::info!(
                        owner = %data.personal_info.name,
                        mode = %state.mode(),
                        effect = %state.effect(),
                        "Portfolio loaded"
                    );
                    appearance.set(Some(state));
                    portfolio.set(Some(Arc::new(data)));
                }
                Err(e) => {
                    tracing::error!("Failed to load portfolio data: {:#}", e);
                    load_error.set(Some(format!("{:#}", e)));
                }
            }
        });
    });

    let theme_css = appearance
        .read()
        .as_ref()
        .map(|a| a.stylesheet())
        .unwrap_or_default();
    let ready = portfolio.read().is_some() && appearance.read().is_some();

    rsx! {
        style { {GLOBAL_STYLES} }
        style { id: "dynamic-theme-styles", {theme_css} }
        if ready {
            Router::<Route> {}
        } else if let Some(error) = load_error() {
            div { class: "load-screen load-failed",
                p { "Failed to load portfolio." }
                p { class: "load-detail", "{error}" }
            }
        } else {
            div { class: "load-screen", "Loading Portfolio..." }
        }
    }
}
