//! Theme customizer drawer.
//!
//! Edits either palette (the tab, not the active mode, decides which), picks
//! the background effect and resets to the document's palettes. Every change
//! is saved as it happens.

use dioxus::prelude::*;
use folio_core::{BackgroundEffect, ThemeKey, ThemeMode};
use folio_ui::{control_id, Button, ButtonVariant, CloseButton, ColorField, SelectField, Tabs};

use crate::context::{update_appearance, use_appearance};

fn drawer_class(open: bool) -> &'static str {
    if open {
        "drawer open"
    } else {
        "drawer"
    }
}

/// Color pickers for one group of keys.
#[component]
fn ColorGroup(title: String, mode: ThemeMode, keys: Vec<ThemeKey>) -> Element {
    let appearance = use_appearance();
    let guard = appearance.read();
    let Some(state) = guard.as_ref() else {
        return rsx! {};
    };
    let colors = state.config().colors(mode).clone();
    drop(guard);

    rsx! {
        div { class: "drawer-group",
            h4 { class: "drawer-group-title", "{title}" }
            for key in keys {
                ColorField {
                    key: "{key.name()}-{mode}",
                    id: control_id(key.name(), mode.as_str()),
                    label: key.label().to_string(),
                    value: colors.get(key).to_string(),
                    onchange: move |value: String| {
                        update_appearance(appearance, |a| a.set_color(mode, key, &value));
                    },
                }
            }
        }
    }
}

/// Palette a tab label edits.
fn mode_for_tab(label: &str) -> ThemeMode {
    if label == ThemeMode::Light.label() {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    }
}

#[component]
pub fn ThemeCustomizer(open: Signal<bool>) -> Element {
    let mut open = open;
    let appearance = use_appearance();
    let mut tab = use_signal(|| ThemeMode::Dark);

    let effect = appearance
        .read()
        .as_ref()
        .map(|a| a.effect())
        .unwrap_or_default();
    let tabs: Vec<String> = [ThemeMode::Dark, ThemeMode::Light]
        .iter()
        .map(|m| m.label().to_string())
        .collect();
    let effects: Vec<String> = BackgroundEffect::SELECTABLE
        .iter()
        .map(|e| e.name().to_string())
        .collect();

    rsx! {
        aside { class: drawer_class(open()), "aria-hidden": if open() { "false" } else { "true" },
            div { class: "drawer-header",
                h3 { class: "drawer-title", "Customize" }
                CloseButton { onclick: move |_| open.set(false) }
            }

            div { class: "drawer-content",
                Tabs {
                    tabs: tabs,
                    selected: tab().label().to_string(),
                    on_select: move |label: String| tab.set(mode_for_tab(&label)),
                }

                ColorGroup {
                    title: "Core Palette".to_string(),
                    mode: tab(),
                    keys: ThemeKey::BASE.to_vec(),
                }
                ColorGroup {
                    title: "Background Animation".to_string(),
                    mode: tab(),
                    keys: ThemeKey::ANIMATION.to_vec(),
                }

                div { class: "drawer-group bordered",
                    h4 { class: "drawer-group-title", "Background Effect" }
                    SelectField {
                        id: "vantaEffect".to_string(),
                        options: effects,
                        selected: effect.name().to_string(),
                        onchange: move |name: String| {
                            match name.parse::<BackgroundEffect>() {
                                Ok(effect) => update_appearance(appearance, |a| a.set_effect(effect)),
                                Err(e) => tracing::warn!("Ignoring effect selection: {}", e),
                            }
                        },
                    }
                }
            }

            div { class: "drawer-footer",
                Button {
                    variant: ButtonVariant::Outline,
                    class: "full-width".to_string(),
                    onclick: move |_| update_appearance(appearance, |a| a.reset()),
                    "Reset to Default"
                }
            }
        }
    }
}
