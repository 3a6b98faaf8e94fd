//! Sticky top navigation.

use dioxus::prelude::*;
use folio_core::{Section, ThemeMode};

use crate::components::{MenuIcon, MoonIcon, PaintBrushIcon, SunIcon};
use crate::context::{update_appearance, use_appearance};

/// Vertical scroll, in pixels, past which the header gets its background.
const SCROLL_THRESHOLD: u32 = 10;

fn scroll_script() -> String {
    format!(
        r#"var last = null;
function report() {{
  var scrolled = window.scrollY > {threshold};
  if (scrolled !== last) {{ last = scrolled; dioxus.send(scrolled); }}
}}
window.addEventListener('scroll', report, {{ passive: true }});
report();"#,
        threshold = SCROLL_THRESHOLD
    )
}

fn header_class(scrolled: bool, menu_open: bool) -> &'static str {
    if scrolled || menu_open {
        "site-header solid"
    } else {
        "site-header"
    }
}

#[component]
pub fn Navbar(name: String, mode: ThemeMode, customizer_open: Signal<bool>) -> Element {
    let mut customizer_open = customizer_open;
    let appearance = use_appearance();
    let mut scrolled = use_signal(|| false);
    let mut menu_open = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(&scroll_script());
            while let Ok(value) = eval.recv::<bool>().await {
                scrolled.set(value);
            }
        });
    });

    let toggle_theme = move |_| {
        update_appearance(appearance, |a| {
            let mode = a.toggle_mode()?;
            tracing::info!(%mode, "Theme toggled");
            Ok(())
        });
    };

    rsx! {
        header { class: header_class(scrolled(), menu_open()),
            nav { class: "container nav-bar",
                a { class: "brand", href: "#home", "{name}" }

                div { class: "nav-links",
                    for section in Section::ALL {
                        a { key: "{section.anchor()}", class: "nav-link", href: section.href(), "{section.label()}" }
                    }
                }

                div { class: "nav-actions",
                    button {
                        class: "btn-ghost",
                        "aria-label": "Toggle theme",
                        onclick: toggle_theme,
                        if mode == ThemeMode::Light {
                            MoonIcon { class: "icon-md" }
                        } else {
                            SunIcon { class: "icon-md" }
                        }
                    }
                    button {
                        class: "btn-ghost",
                        "aria-label": "Customize appearance",
                        onclick: move |_| customizer_open.set(true),
                        PaintBrushIcon { class: "icon-md" }
                    }
                    a { class: "btn btn-outline nav-cta", href: Section::Contact.href(), "Get In Touch" }
                    button {
                        class: "btn-ghost menu-toggle",
                        "aria-label": "Toggle menu",
                        "aria-expanded": if menu_open() { "true" } else { "false" },
                        onclick: move |_| menu_open.toggle(),
                        MenuIcon { open: menu_open(), class: "icon-md" }
                    }
                }
            }

            if menu_open() {
                div { class: "mobile-menu",
                    for section in Section::ALL {
                        a {
                            key: "{section.anchor()}",
                            class: "nav-link",
                            href: section.href(),
                            onclick: move |_| menu_open.set(false),
                            "{section.label()}"
                        }
                    }
                    a {
                        class: "btn btn-outline",
                        href: Section::Contact.href(),
                        onclick: move |_| menu_open.set(false),
                        "Get In Touch"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_solid_when_scrolled_or_menu_open() {
        assert_eq!(header_class(false, false), "site-header");
        assert_eq!(header_class(true, false), "site-header solid");
        assert_eq!(header_class(false, true), "site-header solid");
        assert_eq!(header_class(true, true), "site-header solid");
    }

    #[test]
    fn scroll_report_uses_threshold() {
        assert!(scroll_script().contains("window.scrollY > 10"));
    }
}
