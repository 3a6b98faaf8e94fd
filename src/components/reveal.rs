//! Reveal-on-scroll for page sections.
//!
//! One observer watches every `[data-reveal]` section and reports each the
//! first time it becomes visible. Revealed sections never hide again.

use std::collections::HashSet;

use dioxus::prelude::*;
use folio_core::Section;

/// Fraction of a section that must be visible before it reveals.
const REVEAL_THRESHOLD: f64 = 0.1;

fn observer_script() -> String {
    format!(
        r#"var targets = document.querySelectorAll('[data-reveal]');
if (typeof IntersectionObserver === 'undefined') {{
  targets.forEach(function(el) {{ dioxus.send(el.id); }});
}} else {{
  var observer = new IntersectionObserver(function(entries) {{
    entries.forEach(function(entry) {{
      if (entry.isIntersecting) {{
        observer.unobserve(entry.target);
        dioxus.send(entry.target.id);
      }}
    }});
  }}, {{ threshold: {threshold} }});
  targets.forEach(function(el) {{ observer.observe(el); }});
}}"#,
        threshold = REVEAL_THRESHOLD
    )
}

fn section_for_anchor(anchor: &str) -> Option<Section> {
    Section::ALL.into_iter().find(|s| s.anchor() == anchor)
}

/// Sections revealed so far.
///
/// Call from the page that renders the [`RevealSection`]s; the observer is
/// attached after the first render.
pub fn use_reveal_tracker() -> Signal<HashSet<Section>> {
    let mut revealed = use_signal(HashSet::new);

    use_effect(move || {
        spawn(async move {
            let mut eval = document::eval(&observer_script());
            while let Ok(anchor) = eval.recv::<String>().await {
                match section_for_anchor(&anchor) {
                    Some(section) => {
                        tracing::debug!(section = section.label(), "Section revealed");
                        revealed.write().insert(section);
                    }
                    None => tracing::warn!(anchor, "Unknown section reported visible"),
                }
            }
        });
    });

    revealed
}

fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "reveal-section revealed"
    } else {
        "reveal-section"
    }
}

/// Section wrapper; children render only once revealed.
#[component]
pub fn RevealSection(section: Section, revealed: bool, children: Element) -> Element {
    rsx! {
        section {
            id: section.anchor(),
            class: reveal_class(revealed),
            "data-reveal": "true",
            if revealed {
                {children}
            }
        }
    }
}
