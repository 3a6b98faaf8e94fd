//! Work history as an accordion timeline.

use dioxus::prelude::*;
use folio_core::{ExperienceItem, Section};
use folio_ui::SectionHeading;

use crate::components::ChevronDownIcon;

/// New open index after clicking entry `clicked`.
///
/// Clicking the open entry closes it; clicking another one switches to it.
pub fn toggle_index(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

fn is_toggle_key(key: &Key) -> bool {
    match key {
        Key::Enter => true,
        Key::Character(c) => c == " ",
        _ => false,
    }
}

#[component]
pub fn Experience(items: Vec<ExperienceItem>) -> Element {
    // First entry starts expanded
    let mut open = use_signal(|| Some(0usize));

    rsx! {
        div { class: "section-body narrow fade-in-up",
            SectionHeading { title: Section::Experience.heading().to_string() }
            div { class: "timeline",
                for (index, item) in items.iter().enumerate() {
                    {
                        let is_open = open() == Some(index);
                        let chevron = if is_open { "icon-md chevron open" } else { "icon-md chevron" };
                        rsx! {
                            div { key: "{index}", class: "timeline-item",
                                span { class: "timeline-dot", span { class: "timeline-dot-inner" } }
                                div {
                                    class: "timeline-header",
                                    role: "button",
                                    tabindex: "0",
                                    "aria-expanded": if is_open { "true" } else { "false" },
                                    "aria-controls": "experience-panel-{index}",
                                    onclick: move |_| {
                                        let next = toggle_index(open(), index);
                                        open.set(next);
                                    },
                                    onkeydown: move |e: KeyboardEvent| {
                                        if is_toggle_key(&e.key()) {
                                            let next = toggle_index(open(), index);
                                            open.set(next);
                                        }
                                    },
                                    div {
                                        h3 { class: "timeline-role",
                                            "{item.role}"
                                            span { class: "accent-text at", "@" }
                                            "{item.company}"
                                        }
                                        time { class: "timeline-period", "{item.period}" }
                                    }
                                    ChevronDownIcon { class: chevron.to_string() }
                                }
                                div {
                                    id: "experience-panel-{index}",
                                    class: if is_open { "timeline-panel open" } else { "timeline-panel" },
                                    div { class: "timeline-panel-inner",
                                        ul { class: "timeline-points",
                                            for (i, point) in item.description.iter().enumerate() {
                                                li { key: "{i}", "{point}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
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
    fn clicking_open_entry_closes_it() {
        assert_eq!(toggle_index(Some(0), 0), None);
    }

    #[test]
    fn clicking_other_entry_switches() {
        assert_eq!(toggle_index(Some(0), 2), Some(2));
        assert_eq!(toggle_index(None, 1), Some(1));
    }
}
