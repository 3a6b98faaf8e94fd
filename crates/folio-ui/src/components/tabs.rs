//! Tab Bar Component
//!
//! Horizontal row of tabs with an accent underline on the active one.

use dioxus::prelude::*;

/// Properties for the Tabs component
#[derive(Clone, PartialEq, Props)]
pub struct TabsProps {
    /// Tab labels, in display order
    pub tabs: Vec<String>,
    /// Currently active label
    pub selected: String,
    /// Handler called with the clicked label
    pub on_select: EventHandler<String>,
}

/// Displays a horizontal row of selectable tabs
///
/// # Example
///
/// ```rust,ignore
/// let mut tab = use_signal(|| "Dark".to_string());
///
/// rsx! {
///     Tabs {
///         tabs: vec!["Dark".to_string(), "Light".to_string()],
///         selected: tab(),
///         on_select: move |t| tab.set(t)
///     }
/// }
/// ```
#[component]
pub fn Tabs(props: TabsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "tabs",
            role: "tablist",
            for tab in props.tabs.iter() {
                {
                    let tab_clone = tab.clone();
                    let is_selected = selected == *tab;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{tab}",
                            class: tab_class(is_selected),
                            role: "tab",
                            "aria-selected": if is_selected { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(tab_clone.clone());
                            },
                            "{tab}"
                        }
                    }
                }
            }
        }
    }
}

fn tab_class(selected: bool) -> &'static str {
    if selected {
        "tab active"
    } else {
        "tab"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_tab_class() {
        assert_eq!(tab_class(true), "tab active");
        assert_eq!(tab_class(false), "tab");
    }
}
