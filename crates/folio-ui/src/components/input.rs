//! Input Field Components
//!
//! Text input, color picker and dropdown used by the assistant panel and the
//! theme customizer. All of them are controlled: the caller owns the value
//! and receives every change.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Accessible label when there is no visible one
    #[props(default)]
    pub aria_label: Option<String>,
    /// Input type (text, email, password, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut question = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: question(),
///         oninput: move |s| question.set(s),
///         placeholder: "Ask about projects...".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let input_class = if extra_class.is_empty() {
        "input-field".to_string()
    } else {
        format!("input-field {}", extra_class)
    };

    rsx! {
        input {
            id: props.id.clone(),
            class: "{input_class}",
            r#type: "{props.input_type}",
            value: "{props.value}",
            placeholder: props.placeholder.as_deref().unwrap_or(""),
            "aria-label": props.aria_label.clone(),
            disabled: props.disabled,
            oninput: move |e| props.oninput.call(e.value()),
        }
    }
}

/// Element id for a labelled control, e.g. `bgColor-dark`.
pub fn control_id(name: &str, scope: &str) -> String {
    format!("{}-{}", name, scope)
}

/// Properties for the ColorField component
#[derive(Clone, PartialEq, Props)]
pub struct ColorFieldProps {
    /// Element id, also used by the label
    pub id: String,
    pub label: String,
    /// Current color (`#rrggbb`)
    pub value: String,
    pub onchange: EventHandler<String>,
}

/// Label on the left, color swatch on the right; clicking the swatch opens
/// the native picker.
#[component]
pub fn ColorField(props: ColorFieldProps) -> Element {
    rsx! {
        div { class: "color-field",
            label { class: "color-field-label", r#for: "{props.id}", "{props.label}" }
            div { class: "color-swatch-wrapper",
                input {
                    id: "{props.id}",
                    class: "color-input",
                    r#type: "color",
                    value: "{props.value}",
                    oninput: move |e| props.onchange.call(e.value()),
                }
                div {
                    class: "color-swatch",
                    style: "background-color: {props.value};",
                }
            }
        }
    }
}

/// Properties for the SelectField component
#[derive(Clone, PartialEq, Props)]
pub struct SelectFieldProps {
    pub id: String,
    /// Option values, shown as-is
    pub options: Vec<String>,
    pub selected: String,
    pub onchange: EventHandler<String>,
}

/// Native dropdown with a chevron.
#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    rsx! {
        div { class: "select-wrapper",
            select {
                id: "{props.id}",
                class: "select-field",
                value: "{props.selected}",
                onchange: move |e| props.onchange.call(e.value()),
                for choice in props.options.iter() {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: *choice == props.selected,
                        "{choice}"
                    }
                }
            }
            span { class: "select-chevron", "aria-hidden": "true",
                svg {
                    width: "16",
                    height: "16",
                    view_box: "0 0 20 20",
                    fill: "currentColor",
                    path { d: "M9.293 12.95l.707.707L15.657 8l-1.414-1.414L10 10.828 5.757 6.586 4.343 8z" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_ids_are_scoped() {
        assert_eq!(control_id("bgColor", "dark"), "bgColor-dark");
        assert_ne!(control_id("bgColor", "dark"), control_id("bgColor", "light"));
    }
}
