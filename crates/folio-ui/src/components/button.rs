//! Button Components
//!
//! Button styles used across the page:
//! - Solid: filled accent, the main call to action
//! - Outline: accent border, "Get In Touch" and "Reset to Default"
//! - Card: card-colored, secondary calls to action
//! - Ghost: round icon buttons in the navbar and panel headers

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled accent background
    #[default]
    Solid,
    /// Transparent with accent border
    Outline,
    /// Card background, primary text
    Card,
    /// No chrome until hovered
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Solid => "btn btn-solid",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Card => "btn btn-card",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Outline,
///         onclick: move |_| appearance.write().reset(),
///         "Reset to Default"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Anchor styled as a button.
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub href: String,
    pub children: Element,
    /// Open in a new tab/window
    #[props(default = false)]
    pub external: bool,
    /// Suggested file name when the target is a download
    #[props(default)]
    pub download: Option<String>,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
}

#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());
    let target = if props.external { "_blank" } else { "_self" };

    rsx! {
        a {
            class: "{full_class}",
            href: "{props.href}",
            target: "{target}",
            rel: if props.external { "noopener noreferrer" } else { "" },
            download: props.download.clone(),
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon button for compact actions (close, toggle, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            title: "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>, #[props(default = "Close".to_string())] label: String) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: label,
            class: "close-btn".to_string(),
            svg {
                width: "24",
                height: "24",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: "M6 18L18 6M6 6l12 12" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Solid.class(), "btn btn-solid");
        assert_eq!(ButtonVariant::Outline.class(), "btn btn-outline");
        assert_eq!(ButtonVariant::Card.class(), "btn btn-card");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Solid);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(join_class("btn", None), "btn");
        assert_eq!(join_class("btn", Some("")), "btn");
        assert_eq!(join_class("btn", Some("wide")), "btn wide");
    }
}
