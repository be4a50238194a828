//! Button Components
//!
//! Button styles used across the site:
//! - Gradient: indigo-to-purple fill for primary actions (send, explore)
//! - Outline: transparent with accent border
//! - Ghost: text-only, for inline actions
//! - Icon: square buttons for the nav bar (menu, theme)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Primary action - gradient fill, lifts on hover
    #[default]
    Gradient,
    /// Secondary action - accent border, transparent fill
    Outline,
    /// Subtle/inline action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Gradient => "btn-gradient",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

fn join_classes(base: &str, extra: Option<&str>) -> String {
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

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Gradient,
///         button_type: "submit".to_string(),
///         disabled: sending(),
///         "Send Message"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

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

/// Icon button for compact actions (menu, close, theme)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (svg element or character)
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
    let full_class = join_classes("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// "See More" / "See Less" toggle under the showcase grids
#[component]
pub fn SeeMoreButton(expanded: bool, onclick: EventHandler<()>) -> Element {
    let label = see_more_label(expanded);
    // Chevron points up when expanded
    let points = if expanded { "18 15 12 9 6 15" } else { "6 9 12 15 18 9" };

    rsx! {
        button {
            class: "see-more-btn",
            r#type: "button",
            "aria-expanded": "{expanded}",
            onclick: move |_| onclick.call(()),
            span { class: "see-more-label", "{label}" }
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                polyline { points: "{points}" }
            }
        }
    }
}

pub fn see_more_label(expanded: bool) -> &'static str {
    if expanded {
        "See Less"
    } else {
        "See More"
    }
}
