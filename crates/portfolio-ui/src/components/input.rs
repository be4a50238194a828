//! Form Field Components
//!
//! Text inputs and the message textarea used by the contact form.
//! Each field carries a leading icon slot and a focus glow from the
//! stylesheet.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Form field name (also used to derive the element id)
    pub name: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the input is required
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional leading icon
    #[props(default)]
    pub icon: Option<Element>,
}

/// Text input field
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         name: "email".to_string(),
///         input_type: "email".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         placeholder: "Your Email".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = field_id(&props.name);

    rsx! {
        div { class: "form-field",
            if let Some(icon) = props.icon.clone() {
                span { class: "form-field-icon", {icon} }
            }
            input {
                id: "{id}",
                name: "{props.name}",
                class: "input-field",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub name: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 6)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub icon: Option<Element>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let id = field_id(&props.name);

    rsx! {
        div { class: "form-field",
            if let Some(icon) = props.icon.clone() {
                span { class: "form-field-icon", {icon} }
            }
            textarea {
                id: "{id}",
                name: "{props.name}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Element id for a named form field
fn field_id(name: &str) -> String {
    format!("field-{}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids_are_stable() {
        assert_eq!(field_id("email"), "field-email");
        assert_eq!(field_id("email"), field_id("email"));
    }
}
