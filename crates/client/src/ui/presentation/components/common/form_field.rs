//! Shared labeled form-field wrapper.

use dioxus::prelude::*;

/// Props for [`FormField`].
#[derive(Props, Clone, PartialEq)]
pub struct FormFieldProps {
    /// Label shown above the control
    #[props(into)]
    pub label: String,
    /// Whether to mark the label with a required indicator
    #[props(default)]
    pub required: bool,
    /// Inline style for the wrapper (grid placement)
    #[props(into, default)]
    pub style: String,
    /// Error message shown as helper text under the control, if any
    #[props(default)]
    pub error: Option<String>,
    /// The form control itself
    pub children: Element,
}

/// Labeled wrapper around a single form control, with a helper-text slot for
/// its validation error.
#[component]
pub fn FormField(props: FormFieldProps) -> Element {
    rsx! {
        div {
            class: "form-field",
            style: "{props.style}",

            label {
                class: "field-label",
                "{props.label}"
                if props.required {
                    span { class: "field-required", " *" }
                }
            }

            {props.children}

            if let Some(error) = props.error.as_ref() {
                div { class: "field-error", "{error}" }
            }
        }
    }
}
