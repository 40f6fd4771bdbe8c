//! Profile form - create a new user profile
//!
//! Six bound text inputs in a responsive 4-column grid with continuous
//! validation and touched-gated error display.

use dioxus::prelude::*;

use rosterdesk_domain::{ProfileField, UserProfileDraft};

use crate::application::ProfileFormState;
use crate::presentation::components::common::{FormField, Header};
use crate::presentation::helpers::grid_helpers::grid_column_style;
use crate::ui::{use_layout_mode, LayoutMode};

/// Props for the profile form view.
#[derive(Props, Clone, PartialEq)]
pub struct ProfileFormViewProps {
    /// Invoked with the draft when a submit passes validation.
    pub on_complete: EventHandler<UserProfileDraft>,
}

/// Profile creation form: six text inputs and a submit action.
#[component]
pub fn ProfileFormView(props: ProfileFormViewProps) -> Element {
    let layout = use_layout_mode();
    let mut form = use_signal(ProfileFormState::new);
    let on_complete = props.on_complete;

    rsx! {
        div {
            class: "profile-form",

            Header {
                title: "CREATE USER",
                subtitle: "Create a New User Profile",
            }

            div {
                class: "form-grid",
                style: "display: grid; gap: 30px; grid-template-columns: repeat(4, minmax(0, 1fr));",

                for field in ProfileField::all().iter().copied() {
                    ProfileFieldInput {
                        key: "{field.name()}",
                        field: field,
                        form: form,
                        layout: layout,
                    }
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "submit-button",
                    onclick: move |_| {
                        let result = form.write().submit();
                        match result {
                            Ok(draft) => on_complete.call(draft),
                            Err(e) => tracing::debug!(error = %e, "submission blocked"),
                        }
                    },
                    "Create New User"
                }
            }
        }
    }
}

/// Props for a single bound text input.
#[derive(Props, Clone, PartialEq)]
struct ProfileFieldInputProps {
    field: ProfileField,
    form: Signal<ProfileFormState>,
    layout: LayoutMode,
}

/// One labeled text input bound to the form state: keystrokes update the
/// draft, blur marks the field touched, and the current error (if visible)
/// renders as helper text.
#[component]
fn ProfileFieldInput(props: ProfileFieldInputProps) -> Element {
    let field = props.field;
    let mut form = props.form;

    let value = form.read().value(field);
    let error = form.read().visible_error(field);

    rsx! {
        FormField {
            label: field.label(),
            required: true,
            style: grid_column_style(field, props.layout),
            error: error,
            children: rsx! {
                input {
                    r#type: "text",
                    class: "field-input",
                    name: "{field.name()}",
                    value: "{value}",
                    oninput: move |e| form.write().set_value(field, e.value()),
                    onblur: move |_| form.write().blur(field),
                }
            }
        }
    }
}
