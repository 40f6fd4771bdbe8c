use dioxus::prelude::*;

use rosterdesk_domain::UserProfileDraft;

pub mod presentation;

/// Viewport width (logical px) below which every form field collapses to the
/// full row.
pub const FIELD_COLLAPSE_BREAKPOINT: f64 = 600.0;

/// Layout variant for column-span resolution.
/// This is passed via Dioxus context from the composition root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Wide,
    Narrow,
}

impl LayoutMode {
    /// Select the layout mode for a viewport width against a breakpoint.
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }
}

/// Hook to access the LayoutMode from Dioxus context
pub fn use_layout_mode() -> LayoutMode {
    use_context::<LayoutMode>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    rsx! {
        div {
            class: "app-shell",
            presentation::views::ProfileFormView {
                on_complete: move |draft: UserProfileDraft| {
                    // Completion action: this build only logs the draft.
                    match serde_json::to_string(&draft) {
                        Ok(payload) => {
                            tracing::info!(%payload, "new user profile submitted");
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "failed to serialize submitted draft");
                        }
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_below_breakpoint_are_narrow() {
        assert_eq!(
            LayoutMode::for_width(320.0, FIELD_COLLAPSE_BREAKPOINT),
            LayoutMode::Narrow
        );
        assert_eq!(
            LayoutMode::for_width(599.9, FIELD_COLLAPSE_BREAKPOINT),
            LayoutMode::Narrow
        );
    }

    #[test]
    fn widths_at_or_above_breakpoint_are_wide() {
        assert_eq!(
            LayoutMode::for_width(600.0, FIELD_COLLAPSE_BREAKPOINT),
            LayoutMode::Wide
        );
        assert_eq!(
            LayoutMode::for_width(1280.0, FIELD_COLLAPSE_BREAKPOINT),
            LayoutMode::Wide
        );
    }
}
