//! Grid layout helper functions
//!
//! Pure helpers for the profile form's responsive 4-column grid, testable
//! independently of Dioxus components.

use rosterdesk_domain::ProfileField;

use crate::ui::LayoutMode;

/// Number of columns in the form grid.
pub const GRID_COLUMNS: u8 = 4;

/// Declared column span for a field when the layout is wide.
///
/// Name fields sit side by side; everything else takes the full row.
pub fn declared_span(field: ProfileField) -> u8 {
    match field {
        ProfileField::FirstName | ProfileField::LastName => 2,
        ProfileField::Email
        | ProfileField::Contact
        | ProfileField::Address1
        | ProfileField::Address2 => GRID_COLUMNS,
    }
}

/// Span a field actually renders with.
///
/// Narrow layouts collapse every field to the full row regardless of its
/// declared span.
pub fn resolved_span(field: ProfileField, mode: LayoutMode) -> u8 {
    match mode {
        LayoutMode::Narrow => GRID_COLUMNS,
        LayoutMode::Wide => declared_span(field),
    }
}

/// Inline `grid-column` style for a field under the given layout mode.
pub fn grid_column_style(field: ProfileField, mode: LayoutMode) -> String {
    format!("grid-column: span {};", resolved_span(field, mode))
}
