//! Pure presentation helpers

pub mod grid_helpers;
