//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Styling is
//! skipped when `NO_COLOR` is set.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        paint(&text, |t| format!("{}", t.red().bold()))
    }
}

fn paint<T: Display>(text: &T, styled: impl FnOnce(&str) -> String) -> String {
    let plain = text.to_string();
    if output::is_no_color() {
        plain
    } else {
        styled(&plain)
    }
}
