//! Formatted line types.

use serde::{Deserialize, Serialize};

/// A single line of formatted output, before page placement.
///
/// Indentation is carried as a nesting level rather than baked into the
/// text, so the paginator decides how deep levels are drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Line text without leading indentation
    pub text: String,

    /// Nesting depth (0 = top level)
    pub indent_level: usize,
}

impl Line {
    /// Create a new line.
    pub fn new(text: impl Into<String>, indent_level: usize) -> Self {
        Self {
            text: text.into(),
            indent_level,
        }
    }

    /// The line as drawn: two spaces per indent level, then the text.
    pub fn indented_text(&self) -> String {
        if self.indent_level == 0 {
            return self.text.clone();
        }
        let mut text = "  ".repeat(self.indent_level);
        text.push_str(&self.text);
        text
    }

    /// Check if the line renders as blank.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}
