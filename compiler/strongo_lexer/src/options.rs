//! Lexer configuration.

use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_DIRECTIVE_MARKER: &str = "@";
pub(crate) const DEFAULT_LEFT_DELIM: &str = "{{";
pub(crate) const DEFAULT_RIGHT_DELIM: &str = "}}";

/// Directive marker and action delimiters.
///
/// Empty strings mean "use the default". Deserializes from partial JSON,
/// e.g. `{"left_delim": "<%", "right_delim": "%>"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerOptions {
    /// Introduces a directive (default `@`).
    pub directive_marker: String,
    /// Opens an action (default `{{`).
    pub left_delim: String,
    /// Closes an action (default `}}`).
    pub right_delim: String,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            directive_marker: DEFAULT_DIRECTIVE_MARKER.to_string(),
            left_delim: DEFAULT_LEFT_DELIM.to_string(),
            right_delim: DEFAULT_RIGHT_DELIM.to_string(),
        }
    }
}

impl LexerOptions {
    #[must_use]
    pub fn with_directive_marker(mut self, marker: impl Into<String>) -> Self {
        self.directive_marker = marker.into();
        self
    }

    #[must_use]
    pub fn with_left_delim(mut self, delim: impl Into<String>) -> Self {
        self.left_delim = delim.into();
        self
    }

    #[must_use]
    pub fn with_right_delim(mut self, delim: impl Into<String>) -> Self {
        self.right_delim = delim.into();
        self
    }

    /// Replace empty overrides with the defaults.
    #[must_use]
    pub(crate) fn normalized(mut self) -> Self {
        if self.directive_marker.is_empty() {
            DEFAULT_DIRECTIVE_MARKER.clone_into(&mut self.directive_marker);
        }
        if self.left_delim.is_empty() {
            DEFAULT_LEFT_DELIM.clone_into(&mut self.left_delim);
        }
        if self.right_delim.is_empty() {
            DEFAULT_RIGHT_DELIM.clone_into(&mut self.right_delim);
        }
        self
    }
}

#[cfg(test)]
mod tests;
