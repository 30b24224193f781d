//! Controlled single-field input form
//!
//! The form owns the input value. Every change replaces it, and submitting
//! hands back a notification instead of performing a default submission.

use std::fmt;

use tracing::debug;

use crate::component::Component;
use crate::node::{Element, Node};

pub const DEFAULT_PLACEHOLDER: &str = "Type something...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputForm {
    value: String,
    placeholder: String,
}

/// Result of submitting the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub value: String,
}

impl Submission {
    /// Notification text shown to the user
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You entered: {}", self.value)
    }
}

impl Default for InputForm {
    fn default() -> Self {
        Self::new()
    }
}

impl InputForm {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the controlled value
    pub fn on_change(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Append one character (terminal key input)
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character (terminal backspace)
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Submit the current value; the value is kept
    pub fn on_submit(&self) -> Submission {
        debug!(len = self.value.len(), "form submitted");
        Submission {
            value: self.value.clone(),
        }
    }
}

impl Component for InputForm {
    fn render(&self) -> Node {
        let input = Element::new("input")
            .attr("type", "text")
            .attr("value", self.value.as_str())
            .attr("placeholder", self.placeholder.as_str());
        let button = Element::new("button").attr("type", "submit").child("Submit");

        Element::new("form").child(input).child(button).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty_with_placeholder() {
        let form = InputForm::new();
        assert_eq!(form.value(), "");

        let node = form.render();
        let input = node.find("input").unwrap();
        assert_eq!(input.get_attr("value"), Some(""));
        assert_eq!(input.get_attr("placeholder"), Some("Type something..."));
    }

    #[test]
    fn test_change_then_submit() {
        let mut form = InputForm::new();
        form.on_change("abc");

        let submission = form.on_submit();
        assert_eq!(submission.message(), "You entered: abc");
        assert_eq!(submission.to_string(), "You entered: abc");
        assert_eq!(form.value(), "abc");
    }

    #[test]
    fn test_render_reflects_controlled_value() {
        let mut form = InputForm::new();
        form.push_char('h');
        form.push_char('i');
        form.push_char('!');
        form.pop_char();

        let node = form.render();
        assert_eq!(node.find("input").unwrap().get_attr("value"), Some("hi"));
        let button = node.find("button").unwrap();
        assert_eq!(button.get_attr("type"), Some("submit"));
        assert_eq!(button.children, vec![Node::text("Submit")]);
    }
}
