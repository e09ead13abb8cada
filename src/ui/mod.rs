//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for pipes, scripts and CI
//! - [`MockUI`] for tests
//!
//! The full-screen bookmark picker lives in [`crate::picker`]; this module
//! only covers status messages and the simple select prompt.
//!
//! # Example
//!
//! ```
//! use drive::ui::{create_ui, OutputMode};
//!
//! // Quiet mode keeps status output off the console
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.success("Parked: /tmp");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::{MockUI, CANCEL_RESPONSE};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, DriveTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a select prompt and get the user's choice.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;
}

/// A select-one prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and lookup).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Options to choose from.
    pub options: Vec<PromptOption>,
}

/// An option in a select prompt.
#[derive(Debug, Clone)]
pub struct PromptOption {
    /// Display label.
    pub label: String,
    /// Value returned when selected.
    pub value: String,
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// The value of the chosen option.
    Selected(String),
    /// The user backed out with Esc or `q`.
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_option_creation() {
        let opt = PromptOption {
            label: "Display Text".to_string(),
            value: "value".to_string(),
        };
        assert_eq!(opt.label, "Display Text");
        assert_eq!(opt.value, "value");
    }

    #[test]
    fn prompt_stores_options_in_order() {
        let prompt = Prompt {
            key: "unpark".to_string(),
            question: "Select a directory to unpark:".to_string(),
            options: vec![
                PromptOption {
                    label: "/a".to_string(),
                    value: "/a".to_string(),
                },
                PromptOption {
                    label: "/b".to_string(),
                    value: "/b".to_string(),
                },
            ],
        };
        assert_eq!(prompt.options.len(), 2);
        assert_eq!(prompt.options[1].value, "/b");
    }
}
