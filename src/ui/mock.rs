//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use drive::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("unpark", "/srv/app");
//!
//! ui.message("Parked directories:");
//! ui.success("Parked: /srv/app");
//!
//! assert!(ui.has_message("Parked directories"));
//! assert!(ui.has_success("/srv/app"));
//! ```

use std::collections::HashMap;

use crate::error::Result;

use super::{Prompt, PromptResult, UserInterface};

/// Sentinel response that makes a mocked prompt report cancellation.
pub const CANCEL_RESPONSE: &str = "<cancel>";

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    prompt_responses: HashMap<String, String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a prompt key.
    ///
    /// Use [`CANCEL_RESPONSE`] to simulate the user pressing Esc.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        Ok(match self.prompt_responses.get(&prompt.key).cloned() {
            Some(r) if r == CANCEL_RESPONSE => PromptResult::Cancelled,
            Some(r) => PromptResult::Selected(r),
            None => prompt
                .options
                .first()
                .map(|o| PromptResult::Selected(o.value.clone()))
                .unwrap_or(PromptResult::Cancelled),
        })
    }
}
