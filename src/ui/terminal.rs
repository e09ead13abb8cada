//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{
    prompt_user, should_use_colors, DriveTheme, NonInteractiveUI, OutputMode, Prompt,
    PromptResult, UserInterface,
};

/// Interactive terminal UI implementation.
///
/// Everything it shows goes to stderr. Stdout is reserved for what a
/// command exists to print (a path, a listing, a completion script), so
/// `$(drive)` keeps working while the picker reports deletions.
pub struct TerminalUI {
    term: Term,
    theme: DriveTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI on stderr.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            DriveTheme::new()
        } else {
            DriveTheme::plain()
        };

        Self::with_term(Term::stderr(), theme, mode)
    }

    /// Create a terminal UI writing to `term`.
    pub fn with_term(term: Term, theme: DriveTheme, mode: OutputMode) -> Self {
        Self { term, theme, mode }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term)
    }
}

/// Create the appropriate UI: the terminal UI when stderr is a terminal,
/// the non-interactive one otherwise.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    if Term::stderr().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
