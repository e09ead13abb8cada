//! Picker command implementation.
//!
//! Running `drive` with no subcommand opens the interactive picker over the
//! parked directories and resolves the chosen one.

use std::io::Write;

use crate::config::Settings;
use crate::error::{DriveError, Result};
use crate::picker::{
    resolve_selection, PickerBackend, PickerMode, SelectionSession, SessionOutcome,
    TerminalPicker,
};
use crate::store::BookmarkStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::list::EMPTY_HINT;

/// The picker command implementation.
pub struct PickCommand {
    store: BookmarkStore,
    settings: Settings,
    editor: bool,
}

impl PickCommand {
    /// Create a new picker command. `editor` is the `--editor` flag.
    pub fn new(store: BookmarkStore, settings: Settings, editor: bool) -> Self {
        Self {
            store,
            settings,
            editor,
        }
    }

    /// The mode this invocation resolves into.
    pub fn mode(&self) -> PickerMode {
        PickerMode::from_settings(self.editor, &self.settings)
    }

    /// Run the picker against an explicit backend, writing the chosen path
    /// to `out`.
    pub fn run_with(
        &self,
        ui: &mut dyn UserInterface,
        backend: &mut dyn PickerBackend,
        out: &mut dyn Write,
    ) -> Result<CommandResult> {
        let session = SelectionSession::new(&self.store, self.mode());
        self.finish(session.run(backend, ui)?, ui, out)
    }

    fn finish(
        &self,
        outcome: SessionOutcome,
        ui: &mut dyn UserInterface,
        out: &mut dyn Write,
    ) -> Result<CommandResult> {
        match outcome {
            SessionOutcome::Resolved { path, mode } => {
                tracing::debug!("Resolved {:?} as {:?}", path, mode);
                resolve_selection(&path, &mode, &self.settings, ui, out)?;
            }
            SessionOutcome::Cancelled => tracing::debug!("Picker cancelled"),
            SessionOutcome::Empty => {}
        }
        Ok(CommandResult::success())
    }
}

impl Command for PickCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let session = SelectionSession::new(&self.store, self.mode());
        if session.outcome() == Some(SessionOutcome::Empty) {
            ui.message(EMPTY_HINT);
            return Ok(CommandResult::success());
        }

        let mut backend = TerminalPicker::new();
        if !backend.is_available() {
            return Err(DriveError::NotATerminal);
        }

        let outcome = session.run(&mut backend, ui)?;
        self.finish(outcome, ui, &mut std::io::stdout())
    }
}
