//! Unpark command implementation.
//!
//! The `drive unpark` command removes a bookmark, either the one named on
//! the command line or one picked from a simple select prompt.

use std::path::PathBuf;

use crate::cli::args::UnparkArgs;
use crate::error::Result;
use crate::picker::hint_for;
use crate::store::{normalize, BookmarkStore};
use crate::ui::{Prompt, PromptOption, PromptResult, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The unpark command implementation.
pub struct UnparkCommand {
    store: BookmarkStore,
    args: UnparkArgs,
}

impl UnparkCommand {
    /// Create a new unpark command.
    pub fn new(store: BookmarkStore, args: UnparkArgs) -> Self {
        Self { store, args }
    }

    /// Ask which bookmark to remove. `None` means there was nothing to ask
    /// about or the user backed out.
    fn choose(&self, ui: &mut dyn UserInterface) -> Result<Option<PathBuf>> {
        let paths = self.store.list();
        if paths.is_empty() {
            ui.message("No parked directories.");
            return Ok(None);
        }

        let options = paths
            .iter()
            .map(|p| PromptOption {
                label: format!("{} ({})", p.display(), hint_for(p)),
                value: p.to_string_lossy().to_string(),
            })
            .collect();

        let prompt = Prompt {
            key: "unpark".to_string(),
            question: "Select a directory to unpark:".to_string(),
            options,
        };

        match ui.prompt(&prompt)? {
            PromptResult::Selected(value) => Ok(Some(PathBuf::from(value))),
            PromptResult::Cancelled => {
                ui.message("Cancelled");
                Ok(None)
            }
        }
    }
}

impl Command for UnparkCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = match &self.args.path {
            Some(path) => path.clone(),
            None => match self.choose(ui)? {
                Some(path) => path,
                None => return Ok(CommandResult::success()),
            },
        };

        let shown = normalize(&target)?;
        if self.store.remove(&target)? {
            ui.success(&format!("Unparked: {}", shown.display()));
        } else {
            ui.warning(&format!("Not parked: {}", shown.display()));
        }

        Ok(CommandResult::success())
    }
}
