//! Park command implementation.
//!
//! The `drive park` command bookmarks the current directory.

use std::path::PathBuf;

use crate::cli::args::ParkArgs;
use crate::error::Result;
use crate::store::{normalize, BookmarkStore};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The park command implementation.
pub struct ParkCommand {
    store: BookmarkStore,
    args: ParkArgs,
}

impl ParkCommand {
    /// Create a new park command.
    pub fn new(store: BookmarkStore, args: ParkArgs) -> Self {
        Self { store, args }
    }

    /// The directory this command parks.
    pub fn target(&self) -> PathBuf {
        self.args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Command for ParkCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let target = self.target();
        let shown = normalize(&target)?;

        if self.store.add(&target)? {
            ui.success(&format!("Parked: {}", shown.display()));
        } else {
            ui.message(&format!("Already parked: {}", shown.display()));
        }

        Ok(CommandResult::success())
    }
}
