//! Prune command implementation.
//!
//! The `drive prune` command forgets parked directories that were deleted.

use crate::error::Result;
use crate::store::BookmarkStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The prune command implementation.
pub struct PruneCommand {
    store: BookmarkStore,
}

impl PruneCommand {
    /// Create a new prune command.
    pub fn new(store: BookmarkStore) -> Self {
        Self { store }
    }
}

impl Command for PruneCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.store.prune_invalid()? {
            0 => ui.message("Nothing to prune."),
            1 => ui.success("Pruned 1 missing directory"),
            n => ui.success(&format!("Pruned {} missing directories", n)),
        }
        Ok(CommandResult::success())
    }
}
