//! List command implementation.
//!
//! The `drive list` command shows parked directories, numbered from 1.

use std::io::Write;

use crate::error::Result;
use crate::store::BookmarkStore;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Shown whenever there is nothing to list or pick.
pub const EMPTY_HINT: &str =
    "No parked directories. Use \"drive park\" to add the current directory.";

/// The list command implementation.
pub struct ListCommand {
    store: BookmarkStore,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(store: BookmarkStore) -> Self {
        Self { store }
    }

    /// Write the listing to `out`. The empty-store hint and the spacing
    /// around the listing are status output and go through `ui`.
    pub fn write_to(&self, ui: &mut dyn UserInterface, out: &mut dyn Write) -> Result<()> {
        let paths = self.store.list();
        if paths.is_empty() {
            ui.message(EMPTY_HINT);
            return Ok(());
        }

        ui.message("");
        writeln!(out, "Parked directories:")?;
        for (index, path) in paths.iter().enumerate() {
            writeln!(out, "  {}. {}", index + 1, path.display())?;
        }
        ui.message("");

        Ok(())
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.write_to(ui, &mut std::io::stdout())?;
        Ok(CommandResult::success())
    }
}
