//! Home command implementation.
//!
//! The `drive home` command prints the home directory for the shell
//! wrapper to `cd` into.

use std::io::Write;

use crate::error::{DriveError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The home command implementation.
#[derive(Debug, Default)]
pub struct HomeCommand;

impl HomeCommand {
    /// Create a new home command.
    pub fn new() -> Self {
        Self
    }

    /// Write the home directory to `out`.
    pub fn write_to(&self, out: &mut dyn Write) -> Result<()> {
        let home = dirs::home_dir().ok_or(DriveError::HomeDirUnavailable)?;
        writeln!(out, "{}", home.display())?;
        Ok(())
    }
}

impl Command for HomeCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.write_to(&mut std::io::stdout())?;
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_home_directory() {
        let mut out = Vec::new();
        HomeCommand::new().write_to(&mut out).unwrap();

        let expected = format!("{}\n", dirs::home_dir().unwrap().display());
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
