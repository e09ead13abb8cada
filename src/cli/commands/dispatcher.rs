//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::Settings;
use crate::error::Result;
use crate::store::BookmarkStore;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output and prompts
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
///
/// Owns the one [`BookmarkStore`] for the invocation and hands it to
/// whichever command runs.
pub struct CommandDispatcher {
    store: BookmarkStore,
    settings: Settings,
}

impl CommandDispatcher {
    /// Create a new dispatcher over `store`.
    pub fn new(store: BookmarkStore, settings: Settings) -> Self {
        Self { store, settings }
    }

    /// Get the bookmark store.
    pub fn store(&self) -> &BookmarkStore {
        &self.store
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand opens the picker.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Park(args)) => {
                let cmd = super::park::ParkCommand::new(self.store.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::List) => {
                let cmd = super::list::ListCommand::new(self.store.clone());
                cmd.execute(ui)
            }
            Some(Commands::Home) => super::home::HomeCommand::new().execute(ui),
            Some(Commands::Unpark(args)) => {
                let cmd = super::unpark::UnparkCommand::new(self.store.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Prune) => {
                let cmd = super::prune::PruneCommand::new(self.store.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd = super::pick::PickCommand::new(
                    self.store.clone(),
                    self.settings.clone(),
                    cli.editor,
                );
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    fn dispatcher(temp: &TempDir) -> CommandDispatcher {
        let store = BookmarkStore::open(temp.path().join("paths.json"));
        CommandDispatcher::new(store, Settings::from_lookup(|_| None))
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn dispatches_park_and_list() {
        let temp = TempDir::new().unwrap();
        let dispatcher = dispatcher(&temp);
        let dir = temp.path().to_string_lossy().to_string();
        let mut ui = MockUI::new();

        let cli = Cli::parse_from(["drive", "park", dir.as_str()]);
        assert!(dispatcher.dispatch(&cli, &mut ui).unwrap().success);

        assert!(ui.has_success(&format!("Parked: {}", dir)));

        let cli = Cli::parse_from(["drive", "list"]);
        assert!(dispatcher.dispatch(&cli, &mut ui).unwrap().success);
        assert_eq!(dispatcher.store().list(), vec![temp.path().to_path_buf()]);
    }

    #[test]
    fn no_subcommand_with_empty_store_reports_empty() {
        let temp = TempDir::new().unwrap();
        let dispatcher = dispatcher(&temp);
        let mut ui = MockUI::new();

        let cli = Cli::parse_from(["drive"]);
        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("No parked directories"));
    }
}
