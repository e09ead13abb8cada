//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Drive - bookmark directories and jump back to them.
#[derive(Debug, Parser)]
#[command(name = "drive")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Open the selected directory in your editor
    #[arg(short, long)]
    pub editor: bool,

    /// Path to the bookmark file (overrides ~/.config/drive/paths.json)
    #[arg(long, global = true, env = "DRIVE_STORE", value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bookmark the current directory
    Park(ParkArgs),

    /// List all parked directories
    List,

    /// Print the home directory
    Home,

    /// Remove a directory from bookmarks
    Unpark(UnparkArgs),

    /// Forget parked directories that no longer exist
    Prune,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `park` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ParkArgs {
    /// Directory to park (defaults to the current directory)
    pub path: Option<PathBuf>,
}

/// Arguments for the `unpark` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct UnparkArgs {
    /// Directory to unpark (prompts when omitted)
    pub path: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
