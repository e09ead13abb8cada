//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Running `drive` with no
//! subcommand goes to the picker.

pub mod completions;
pub mod dispatcher;
pub mod home;
pub mod list;
pub mod park;
pub mod pick;
pub mod prune;
pub mod unpark;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
