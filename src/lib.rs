//! Drive - bookmark directories and jump back to them.
//!
//! Drive keeps a list of "parked" directories and lets you pick one from
//! an interactive list. A small shell function wraps the binary and does
//! the actual `cd` (or runs a command) once a directory is chosen.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings read from the environment
//! - [`error`] - Error types and result aliases
//! - [`picker`] - The interactive picker and its state machine
//! - [`shell`] - Shell hand-off file and editor launching
//! - [`store`] - The persisted bookmark list
//! - [`ui`] - Status output and simple prompts
//!
//! # Example
//!
//! ```
//! use drive::store::BookmarkStore;
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let store = BookmarkStore::open(temp.path().join("paths.json"));
//!
//! assert!(store.add(temp.path()).unwrap());
//! assert!(!store.add(temp.path()).unwrap());
//! assert_eq!(store.list().len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod picker;
pub mod shell;
pub mod store;
pub mod ui;

pub use error::{DriveError, Result};
