//! Error types for Drive operations.
//!
//! This module defines [`DriveError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DriveError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DriveError::Other`) for unexpected errors
//! - A damaged bookmark file is never an error: it reads as an empty list
//! - Cancelling the picker is a session outcome, not an error

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Drive operations.
#[derive(Debug, Error)]
pub enum DriveError {
    /// Path to park does not exist or is not a directory.
    #[error("Path does not exist or is not a directory: {}", path.display())]
    InvalidPath { path: PathBuf },

    /// The editor could not be started or exited unsuccessfully.
    #[error("Failed to open editor '{editor}': {message}")]
    EditorLaunch { editor: String, message: String },

    /// The interactive picker needs a terminal to capture keys.
    #[error("The directory picker needs an interactive terminal")]
    NotATerminal,

    /// No home directory could be determined for the current user.
    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Drive operations.
pub type Result<T> = std::result::Result<T, DriveError>;
