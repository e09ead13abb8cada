//! Bookmark storage.
//!
//! - [`BookmarkStore`] owns the persisted list of parked directories
//! - [`normalize`] turns user input into the absolute form stored on disk

mod bookmarks;
mod path;

pub use bookmarks::{BookmarkFile, BookmarkStore};
pub use path::{normalize, normalize_against};

use std::path::PathBuf;

use crate::error::{DriveError, Result};

/// Get the default bookmark file path (`~/.config/drive/paths.json`).
pub fn default_store_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(DriveError::HomeDirUnavailable)?;
    Ok(home.join(".config").join("drive").join("paths.json"))
}
