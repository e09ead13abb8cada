//! Persistent bookmark storage.
//!
//! The store keeps an ordered list of absolute directory paths in a small
//! JSON file. Every call reads the file fresh and every mutation writes it
//! back before returning, so there is no in-memory cache to go stale.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::path::normalize;
use crate::error::{DriveError, Result};

/// On-disk shape of the bookmark file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkFile {
    /// Parked directories, oldest first.
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

/// File-backed set of parked directories.
#[derive(Debug, Clone)]
pub struct BookmarkStore {
    path: PathBuf,
}

impl BookmarkStore {
    /// Open the store backed by `path`, creating an empty file if needed.
    ///
    /// Creation is best-effort: a store that cannot be created still reads
    /// as empty, and the first mutation reports the underlying IO error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let store = Self { path: path.into() };
        if !store.path.exists() {
            if let Err(e) = store.save(&BookmarkFile::default()) {
                tracing::warn!("Could not create bookmark file {:?}: {}", store.path, e);
            }
        }
        store
    }

    /// Get the store path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parked directories that still exist, in the order they were parked.
    ///
    /// Missing directories are filtered out of the result but stay in the
    /// file; only [`prune_invalid`](Self::prune_invalid) rewrites it.
    pub fn list(&self) -> Vec<PathBuf> {
        self.load()
            .paths
            .into_iter()
            .filter(|p| p.is_dir())
            .collect()
    }

    /// Park a directory.
    ///
    /// Returns `Ok(false)` when the normalized path is already parked.
    pub fn add(&self, path: &Path) -> Result<bool> {
        let absolute = normalize(path)?;
        if !absolute.is_dir() {
            return Err(DriveError::InvalidPath { path: absolute });
        }

        let mut file = self.load();
        if file.paths.contains(&absolute) {
            tracing::debug!("Already parked: {:?}", absolute);
            return Ok(false);
        }

        tracing::debug!("Parking {:?}", absolute);
        file.paths.push(absolute);
        self.save(&file)?;
        Ok(true)
    }

    /// Unpark a directory.
    ///
    /// Returns `Ok(false)` when the normalized path was not parked.
    pub fn remove(&self, path: &Path) -> Result<bool> {
        let absolute = normalize(path)?;

        let mut file = self.load();
        let before = file.paths.len();
        file.paths.retain(|p| *p != absolute);

        if file.paths.len() == before {
            return Ok(false);
        }

        tracing::debug!("Unparked {:?}", absolute);
        self.save(&file)?;
        Ok(true)
    }

    /// Drop parked directories that no longer exist and persist the result.
    ///
    /// Returns how many entries were removed.
    pub fn prune_invalid(&self) -> Result<usize> {
        let mut file = self.load();
        let before = file.paths.len();
        file.paths.retain(|p| p.is_dir());
        let removed = before - file.paths.len();

        if removed > 0 {
            tracing::debug!("Pruned {} missing directories", removed);
            self.save(&file)?;
        }

        Ok(removed)
    }

    /// Read the bookmark file, treating a missing or damaged file as empty.
    fn load(&self) -> BookmarkFile {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!("Bookmark file {:?} unreadable: {}", self.path, e);
                return BookmarkFile::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!("Ignoring corrupt bookmark file {:?}: {}", self.path, e);
                BookmarkFile::default()
            }
        }
    }

    /// Write the bookmark file using the write-to-temp-then-rename pattern.
    fn save(&self, file: &BookmarkFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(file)
            .map_err(|e| anyhow::anyhow!("Failed to serialize bookmarks: {}", e))?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, &content)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}
