//! Lexical path normalization.
//!
//! Bookmarks are compared by their absolute, lexically resolved form:
//! `.` and `..` segments are folded away, but symlinks are left alone.
//! Two symlinks that point at the same directory are two bookmarks.

use std::path::{Component, Path, PathBuf};

use crate::error::Result;

/// Normalize `path` against the current working directory.
pub fn normalize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize_against(Path::new("/"), path));
    }
    let cwd = std::env::current_dir()?;
    Ok(normalize_against(&cwd, path))
}

/// Normalize `path` against an explicit base directory.
///
/// Relative paths are joined onto `base`. `..` never climbs above the root.
pub fn normalize_against(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `pop` on a bare root is a no-op, which is what we want.
                out.pop();
            }
            Component::Normal(segment) => out.push(segment),
        }
    }
    out
}
