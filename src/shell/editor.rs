//! Editor launching.

use std::path::Path;
use std::process::Command;

use crate::error::{DriveError, Result};

/// Split an editor command line into program and leading arguments.
///
/// `EDITOR` values such as `code -w` carry flags; they are split on
/// whitespace. Returns `None` for a blank command line.
pub fn split_editor(editor: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = editor.split_whitespace();
    let program = parts.next()?;
    Some((program, parts.collect()))
}

/// Open `dir` in `editor` and wait for the editor process to exit.
///
/// The editor inherits the terminal, so terminal editors work as well as
/// GUI launchers that return immediately.
pub fn launch_editor(editor: &str, dir: &Path) -> Result<()> {
    let (program, args) = split_editor(editor).ok_or_else(|| DriveError::EditorLaunch {
        editor: editor.to_string(),
        message: "editor command is empty".to_string(),
    })?;

    tracing::debug!("Launching {} {:?} {:?}", program, args, dir);

    let status = Command::new(program)
        .args(&args)
        .arg(dir)
        .status()
        .map_err(|e| DriveError::EditorLaunch {
            editor: editor.to_string(),
            message: e.to_string(),
        })?;

    if status.success() {
        Ok(())
    } else {
        let message = match status.code() {
            Some(code) => format!("exited with code {}", code),
            None => "terminated by signal".to_string(),
        };
        Err(DriveError::EditorLaunch {
            editor: editor.to_string(),
            message,
        })
    }
}
