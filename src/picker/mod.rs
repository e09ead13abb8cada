//! Interactive bookmark picker.
//!
//! The picker is split into a pure state machine and an input backend:
//!
//! - [`SelectionSession`] holds the listed bookmarks and the cursor, applies
//!   one [`PickerEvent`] at a time and talks to the
//!   [`BookmarkStore`](crate::store::BookmarkStore) when a bookmark is deleted
//! - [`PickerBackend`] draws the list and turns key presses into events;
//!   [`TerminalPicker`] does this on stderr, [`ScriptedPicker`] replays a
//!   fixed script for tests
//! - [`resolve_selection`] turns a confirmed choice into a `cd` hand-off or
//!   an editor launch
//!
//! # Example
//!
//! ```
//! use drive::picker::{PickerEvent, PickerMode, ScriptedPicker, SelectionSession, SessionOutcome};
//! use drive::store::BookmarkStore;
//! use drive::ui::MockUI;
//!
//! let temp = tempfile::TempDir::new().unwrap();
//! let store = BookmarkStore::open(temp.path().join("paths.json"));
//! store.add(temp.path()).unwrap();
//!
//! let mut backend = ScriptedPicker::new([PickerEvent::Select]);
//! let mut ui = MockUI::new();
//! let outcome = SelectionSession::new(&store, PickerMode::Navigate)
//!     .run(&mut backend, &mut ui)
//!     .unwrap();
//!
//! assert!(matches!(outcome, SessionOutcome::Resolved { .. }));
//! ```

mod resolve;
mod scripted;
mod session;
mod terminal;

pub use resolve::resolve_selection;
pub use scripted::{RenderedView, ScriptedPicker};
pub use session::{SelectionSession, SessionState};
pub use terminal::TerminalPicker;

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::Result;
use crate::ui::DriveTheme;

/// One input event from the picker backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// Move the cursor up one row (wraps to the bottom).
    Up,
    /// Move the cursor down one row (wraps to the top).
    Down,
    /// Confirm the bookmark under the cursor.
    Select,
    /// Unpark the bookmark under the cursor.
    Delete,
    /// Leave without choosing.
    Cancel,
}

/// What confirming a bookmark should produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerMode {
    /// Hand the directory to the shell wrapper so it can `cd` there.
    Navigate,
    /// Like `Navigate`; the shell wrapper then runs this command there.
    RunCommand(String),
    /// Open the directory in the configured editor.
    OpenEditor,
}

impl PickerMode {
    /// Pick the mode for an invocation. `--editor` wins over `DRIVE_COMMAND`.
    pub fn from_settings(editor: bool, settings: &Settings) -> Self {
        if editor {
            Self::OpenEditor
        } else if let Some(cmd) = &settings.command {
            Self::RunCommand(cmd.clone())
        } else {
            Self::Navigate
        }
    }

    /// The question shown above the list.
    pub fn prompt(&self, theme: &DriveTheme) -> String {
        match self {
            Self::Navigate => "Select a directory:".to_string(),
            Self::RunCommand(cmd) => {
                format!("Select a directory to run {} in:", theme.command.apply_to(cmd))
            }
            Self::OpenEditor => "Select a directory to open in editor:".to_string(),
        }
    }

    /// Key help shown below the list.
    pub fn footer(&self) -> &'static str {
        match self {
            Self::RunCommand(_) => "↑/↓ Navigate • Enter Select & Run • d Delete • Esc Cancel",
            _ => "↑/↓ Navigate • Enter Select • d Delete • Esc Cancel",
        }
    }
}

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct PickerView<'a> {
    /// Mode of the running session.
    pub mode: &'a PickerMode,
    /// Bookmarks in display order.
    pub items: &'a [PathBuf],
    /// Index of the highlighted bookmark.
    pub cursor: usize,
}

/// Draws the picker and captures key presses.
pub trait PickerBackend {
    /// Draw (or redraw) the picker.
    fn render(&mut self, view: &PickerView<'_>) -> Result<()>;

    /// Block until the next event.
    fn next_event(&mut self) -> Result<PickerEvent>;

    /// Tear the picker down. Calling this on a closed picker is a no-op.
    fn close(&mut self) -> Result<()>;
}

/// How a picker session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A bookmark was confirmed.
    Resolved { path: PathBuf, mode: PickerMode },
    /// The user backed out.
    Cancelled,
    /// Nothing left to pick from.
    Empty,
}

/// Short label shown next to a bookmark: its last path component.
pub fn hint_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
