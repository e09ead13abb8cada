//! Runtime settings for Drive.
//!
//! Drive has no configuration file of its own. Everything tunable comes
//! from the environment, usually set by the shell wrapper:
//!
//! | Variable            | Effect                                        |
//! |---------------------|-----------------------------------------------|
//! | `DRIVE_OUTPUT_FILE` | where the chosen path is written for `cd`     |
//! | `DRIVE_COMMAND`     | command shown in the picker prompt            |
//! | `EDITOR`, `VISUAL`  | editor for `drive --editor` (fallback `code`) |
//!
//! The bookmark file location is handled by the CLI (`--store` /
//! `DRIVE_STORE`), see [`crate::store::default_store_path`].
//!
//! # Example
//!
//! ```
//! use drive::config::Settings;
//!
//! let settings = Settings::from_lookup(|key| match key {
//!     "DRIVE_COMMAND" => Some("npm test".to_string()),
//!     "VISUAL" => Some("vim".to_string()),
//!     _ => None,
//! });
//! assert_eq!(settings.command.as_deref(), Some("npm test"));
//! assert_eq!(settings.editor, "vim");
//! ```

use std::path::PathBuf;

/// Environment variable selecting the shell-channel output file.
pub const OUTPUT_FILE_VAR: &str = "DRIVE_OUTPUT_FILE";

/// Environment variable carrying the command the shell wrapper will run.
pub const COMMAND_VAR: &str = "DRIVE_COMMAND";

/// Editor used when neither `EDITOR` nor `VISUAL` is set.
pub const FALLBACK_EDITOR: &str = "code";

/// Settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// File the resolved path is written to.
    pub output_file: PathBuf,
    /// Command shown in the picker prompt, if any.
    pub command: Option<String>,
    /// Editor command line for open-editor mode.
    pub editor: String,
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary lookup (for testing).
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let output_file = get(OUTPUT_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_output_file);

        let editor = get("EDITOR")
            .or_else(|| get("VISUAL"))
            .unwrap_or_else(|| FALLBACK_EDITOR.to_string());

        Self {
            output_file,
            command: get(COMMAND_VAR),
            editor,
        }
    }
}

/// Default shell-channel file: `<tmpdir>/drive-output-<pid>`.
pub fn default_output_file() -> PathBuf {
    std::env::temp_dir().join(format!("drive-output-{}", std::process::id()))
}
