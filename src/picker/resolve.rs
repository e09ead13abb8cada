//! Turning a confirmed bookmark into its effect.

use std::io::Write;
use std::path::Path;

use crate::config::Settings;
use crate::error::Result;
use crate::shell::{launch_editor, write_channel};
use crate::ui::UserInterface;

use super::PickerMode;

/// Apply `mode` to the chosen directory.
///
/// Navigate and run-command modes write the path to the shell channel and
/// echo it on `out`; the shell wrapper does the `cd` (and runs the command).
/// Open-editor mode launches the editor here and now.
pub fn resolve_selection(
    path: &Path,
    mode: &PickerMode,
    settings: &Settings,
    ui: &mut dyn UserInterface,
    out: &mut dyn Write,
) -> Result<()> {
    match mode {
        PickerMode::Navigate | PickerMode::RunCommand(_) => {
            write_channel(&settings.output_file, path)?;
            writeln!(out, "{}", path.display())?;
        }
        PickerMode::OpenEditor => {
            launch_editor(&settings.editor, path)?;
            ui.success(&format!("Opened {} in {}", path.display(), settings.editor));
        }
    }
    Ok(())
}
