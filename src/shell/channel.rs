//! Shell-communication channel.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Write the resolved directory to the channel file, verbatim.
///
/// The file holds the path and nothing else (no trailing newline). The
/// shell wrapper owns the file afterwards and removes it.
pub fn write_channel(output_file: &Path, resolved: &Path) -> Result<()> {
    tracing::debug!("Writing {:?} to {:?}", resolved, output_file);
    fs::write(output_file, resolved.as_os_str().as_encoded_bytes())?;
    Ok(())
}
