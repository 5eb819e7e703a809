//! File system utilities.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Writes content to a file atomically using a temp file and rename.
///
/// The temp file is created in the same directory as the target so the
/// rename stays on one filesystem.
pub fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
}

/// Creates an empty file (and its parent directories) if nothing exists at
/// `path`. Existing files are left untouched.
pub fn ensure_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;

    Ok(())
}
