//! Atomic file writes.
//!
//! Content goes to `.{filename}.tmp` in the target directory, is synced, and
//! then renamed over the target. Source and destination share a directory,
//! so the rename stays on one filesystem.

use crate::error::{Result, SokaError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SokaError::GeneratorError(format!(
            "failed to replace '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Create `path` and its parents. Returns whether anything was created.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(path).map_err(|e| {
        SokaError::GeneratorError(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(true)
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            SokaError::GeneratorError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        SokaError::GeneratorError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            SokaError::GeneratorError(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}
