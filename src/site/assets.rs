//! Static asset copying.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Recursively copy every file under `source_dir` into `dest_dir`.
///
/// Destination directories are created as needed. Returns the number of
/// files copied.
pub fn copy_recursive(source_dir: &Path, dest_dir: &Path) -> Result<usize> {
    if !source_dir.exists() {
        return Err(Error::InvalidPath(source_dir.display().to_string()));
    }
    fs::create_dir_all(dest_dir)?;

    let mut copied = 0;
    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        let from = entry.path();
        let dest = dest_dir.join(entry.file_name());

        if from.is_dir() {
            copied += copy_recursive(&from, &dest)?;
        } else {
            log::debug!("copying {} -> {}", from.display(), dest.display());
            fs::copy(&from, &dest)?;
            copied += 1;
        }
    }
    Ok(copied)
}
