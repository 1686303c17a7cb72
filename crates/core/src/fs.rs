//! Filesystem utilities

use std::fs;
use std::path::Path;

use log::{error, info};

/// Create a directory and all parent directories if they don't exist
pub fn create_dir_all(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
        info!("Created directory: {}", path.display());
    }
    Ok(())
}

/// Ensure the directory holding `file` exists, creating it if necessary
///
/// Returns true if the directory exists afterwards.
pub fn ensure_dir_exists(file: &Path) -> bool {
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return true,
    };

    if dir.is_dir() {
        return true;
    }

    match create_dir_all(dir) {
        Ok(_) => true,
        Err(e) => {
            error!("Failed to create directory {}: {}", dir.display(), e);
            false
        }
    }
}

/// Check if a path exists
pub fn path_exists(path: &str) -> bool {
    Path::new(path).exists()
}
