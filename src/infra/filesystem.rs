//! Filesystem operations
//!
//! Handles file and directory operations.

use std::path::Path;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    std::fs::create_dir_all(path).map_err(|e| FilesystemError::CreateDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Write content to a file
pub fn write_file(path: &Path, content: &str) -> Result<(), FilesystemError> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(path, content).map_err(|e| FilesystemError::WriteFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Read content from a file
pub fn read_file(path: &Path) -> Result<String, FilesystemError> {
    std::fs::read_to_string(path).map_err(|e| FilesystemError::ReadFile {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

/// Remove a file or symlink if it exists
///
/// Uses symlink_metadata so a dangling symlink is still removed instead of
/// being reported as absent.
pub fn remove_entry(path: &Path) -> Result<(), FilesystemError> {
    match std::fs::symlink_metadata(path) {
        Ok(meta) => {
            let result = if meta.is_dir() {
                std::fs::remove_dir_all(path)
            } else {
                std::fs::remove_file(path)
            };
            result.map_err(|e| FilesystemError::Remove {
                path: path.to_path_buf(),
                error: e.to_string(),
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FilesystemError::Remove {
            path: path.to_path_buf(),
            error: e.to_string(),
        }),
    }
}

/// Create a symbolic link, replacing any existing entry at the link path
pub fn symlink(target: &Path, link: &Path) -> Result<(), FilesystemError> {
    remove_entry(link)?;
    std::os::unix::fs::symlink(target, link).map_err(|e| FilesystemError::Symlink {
        link: link.to_path_buf(),
        target: target.to_path_buf(),
        error: e.to_string(),
    })
}
