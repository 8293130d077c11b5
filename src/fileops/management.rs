//! Management operations
//!
//! Delete, move, and rename for files and whole directory subtrees. Moves
//! and renames are single rename calls; subtrees are never copied entry by
//! entry, so a same-device move is atomic as far as the filesystem allows.

use log::{error, info};
use std::fs;
use std::path::PathBuf;

use crate::error::FileOpsError;
use crate::fileops::validation::validate_path;

/// Delete, move, and rename operations
#[derive(Debug, Clone)]
pub struct ManagementOperations {
    root: PathBuf,
}

impl ManagementOperations {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ManagementOperations { root: root.into() }
    }

    /// Delete a file, or a directory together with everything under it
    pub fn delete_file(&self, path: &str) -> Result<(), FileOpsError> {
        validate_path(path)?;
        let full_path = self.root.join(path);

        if !full_path.exists() {
            return Err(FileOpsError::NotFound("File not found".into()));
        }

        let result = if full_path.is_dir() {
            fs::remove_dir_all(&full_path)
        } else {
            fs::remove_file(&full_path)
        };
        result.map_err(|e| {
            error!("Failed to delete {}: {}", full_path.display(), e);
            FileOpsError::Internal("Failed to delete file".into())
        })?;

        info!("Deleted {}", full_path.display());
        Ok(())
    }

    /// Move a file or directory into a destination directory, keeping its
    /// name
    ///
    /// The destination directory chain is created if missing. An existing
    /// entry at the computed target is overwritten, matching the rename
    /// syscall's semantics.
    pub fn move_file(&self, source_path: &str, destination_dir: &str) -> Result<(), FileOpsError> {
        validate_path(source_path).map_err(|e| {
            FileOpsError::Validation(format!("Invalid source path: {}", e.message()))
        })?;
        validate_path(destination_dir).map_err(|e| {
            FileOpsError::Validation(format!("Invalid destination path: {}", e.message()))
        })?;

        let source = self.root.join(source_path);
        if !source.exists() {
            return Err(FileOpsError::NotFound("Source file not found".into()));
        }

        let destination = self.root.join(destination_dir);
        fs::create_dir_all(&destination).map_err(|e| {
            error!(
                "Failed to create destination {}: {}",
                destination.display(),
                e
            );
            FileOpsError::Internal("Failed to move file".into())
        })?;

        let file_name = source.file_name().ok_or_else(|| {
            FileOpsError::Validation("Invalid source path: missing file name".into())
        })?;
        let target = destination.join(file_name);

        fs::rename(&source, &target).map_err(|e| {
            error!(
                "Failed to move {} to {}: {}",
                source.display(),
                target.display(),
                e
            );
            FileOpsError::Internal("Failed to move file".into())
        })?;

        info!("Moved {} to {}", source.display(), target.display());
        Ok(())
    }

    /// Rename a file or directory within its parent directory
    ///
    /// The new name must be a single path component; separators and
    /// traversal markers are rejected so the target cannot leave the
    /// source's parent. Overwrite-on-collision behavior is identical to
    /// `move_file`.
    pub fn rename_file(&self, source_path: &str, new_name: &str) -> Result<(), FileOpsError> {
        validate_path(source_path)?;
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(FileOpsError::Validation("New name is required".into()));
        }
        validate_path(new_name)
            .map_err(|e| FileOpsError::Validation(format!("Invalid new name: {}", e.message())))?;
        if new_name.contains('/') || new_name.contains('\\') {
            return Err(FileOpsError::Validation(
                "Invalid new name: Path separators not allowed".into(),
            ));
        }

        let source = self.root.join(source_path);
        if !source.exists() {
            return Err(FileOpsError::NotFound("File not found".into()));
        }

        // The joined source always has a parent, the root itself at minimum.
        let parent = source.parent().ok_or_else(|| {
            error!("No parent directory for {}", source.display());
            FileOpsError::Internal("Failed to rename file".into())
        })?;
        let target = parent.join(new_name);

        fs::rename(&source, &target).map_err(|e| {
            error!(
                "Failed to rename {} to {}: {}",
                source.display(),
                target.display(),
                e
            );
            FileOpsError::Internal("Failed to rename file".into())
        })?;

        info!("Renamed {} to {}", source.display(), target.display());
        Ok(())
    }
}
