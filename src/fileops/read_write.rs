//! Read/write operations
//!
//! Single-file read, write, and existence checks against one root
//! directory. Every call revalidates its path and touches at most the
//! target file plus newly created ancestor directories.

use chrono::{DateTime, SecondsFormat, Utc};
use log::{error, info};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::FileOpsError;
use crate::fileops::results::{ExistenceInfo, FileContent};
use crate::fileops::validation::validate_path;

/// Read, write, and existence checks for individual files
#[derive(Debug, Clone)]
pub struct ReadWriteOperations {
    root: PathBuf,
}

impl ReadWriteOperations {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ReadWriteOperations { root: root.into() }
    }

    /// Read a file as UTF-8, with its last-modified timestamp
    pub fn read_file(&self, path: &str) -> Result<FileContent, FileOpsError> {
        validate_path(path)?;
        let full_path = self.root.join(path);

        if !full_path.exists() {
            return Err(FileOpsError::NotFound("File not found".into()));
        }
        if full_path.is_dir() {
            return Err(FileOpsError::Conflict(
                "Path is a directory, not a file".into(),
            ));
        }

        let content = fs::read_to_string(&full_path).map_err(|e| {
            error!("Failed to read {}: {}", full_path.display(), e);
            FileOpsError::Internal("Failed to read file".into())
        })?;
        let last_modified = modified_timestamp(&full_path).map_err(|e| {
            error!("Failed to stat {}: {}", full_path.display(), e);
            FileOpsError::Internal("Failed to read file".into())
        })?;

        Ok(FileContent {
            path: path.to_string(),
            content,
            last_modified,
        })
    }

    /// Create or overwrite a file, creating missing parent directories
    ///
    /// The empty string is valid content.
    pub fn write_file(&self, path: &str, content: &str) -> Result<(), FileOpsError> {
        validate_path(path)?;
        let full_path = self.root.join(path);

        if full_path.is_dir() {
            return Err(FileOpsError::Conflict("Cannot write to directory".into()));
        }

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                error!(
                    "Failed to create parent directories for {}: {}",
                    full_path.display(),
                    e
                );
                FileOpsError::Internal("Failed to write file".into())
            })?;
        }

        fs::write(&full_path, content).map_err(|e| {
            error!("Failed to write {}: {}", full_path.display(), e);
            FileOpsError::Internal("Failed to write file".into())
        })?;

        info!("Wrote {} ({} bytes)", full_path.display(), content.len());
        Ok(())
    }

    /// Check whether a path exists
    ///
    /// Absence is a successful negative result, not an error.
    pub fn exists(&self, path: &str) -> Result<ExistenceInfo, FileOpsError> {
        validate_path(path)?;
        let full_path = self.root.join(path);

        match fs::metadata(&full_path) {
            Ok(meta) => Ok(ExistenceInfo {
                exists: true,
                is_directory: meta.is_dir(),
            }),
            // NotADirectory covers paths routed through a file, e.g.
            // "a.md/child.md"; the target is just as absent as with ENOENT.
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                Ok(ExistenceInfo {
                    exists: false,
                    is_directory: false,
                })
            }
            Err(e) => {
                error!("Failed to stat {}: {}", full_path.display(), e);
                Err(FileOpsError::Internal(
                    "Failed to check file existence".into(),
                ))
            }
        }
    }
}

/// RFC 3339 modification timestamp of a filesystem entry
pub(crate) fn modified_timestamp(path: &Path) -> std::io::Result<String> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(DateTime::<Utc>::from(modified).to_rfc3339_opts(SecondsFormat::Millis, true))
}
