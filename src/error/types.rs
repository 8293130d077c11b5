//! Error types
//!
//! Domain-specific error types for the file operations core and the
//! repository resolution layer. Each error maps to an HTTP-style status
//! code; the messages are the exact strings exposed to callers, while the
//! underlying cause is logged at the raise site and never leaves the server.

use std::fmt;

/// File operation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOpsError {
    /// Malformed or unsafe input, detected before any I/O (400)
    Validation(String),
    /// Target absent where existence was required (404)
    NotFound(String),
    /// Target exists but has the wrong shape (400)
    Conflict(String),
    /// Unexpected filesystem failure; carries a fixed generic message (500)
    Internal(String),
}

impl FileOpsError {
    /// HTTP-style status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            FileOpsError::Validation(_) | FileOpsError::Conflict(_) => 400,
            FileOpsError::NotFound(_) => 404,
            FileOpsError::Internal(_) => 500,
        }
    }

    /// Caller-facing message
    pub fn message(&self) -> &str {
        match self {
            FileOpsError::Validation(m)
            | FileOpsError::NotFound(m)
            | FileOpsError::Conflict(m)
            | FileOpsError::Internal(m) => m,
        }
    }
}

impl fmt::Display for FileOpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for FileOpsError {}

/// Repository resolution errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    MissingRepositoryId,
    UnknownRepository(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::MissingRepositoryId => write!(f, "Repository id is required"),
            RepositoryError::UnknownRepository(id) => write!(f, "Unknown repository: {}", id),
        }
    }
}

impl std::error::Error for RepositoryError {}

impl From<RepositoryError> for FileOpsError {
    fn from(error: RepositoryError) -> Self {
        FileOpsError::Validation(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(FileOpsError::Validation("x".into()).status_code(), 400);
        assert_eq!(FileOpsError::Conflict("x".into()).status_code(), 400);
        assert_eq!(FileOpsError::NotFound("x".into()).status_code(), 404);
        assert_eq!(FileOpsError::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn test_repository_error_maps_to_validation() {
        let error: FileOpsError = RepositoryError::UnknownRepository("docs".into()).into();
        assert_eq!(error.status_code(), 400);
        assert_eq!(error.message(), "Unknown repository: docs");
    }
}
