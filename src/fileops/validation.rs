//! Path validation
//!
//! Deny-list checks on user-supplied relative paths. The path is scanned as
//! a string, never canonicalized or resolved through the filesystem, so
//! traversal sequences are rejected wherever they appear. Pure and total
//! for all inputs; performs no I/O.

use crate::error::FileOpsError;

/// Validate a user-supplied relative path
///
/// Rules apply in order and the first match wins:
/// empty input, whitespace-only input, traversal markers (`..` or `~`),
/// then absolute-path markers (leading `/` or a `:` anywhere). Colons are
/// rejected in any position, which over-rejects names like `file:name.md`
/// rather than parsing platform-specific absolute-path grammars.
pub fn validate_path(path: &str) -> Result<(), FileOpsError> {
    if path.is_empty() {
        return Err(FileOpsError::Validation("Invalid file path".into()));
    }

    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(FileOpsError::Validation("Empty file path".into()));
    }

    if trimmed.contains("..") || trimmed.contains('~') {
        return Err(FileOpsError::Validation("Path traversal not allowed".into()));
    }

    if trimmed.starts_with('/') || trimmed.contains(':') {
        return Err(FileOpsError::Validation("Absolute paths not allowed".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error_of(path: &str) -> String {
        validate_path(path).unwrap_err().message().to_string()
    }

    #[test]
    fn test_accepts_relative_paths() {
        assert!(validate_path("guide.md").is_ok());
        assert!(validate_path("docs/guide.md").is_ok());
        assert!(validate_path("a/b/c/d.md").is_ok());
        assert!(validate_path("notes.txt").is_ok());
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert_eq!(error_of(""), "Invalid file path");
        assert_eq!(error_of("   "), "Empty file path");
        assert_eq!(error_of("\t\n"), "Empty file path");
    }

    #[test]
    fn test_rejects_traversal_anywhere() {
        for path in [
            "../etc/passwd",
            "docs/../../secret",
            "a..b",
            "..\\windows",
            "~",
            "~/notes.md",
            "docs/~backup.md",
        ] {
            assert_eq!(error_of(path), "Path traversal not allowed", "path: {path}");
        }
    }

    #[test]
    fn test_rejects_absolute_paths() {
        for path in ["/etc/passwd", "/docs/guide.md", "C:\\docs", "C:/docs", "file:name.md"] {
            assert_eq!(error_of(path), "Absolute paths not allowed", "path: {path}");
        }
    }

    #[test]
    fn test_traversal_wins_over_absolute() {
        // Both rules match; the traversal rule is checked first.
        assert_eq!(error_of("/a/../b"), "Path traversal not allowed");
    }
}
