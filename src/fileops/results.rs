//! File operation result types
//!
//! Defines the universal result envelope and the wire structures returned
//! by file operations.

use serde::{Serialize, Serializer};

use crate::error::FileOpsError;

/// Universal return envelope for every file operation
///
/// Exactly one of `data`/`error` is populated, consistent with `success`.
/// The status code follows HTTP conventions: 200 ok, 400 invalid input,
/// 404 not found, 500 unexpected failure.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileOperationResult<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub status_code: u16,
}

impl<T> FileOperationResult<T> {
    /// Successful result carrying a payload
    pub fn ok(data: T) -> Self {
        FileOperationResult {
            success: true,
            data: Some(data),
            error: None,
            status_code: 200,
        }
    }

    /// Failed result derived from an operation error
    pub fn err(error: FileOpsError) -> Self {
        FileOperationResult {
            success: false,
            data: None,
            error: Some(error.message().to_string()),
            status_code: error.status_code(),
        }
    }
}

impl FileOperationResult<()> {
    /// Successful result with no payload
    pub fn ok_empty() -> Self {
        FileOperationResult {
            success: true,
            data: None,
            error: None,
            status_code: 200,
        }
    }

    /// Envelope for operations that succeed without a payload
    pub fn from_unit(result: Result<(), FileOpsError>) -> Self {
        match result {
            Ok(()) => FileOperationResult::ok_empty(),
            Err(e) => FileOperationResult::err(e),
        }
    }
}

impl<T> From<Result<T, FileOpsError>> for FileOperationResult<T> {
    fn from(result: Result<T, FileOpsError>) -> Self {
        match result {
            Ok(data) => FileOperationResult::ok(data),
            Err(e) => FileOperationResult::err(e),
        }
    }
}

/// Contents of a single file, freshly read on every call
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileContent {
    pub path: String,
    pub content: String,
    /// RFC 3339 modification timestamp
    pub last_modified: String,
}

/// Result of an existence check
///
/// `is_directory` is meaningful only when `exists` is set.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExistenceInfo {
    pub exists: bool,
    pub is_directory: bool,
}

/// Kind of a tree entry
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    File,
    Directory,
}

/// Outcome of the per-entry stat during tree construction
///
/// A failed stat is a distinct observable state rather than a silently
/// empty timestamp; it serializes as an omitted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeTimestamp {
    Recorded(String),
    StatFailed,
}

impl NodeTimestamp {
    pub fn recorded(&self) -> Option<&str> {
        match self {
            NodeTimestamp::Recorded(ts) => Some(ts.as_str()),
            NodeTimestamp::StatFailed => None,
        }
    }

    pub fn is_stat_failed(&self) -> bool {
        matches!(self, NodeTimestamp::StatFailed)
    }
}

impl Serialize for NodeTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NodeTimestamp::Recorded(ts) => serializer.serialize_str(ts),
            NodeTimestamp::StatFailed => serializer.serialize_none(),
        }
    }
}

/// One entry in the filtered, sorted directory tree
///
/// `path` is relative to the root, POSIX-separated. `children` is present
/// only for directories, and only in the recursive tree.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FileNode {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileNode>>,
    #[serde(
        rename = "lastModified",
        skip_serializing_if = "NodeTimestamp::is_stat_failed"
    )]
    pub last_modified: NodeTimestamp,
}

/// Full recursive tree of a root directory
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FileTree {
    pub files: Vec<FileNode>,
}

/// Single-level directory listing used by interactive browsing
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DirectoryContents {
    pub path: String,
    pub entries: Vec<FileNode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_envelope_serialization() {
        let result = FileOperationResult::ok(ExistenceInfo {
            exists: true,
            is_directory: false,
        });
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "data": { "exists": true, "isDirectory": false },
                "statusCode": 200
            })
        );
    }

    #[test]
    fn test_err_envelope_serialization() {
        let result: FileOperationResult<FileContent> =
            FileOperationResult::err(FileOpsError::NotFound("File not found".into()));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "success": false,
                "error": "File not found",
                "statusCode": 404
            })
        );
    }

    #[test]
    fn test_unit_envelope_has_no_data_field() {
        let result = FileOperationResult::from_unit(Ok(()));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({ "success": true, "statusCode": 200 }));
    }

    #[test]
    fn test_node_serialization_omits_failed_stat() {
        let node = FileNode {
            name: "guide.md".into(),
            path: "docs/guide.md".into(),
            node_type: NodeType::File,
            children: None,
            last_modified: NodeTimestamp::StatFailed,
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({ "name": "guide.md", "path": "docs/guide.md", "type": "file" })
        );
    }

    #[test]
    fn test_node_serialization_with_timestamp() {
        let node = FileNode {
            name: "docs".into(),
            path: "docs".into(),
            node_type: NodeType::Directory,
            children: Some(vec![]),
            last_modified: NodeTimestamp::Recorded("2026-01-01T00:00:00.000Z".into()),
        };
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "directory");
        assert_eq!(value["lastModified"], "2026-01-01T00:00:00.000Z");
    }
}
