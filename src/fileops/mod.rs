//! File system operations core
//!
//! Path validation, single-file read/write operations, management
//! operations, and filtered tree construction, all scoped to one resolved
//! root directory.

pub mod management;
pub mod operations;
pub mod read_write;
pub mod results;
pub mod tree;
pub mod validation;

pub use operations::{FileOperations, FileSystemOperations};
pub use results::{
    DirectoryContents, ExistenceInfo, FileContent, FileNode, FileOperationResult, FileTree,
    NodeTimestamp, NodeType,
};
