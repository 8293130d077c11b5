//! Operation facade and entry point
//!
//! `FileSystemOperations` composes the read/write and management operation
//! sets over one shared root. `FileOperations` additionally resolves which
//! root to use and converts every outcome into the `FileOperationResult`
//! envelope, so no error escapes this layer.

use std::path::PathBuf;

use crate::error::{FileOpsError, RepositoryError};
use crate::fileops::management::ManagementOperations;
use crate::fileops::read_write::ReadWriteOperations;
use crate::fileops::results::{
    DirectoryContents, ExistenceInfo, FileContent, FileOperationResult, FileTree,
};
use crate::fileops::tree::TreeBuilder;
use crate::repository::{RepositoryResolver, RootSource};

/// Read/write and management operations sharing one root directory
#[derive(Debug, Clone)]
pub struct FileSystemOperations {
    read_write: ReadWriteOperations,
    management: ManagementOperations,
}

impl FileSystemOperations {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        FileSystemOperations {
            read_write: ReadWriteOperations::new(root.clone()),
            management: ManagementOperations::new(root),
        }
    }

    pub fn read_file(&self, path: &str) -> Result<FileContent, FileOpsError> {
        self.read_write.read_file(path)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<(), FileOpsError> {
        self.read_write.write_file(path, content)
    }

    pub fn exists(&self, path: &str) -> Result<ExistenceInfo, FileOpsError> {
        self.read_write.exists(path)
    }

    pub fn delete_file(&self, path: &str) -> Result<(), FileOpsError> {
        self.management.delete_file(path)
    }

    pub fn move_file(&self, source_path: &str, destination_dir: &str) -> Result<(), FileOpsError> {
        self.management.move_file(source_path, destination_dir)
    }

    pub fn rename_file(&self, source_path: &str, new_name: &str) -> Result<(), FileOpsError> {
        self.management.rename_file(source_path, new_name)
    }
}

/// Entry point bound to one resolved root directory
///
/// Constructed per request; holds no state beyond the root binding and
/// shares nothing with concurrent instances.
#[derive(Debug, Clone)]
pub struct FileOperations {
    ops: FileSystemOperations,
    tree: TreeBuilder,
}

impl FileOperations {
    /// Resolve the root for the given source and bind all operations to it
    pub fn new(
        source: &RootSource,
        resolver: &dyn RepositoryResolver,
    ) -> Result<Self, RepositoryError> {
        let root = match source {
            RootSource::Mock => resolver.mock_root(),
            RootSource::Repository(id) => resolver.resolve(id)?,
        };
        Ok(FileOperations::with_root(root))
    }

    /// Bind all operations to an already-resolved root
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        FileOperations {
            ops: FileSystemOperations::new(root.clone()),
            tree: TreeBuilder::new(root),
        }
    }

    pub fn read_file(&self, path: &str) -> FileOperationResult<FileContent> {
        self.ops.read_file(path).into()
    }

    pub fn write_file(&self, path: &str, content: &str) -> FileOperationResult<()> {
        FileOperationResult::from_unit(self.ops.write_file(path, content))
    }

    pub fn delete_file(&self, path: &str) -> FileOperationResult<()> {
        FileOperationResult::from_unit(self.ops.delete_file(path))
    }

    pub fn exists(&self, path: &str) -> FileOperationResult<ExistenceInfo> {
        self.ops.exists(path).into()
    }

    pub fn move_file(&self, source_path: &str, destination_path: &str) -> FileOperationResult<()> {
        FileOperationResult::from_unit(self.ops.move_file(source_path, destination_path))
    }

    pub fn rename_file(&self, source_path: &str, new_name: &str) -> FileOperationResult<()> {
        FileOperationResult::from_unit(self.ops.rename_file(source_path, new_name))
    }

    pub fn get_file_tree(&self) -> FileOperationResult<FileTree> {
        self.tree.build_tree().into()
    }

    pub fn get_directory_contents(&self, path: &str) -> FileOperationResult<DirectoryContents> {
        self.tree.directory_contents(path).into()
    }
}
