//! Tree construction
//!
//! Recursive directory scans producing filtered, sorted trees of markdown
//! content, plus the shallow single-level listing used by interactive
//! browsing.
//!
//! Filtering: entries whose name starts with `.` are dropped, files must
//! end exactly in `.md` (case-sensitive), directories are never filtered by
//! extension. Each level is sorted directories-first, then by name. A stat
//! failure on one entry is logged and recorded per node; a failure to scan
//! a directory fails the whole call.

use log::{error, warn};
use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::FileOpsError;
use crate::fileops::read_write::modified_timestamp;
use crate::fileops::results::{DirectoryContents, FileNode, FileTree, NodeTimestamp, NodeType};
use crate::fileops::validation::validate_path;

const MARKDOWN_EXTENSION: &str = ".md";

/// Builds filtered directory trees rooted at one trusted directory
///
/// The root itself is not validated; only caller-supplied paths appended to
/// it are, and the scan only ever descends.
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    root: PathBuf,
}

impl TreeBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        TreeBuilder { root: root.into() }
    }

    /// Build the full recursive tree, creating the root if it is missing
    ///
    /// A missing root yields an empty tree, not an error.
    pub fn build_tree(&self) -> Result<FileTree, FileOpsError> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|e| {
                error!("Failed to create root {}: {}", self.root.display(), e);
                FileOpsError::Internal("Failed to read file tree".into())
            })?;
            return Ok(FileTree { files: Vec::new() });
        }

        let files = scan_directory(&self.root, "", true).map_err(|e| {
            error!("Failed to scan {}: {}", self.root.display(), e);
            FileOpsError::Internal("Failed to read file tree".into())
        })?;
        Ok(FileTree { files })
    }

    /// List one directory level, with the same filtering and ordering as
    /// the full tree
    ///
    /// The empty path addresses the root.
    pub fn directory_contents(&self, path: &str) -> Result<DirectoryContents, FileOpsError> {
        if !path.is_empty() {
            validate_path(path)?;
        }
        let dir = if path.is_empty() {
            self.root.clone()
        } else {
            self.root.join(path)
        };

        if !dir.exists() {
            return Err(FileOpsError::NotFound("Directory not found".into()));
        }
        if !dir.is_dir() {
            return Err(FileOpsError::Conflict("Path is not a directory".into()));
        }

        let entries = scan_directory(&dir, path, false).map_err(|e| {
            error!("Failed to list {}: {}", dir.display(), e);
            FileOpsError::Internal("Failed to read directory".into())
        })?;
        Ok(DirectoryContents {
            path: path.to_string(),
            entries,
        })
    }
}

/// Scan one directory level, recursing into subdirectories when asked
fn scan_directory(dir: &Path, relative: &str, recurse: bool) -> io::Result<Vec<FileNode>> {
    let mut nodes = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }

        let is_dir = entry.file_type()?.is_dir();
        if !is_dir && !name.ends_with(MARKDOWN_EXTENSION) {
            continue;
        }

        let node_path = join_relative(relative, &name);
        let last_modified = stat_timestamp(&entry.path());
        let children = if is_dir && recurse {
            Some(scan_directory(&entry.path(), &node_path, true)?)
        } else {
            None
        };

        nodes.push(FileNode {
            name,
            path: node_path,
            node_type: if is_dir {
                NodeType::Directory
            } else {
                NodeType::File
            },
            children,
            last_modified,
        });
    }

    sort_nodes(&mut nodes);
    Ok(nodes)
}

fn stat_timestamp(path: &Path) -> NodeTimestamp {
    match modified_timestamp(path) {
        Ok(ts) => NodeTimestamp::Recorded(ts),
        Err(e) => {
            warn!("Failed to stat {}: {}", path.display(), e);
            NodeTimestamp::StatFailed
        }
    }
}

fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Directories before files, case-insensitive name order within each group
fn sort_nodes(nodes: &mut [FileNode]) {
    nodes.sort_by(|a, b| match (a.node_type, b.node_type) {
        (NodeType::Directory, NodeType::File) => Ordering::Less,
        (NodeType::File, NodeType::Directory) => Ordering::Greater,
        _ => compare_names(&a.name, &b.name),
    });
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, path: &str, content: &str) {
        let full = root.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }

    #[test]
    fn test_filters_hidden_and_non_markdown() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "guide.md", "x");
        write(tmp.path(), "notes.txt", "x");
        write(tmp.path(), "README.MD", "x");
        write(tmp.path(), ".hidden.md", "x");
        write(tmp.path(), ".obsidian/config", "x");

        let tree = TreeBuilder::new(tmp.path()).build_tree().unwrap();
        let names: Vec<&str> = tree.files.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["guide.md"]);
    }

    #[test]
    fn test_directories_survive_extension_filter() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "assets/logo.png", "x");
        write(tmp.path(), "docs/guide.md", "x");

        let tree = TreeBuilder::new(tmp.path()).build_tree().unwrap();
        let names: Vec<&str> = tree.files.iter().map(|n| n.name.as_str()).collect();
        // assets stays as a directory even though its only file is filtered
        assert_eq!(names, vec!["assets", "docs"]);
        assert!(tree.files[0].children.as_ref().unwrap().is_empty());
    }

    #[test]
    fn test_sorting_directories_before_files() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "zebra.md", "x");
        write(tmp.path(), "Alpha.md", "x");
        fs::create_dir(tmp.path().join("zoo")).unwrap();
        fs::create_dir(tmp.path().join("archive")).unwrap();

        let tree = TreeBuilder::new(tmp.path()).build_tree().unwrap();
        let names: Vec<&str> = tree.files.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["archive", "zoo", "Alpha.md", "zebra.md"]);
    }

    #[test]
    fn test_relative_paths_are_posix_joined() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "docs/nested/deep.md", "x");

        let tree = TreeBuilder::new(tmp.path()).build_tree().unwrap();
        let docs = &tree.files[0];
        let nested = &docs.children.as_ref().unwrap()[0];
        let deep = &nested.children.as_ref().unwrap()[0];
        assert_eq!(docs.path, "docs");
        assert_eq!(nested.path, "docs/nested");
        assert_eq!(deep.path, "docs/nested/deep.md");
        assert_eq!(deep.node_type, NodeType::File);
        assert!(deep.last_modified.recorded().is_some());
    }

    #[test]
    fn test_missing_root_is_created_empty() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("content");
        let tree = TreeBuilder::new(&root).build_tree().unwrap();
        assert!(tree.files.is_empty());
        assert!(root.is_dir());
    }

    #[test]
    fn test_directory_contents_is_shallow() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "docs/guide.md", "x");
        write(tmp.path(), "top.md", "x");

        let builder = TreeBuilder::new(tmp.path());
        let root_level = builder.directory_contents("").unwrap();
        let names: Vec<&str> = root_level.entries.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["docs", "top.md"]);
        assert!(root_level.entries[0].children.is_none());

        let docs = builder.directory_contents("docs").unwrap();
        assert_eq!(docs.path, "docs");
        assert_eq!(docs.entries[0].path, "docs/guide.md");
    }

    #[test]
    fn test_directory_contents_errors() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "top.md", "x");

        let builder = TreeBuilder::new(tmp.path());
        let missing = builder.directory_contents("absent").unwrap_err();
        assert_eq!(missing.status_code(), 404);

        let file = builder.directory_contents("top.md").unwrap_err();
        assert_eq!(file.status_code(), 400);

        let traversal = builder.directory_contents("../outside").unwrap_err();
        assert_eq!(traversal.message(), "Path traversal not allowed");
    }
}
