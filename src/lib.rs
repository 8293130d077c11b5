pub mod config;
pub mod error;
pub mod fileops;
pub mod repository;
pub mod routes;

pub use fileops::operations::{FileOperations, FileSystemOperations};
