//! Repository root resolution
//!
//! Maps repository identifiers to configured root directories. Mock mode is
//! an explicit root source chosen by the caller, not ambient global state.

use std::path::PathBuf;

use crate::config::ServerConfig;
use crate::error::RepositoryError;

/// Which root directory an operation set binds to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootSource {
    /// The fixed mock content directory
    Mock,
    /// A configured repository, by id
    Repository(String),
}

impl RootSource {
    /// Select the root source from the mock flag and an optional repository
    /// id
    ///
    /// Outside mock mode the repository id is required.
    pub fn select(
        use_mock_data: bool,
        repository_id: Option<&str>,
    ) -> Result<Self, RepositoryError> {
        if use_mock_data {
            return Ok(RootSource::Mock);
        }
        match repository_id {
            Some(id) if !id.trim().is_empty() => Ok(RootSource::Repository(id.trim().to_string())),
            _ => Err(RepositoryError::MissingRepositoryId),
        }
    }
}

/// Maps repository ids to root directories
pub trait RepositoryResolver {
    /// Root directory for a configured repository
    fn resolve(&self, repository_id: &str) -> Result<PathBuf, RepositoryError>;

    /// Root directory used in mock mode
    fn mock_root(&self) -> PathBuf;
}

/// Resolver backed by the server configuration table
pub struct ConfigRepositoryResolver<'a> {
    config: &'a ServerConfig,
}

impl<'a> ConfigRepositoryResolver<'a> {
    pub fn new(config: &'a ServerConfig) -> Self {
        ConfigRepositoryResolver { config }
    }
}

impl RepositoryResolver for ConfigRepositoryResolver<'_> {
    fn resolve(&self, repository_id: &str) -> Result<PathBuf, RepositoryError> {
        self.config
            .repositories
            .get(repository_id)
            .map(|repo| PathBuf::from(&repo.path))
            .ok_or_else(|| RepositoryError::UnknownRepository(repository_id.to_string()))
    }

    fn mock_root(&self) -> PathBuf {
        PathBuf::from(&self.config.mock_root)
    }
}
