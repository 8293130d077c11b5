//! Configuration management
//!
//! Loads server settings from `config.toml` with `MDCMS`-prefixed
//! environment overrides. The file is optional; defaults bind a local
//! mock-mode server.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Complete server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address to bind the HTTP listener
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port for the HTTP listener
    #[serde(default = "default_port")]
    pub port: u16,

    /// When set, every request targets the mock content directory
    #[serde(default = "default_use_mock_data")]
    pub use_mock_data: bool,

    /// Root directory used in mock mode
    #[serde(default = "default_mock_root")]
    pub mock_root: String,

    /// Configured content repositories, keyed by id
    #[serde(default)]
    pub repositories: HashMap<String, RepositoryConfig>,
}

/// One configured content repository
#[derive(Debug, Deserialize, Clone)]
pub struct RepositoryConfig {
    /// Absolute root directory of the repository's content
    pub path: String,

    /// Human-readable label shown by the UI
    pub label: String,
}

impl ServerConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("MDCMS").separator("__"))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that cannot serve any request
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.use_mock_data && self.repositories.is_empty() {
            return Err(ConfigError::Message(
                "at least one repository must be configured outside mock mode".into(),
            ));
        }
        if self.use_mock_data && self.mock_root.trim().is_empty() {
            return Err(ConfigError::Message("mock_root must not be empty".into()));
        }
        Ok(())
    }

    /// Bind address and port as a socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8400
}

fn default_use_mock_data() -> bool {
    true
}

fn default_mock_root() -> String {
    "mock-data".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> ServerConfig {
        ServerConfig {
            bind_address: default_bind_address(),
            port: default_port(),
            use_mock_data: true,
            mock_root: default_mock_root(),
            repositories: HashMap::new(),
        }
    }

    #[test]
    fn test_mock_mode_needs_no_repositories() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_real_mode_requires_repositories() {
        let mut config = base_config();
        config.use_mock_data = false;
        assert!(config.validate().is_err());

        config.repositories.insert(
            "docs".into(),
            RepositoryConfig {
                path: "/srv/content/docs".into(),
                label: "Docs".into(),
            },
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mock_root_must_not_be_blank() {
        let mut config = base_config();
        config.mock_root = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_socket_addr() {
        assert_eq!(base_config().socket_addr(), "127.0.0.1:8400");
    }
}
