//! User service configuration.

use common::{DatabaseConfig, ServiceConfig};

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// HTTP server settings
    pub server: ServiceConfig,
    /// Database connection and pool settings
    pub database: DatabaseConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServiceConfig::from_env(),
            database: DatabaseConfig::from_env(),
        }
    }

    /// Override the bind address (e.g. from CLI flags).
    pub fn with_addr(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }
}
