//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ISSUES_*` environment variables or a config
//! file, in OrthoConfig's usual precedence.

use std::net::{IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Failures turning settings into a bind address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The configured host is not an IP address.
    #[error("invalid bind host `{host}`")]
    InvalidHost { host: String },
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ISSUES")]
pub struct ServerSettings {
    /// IP address to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Seed the user registry with the default users on startup.
    pub seed_users: Option<bool>,
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Whether to seed the default users, enabled unless switched off.
    pub fn seed_users(&self) -> bool {
        self.seed_users.unwrap_or(true)
    }

    /// Resolve the socket address to bind.
    ///
    /// # Errors
    /// [`SettingsError::InvalidHost`] when the host is not an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let host = self.host();
        let ip: IpAddr = host.parse().map_err(|_| SettingsError::InvalidHost {
            host: host.to_owned(),
        })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}
