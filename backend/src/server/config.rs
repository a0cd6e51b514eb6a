//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `COURSE_REGISTRY_*` environment variables, and
//! configuration files, in OrthoConfig's usual precedence order.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SNAPSHOT_FILE: &str = "registry.json";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Runtime settings for the HTTP server and snapshot persistence.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COURSE_REGISTRY")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Directory holding the snapshot file. Without one the registry is
    /// kept in memory only.
    pub data_dir: Option<PathBuf>,
    /// Snapshot file name inside `data_dir`.
    pub snapshot_file: Option<String>,
}

impl ServerSettings {
    /// Parsed bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Snapshot file name, falling back to `registry.json`.
    pub fn snapshot_file(&self) -> &str {
        self.snapshot_file
            .as_deref()
            .unwrap_or(DEFAULT_SNAPSHOT_FILE)
    }
}
