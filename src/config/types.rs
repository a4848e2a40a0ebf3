//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ShipResult;

use super::loader;

/// Deployment configuration
///
/// All fields are optional at this layer; required values are checked when
/// the config is resolved into a deploy plan, after CLI flags and
/// environment overrides have been applied.
///
/// ```toml
/// artifact = "contents-api"
/// service = "contents-api.service"
///
/// [remote]
/// user = "svc"
/// host = "builds.example.org"
/// path = "/home/svc/bin/"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Filename of the locally built binary to deploy
    #[serde(default)]
    pub artifact: Option<String>,

    /// Systemd user unit to restart after the transfer
    ///
    /// Defaults to `<artifact>.service` when unset.
    #[serde(default)]
    pub service: Option<String>,

    #[serde(default)]
    pub remote: RemoteConfig,
}

/// Remote endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Account used for both the transfer and the remote restart
    #[serde(default)]
    pub user: Option<String>,

    /// Target machine address
    #[serde(default)]
    pub host: Option<String>,

    /// Destination directory on the target machine
    ///
    /// Defaults to `/home/<user>/bin/` when unset.
    #[serde(default)]
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file, discarding unknown-key warnings
    pub fn load(path: &Path) -> ShipResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Fill any unset field from another config (lower-precedence layer)
    pub fn or_else_from(mut self, fallback: &Config) -> Self {
        self.artifact = self.artifact.or_else(|| fallback.artifact.clone());
        self.service = self.service.or_else(|| fallback.service.clone());
        self.remote.user = self.remote.user.or_else(|| fallback.remote.user.clone());
        self.remote.host = self.remote.host.or_else(|| fallback.remote.host.clone());
        self.remote.path = self.remote.path.or_else(|| fallback.remote.path.clone());
        self
    }
}
