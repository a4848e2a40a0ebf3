//! Deploy plan
//!
//! A validated set of deployment parameters and the two command invocations
//! derived from them. Building the plan is pure; nothing here touches the
//! network or the filesystem.

use crate::config::Config;
use crate::error::{ShipError, ShipResult};
use crate::runner::CommandSpec;

/// Validated deployment parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployPlan {
    /// Filename of the locally built binary
    pub artifact: String,
    /// Remote account
    pub user: String,
    /// Remote host address
    pub host: String,
    /// Destination directory on the remote host
    pub path: String,
    /// Systemd user unit restarted after the transfer
    pub service: String,
}

impl DeployPlan {
    /// Resolve a merged config into a plan.
    ///
    /// `artifact`, `user` and `host` are required. `path` defaults to
    /// `/home/<user>/bin/` and `service` to `<artifact>.service`.
    pub fn from_config(config: &Config) -> ShipResult<Self> {
        let artifact = config
            .artifact
            .clone()
            .ok_or_else(|| ShipError::missing_field("artifact"))?;
        let user = config
            .remote
            .user
            .clone()
            .ok_or_else(|| ShipError::missing_field("user"))?;
        let host = config
            .remote
            .host
            .clone()
            .ok_or_else(|| ShipError::missing_field("host"))?;

        let path = config
            .remote
            .path
            .clone()
            .unwrap_or_else(|| format!("/home/{user}/bin/"));
        let service = config
            .service
            .clone()
            .unwrap_or_else(|| format!("{artifact}.service"));

        Ok(Self {
            artifact,
            user,
            host,
            path,
            service,
        })
    }

    /// The `user@host` ssh target
    pub fn remote(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }

    /// The `user@host:path` rsync destination
    pub fn destination(&self) -> String {
        format!("{}@{}:{}", self.user, self.host, self.path)
    }

    /// The transfer invocation: archive-mode, compressed rsync over ssh
    pub fn transfer_command(&self) -> CommandSpec {
        CommandSpec::new(
            "rsync",
            vec![
                "-avz".to_string(),
                "--progress".to_string(),
                "-e".to_string(),
                "ssh".to_string(),
                self.artifact.clone(),
                self.destination(),
            ],
        )
    }

    /// The restart invocation: a user-scoped systemctl restart over ssh
    pub fn restart_command(&self) -> CommandSpec {
        CommandSpec::new(
            "ssh",
            vec![
                self.remote(),
                format!("systemctl --user restart {}", self.service),
            ],
        )
    }
}
