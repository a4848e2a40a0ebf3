//! shipbin - push a locally built binary to a remote host and restart its
//! user service
//!
//! The deploy is two sequential shell-outs: an archive-mode compressed rsync
//! of the artifact over ssh, then a `systemctl --user restart` issued on the
//! remote host. The restart never runs unless the transfer exited zero.

pub mod config;
pub mod deploy;
pub mod digest;
pub mod error;
pub mod output;
pub mod runner;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, RemoteConfig};
pub use deploy::{
    DeployEvent, DeployEventSink, DeployOptions, DeployPlan, DeployReport, DeployUseCase,
    NoopEventSink,
};
pub use error::{ShipError, ShipResult};
pub use output::{ConsoleEventSink, JsonEventSink};
pub use runner::{CommandRunner, CommandSpec, RunStatus, SystemRunner};
