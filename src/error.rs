//! Error types for shipbin
//!
//! Uses `thiserror` for library errors; `anyhow` stays at the CLI boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shipbin operations
pub type ShipResult<T> = Result<T, ShipError>;

/// Main error type for shipbin operations
#[derive(Error, Debug)]
pub enum ShipError {
    /// The transfer step (rsync) exited non-zero
    #[error("transfer failed: rsync exited with {}", exit_code_display(.code))]
    TransferFailed { code: Option<i32> },

    /// The restart step (ssh + systemctl) exited non-zero
    #[error("restart failed: ssh exited with {}", exit_code_display(.code))]
    RestartFailed { code: Option<i32> },

    /// A child process could not be spawned at all
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Required configuration value absent after all layers merge
    #[error("missing required config value '{field}' - set it in shipbin.toml, SHIPBIN_{env} or --{field}")]
    MissingField { field: String, env: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Deploy was declined at the confirmation prompt
    #[error("deploy aborted by user")]
    Aborted,
}

impl ShipError {
    /// Convenience constructor for [`ShipError::MissingField`]
    pub fn missing_field(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
            env: field.to_uppercase(),
        }
    }
}

fn exit_code_display(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
