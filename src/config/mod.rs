//! Layered configuration: TOML file, environment overrides, CLI flags

mod loader;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, user_config_path, with_env_overrides, ConfigWarning,
    ENV_PREFIX,
};
pub use types::{Config, RemoteConfig};

#[cfg(test)]
mod tests;
