//! Configuration loading: file discovery, env overrides, unknown-key warnings

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ShipError, ShipResult};

use super::types::Config;

/// Environment variable prefix for config overrides
pub const ENV_PREFIX: &str = "SHIPBIN_";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ShipResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ShipError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve and load the effective config file.
///
/// Search order: explicit `--config` path (must exist), then `shipbin.toml`
/// in the working directory, then the user config under the platform config
/// dir. Returns the config, its warnings, and the file it came from (`None`
/// when no file was found and defaults apply).
pub fn load_or_default(
    explicit: Option<&Path>,
) -> ShipResult<(Config, Vec<ConfigWarning>, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((config, warnings, Some(path.to_path_buf())));
    }

    let project_config = PathBuf::from("shipbin.toml");
    if project_config.exists() {
        let (config, warnings) = load_with_warnings(&project_config)?;
        return Ok((config, warnings, Some(project_config)));
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            let (config, warnings) = load_with_warnings(&user_config)?;
            return Ok((config, warnings, Some(user_config)));
        }
    }

    Ok((Config::default(), Vec::new(), None))
}

/// Path of the per-user config file (`<config dir>/shipbin/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shipbin/config.toml"))
}

/// Apply environment variable overrides (SHIPBIN_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |key| std::env::var(key).ok())
}

fn apply_env(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    let var = |suffix: &str| lookup(&format!("{ENV_PREFIX}{suffix}")).filter(|v| !v.is_empty());

    if let Some(artifact) = var("ARTIFACT") {
        config.artifact = Some(artifact);
    }
    if let Some(service) = var("SERVICE") {
        config.service = Some(service);
    }
    if let Some(user) = var("USER") {
        config.remote.user = Some(user);
    }
    if let Some(host) = var("HOST") {
        config.remote.host = Some(host);
    }
    if let Some(path) = var("PATH") {
        config.remote.path = Some(path);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["artifact", "service", "remote", "user", "host", "path"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
