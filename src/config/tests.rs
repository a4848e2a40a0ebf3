//! Config module tests

use std::fs;

use tempfile::tempdir;

use super::*;
use crate::error::ShipError;

#[test]
fn load_full_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shipbin.toml");
    fs::write(
        &path,
        r#"
artifact = "contents-api"
service = "contents-api.service"

[remote]
user = "svc"
host = "builds.example.org"
path = "/home/svc/bin/"
"#,
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.artifact.as_deref(), Some("contents-api"));
    assert_eq!(config.service.as_deref(), Some("contents-api.service"));
    assert_eq!(config.remote.user.as_deref(), Some("svc"));
    assert_eq!(config.remote.host.as_deref(), Some("builds.example.org"));
    assert_eq!(config.remote.path.as_deref(), Some("/home/svc/bin/"));
}

#[test]
fn load_partial_config_leaves_rest_unset() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shipbin.toml");
    fs::write(&path, "artifact = \"contents-api\"\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.artifact.as_deref(), Some("contents-api"));
    assert_eq!(config.service, None);
    assert_eq!(config.remote, RemoteConfig::default());
}

#[test]
fn load_reports_unknown_keys_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shipbin.toml");
    fs::write(
        &path,
        "artifcat = \"contents-api\"\n\n[remote]\nhosts = \"builds.example.org\"\n",
    )
    .unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();
    assert_eq!(config.artifact, None);
    assert_eq!(warnings.len(), 2);

    let artifact_warning = warnings.iter().find(|w| w.key == "artifcat").unwrap();
    assert_eq!(artifact_warning.suggestion.as_deref(), Some("artifact"));
    assert_eq!(artifact_warning.line, Some(1));

    let host_warning = warnings.iter().find(|w| w.key == "hosts").unwrap();
    assert_eq!(host_warning.suggestion.as_deref(), Some("host"));
}

#[test]
fn load_invalid_toml_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("shipbin.toml");
    fs::write(&path, "artifact = [broken\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ShipError::InvalidConfig { .. }));
}

#[test]
fn load_missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.toml");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ShipError::Io(_)));
}

#[test]
fn or_else_from_prefers_self() {
    let mut high = Config::default();
    high.remote.host = Some("cli.example.org".to_string());

    let mut low = Config::default();
    low.artifact = Some("contents-api".to_string());
    low.remote.host = Some("file.example.org".to_string());

    let merged = high.or_else_from(&low);
    assert_eq!(merged.remote.host.as_deref(), Some("cli.example.org"));
    assert_eq!(merged.artifact.as_deref(), Some("contents-api"));
}

#[test]
fn load_or_default_with_explicit_missing_path_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let err = load_or_default(Some(&path)).unwrap_err();
    assert!(matches!(err, ShipError::Io(_)));
}

#[test]
fn load_or_default_with_explicit_path_reports_source() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(&path, "artifact = \"contents-api\"\n").unwrap();

    let (config, warnings, source) = load_or_default(Some(&path)).unwrap();
    assert_eq!(config.artifact.as_deref(), Some("contents-api"));
    assert!(warnings.is_empty());
    assert_eq!(source, Some(path));
}
