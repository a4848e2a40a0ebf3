//! Common test utilities for shipbin integration tests.
//!
//! Provides `TestEnv` - an isolated environment with a temp project
//! directory and a temp home, so tests never pick up the developer's real
//! shipbin config or SHIPBIN_* environment.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a shipbin CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    #[allow(dead_code)]
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory used as the working directory
    pub project_root: TempDir,
    /// Temporary directory used as HOME / XDG_CONFIG_HOME
    pub home_dir: TempDir,
    /// Path to the shipbin binary
    bin: PathBuf,
}

/// Env vars the CLI reads; cleared for every run so the host machine's
/// settings cannot leak into assertions.
const CONFIG_ENV_VARS: &[&str] = &[
    "SHIPBIN_ARTIFACT",
    "SHIPBIN_SERVICE",
    "SHIPBIN_USER",
    "SHIPBIN_HOST",
    "SHIPBIN_PATH",
];

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("create project tempdir"),
            home_dir: TempDir::new().expect("create home tempdir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_shipbin")),
        }
    }

    /// Get path relative to project root
    #[allow(dead_code)]
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write `shipbin.toml` into the project directory
    #[allow(dead_code)]
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.project_path("shipbin.toml");
        fs::write(&path, content).expect("write shipbin.toml");
        path
    }

    /// Run shipbin from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run shipbin from the project root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_full(self.project_root.path(), args, env_vars, None)
    }

    /// Run shipbin with a PATH override (for fake-tool tests)
    #[allow(dead_code)]
    pub fn run_with_path(&self, args: &[&str], path_prefix: &Path) -> TestResult {
        self.run_full(self.project_root.path(), args, &[], Some(path_prefix))
    }

    fn run_full(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
        path_prefix: Option<&Path>,
    ) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.args(args)
            .current_dir(cwd)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"));

        for var in CONFIG_ENV_VARS {
            cmd.env_remove(var);
        }

        if let Some(prefix) = path_prefix {
            let base = std::env::var("PATH").unwrap_or_default();
            cmd.env("PATH", format!("{}:{}", prefix.display(), base));
        }

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("run shipbin binary");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
