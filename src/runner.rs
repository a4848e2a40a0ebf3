//! Command runner port
//!
//! Represents "run an external command, get its exit status" as a small
//! trait so the deploy flow can be exercised in tests without touching
//! real infrastructure. The production implementation spawns the command
//! with inherited stdio, so rsync progress and ssh diagnostics reach the
//! operator's terminal untouched.

use std::process::{Command, Stdio};

use crate::error::{ShipError, ShipResult};

/// A fully constructed external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Render the invocation as a single shell-style line (for display only)
    pub fn render(&self) -> String {
        let mut parts = vec![quote_arg(&self.program)];
        parts.extend(self.args.iter().map(|a| quote_arg(a)));
        parts.join(" ")
    }
}

/// Exit status of a finished command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    /// Exit code, `None` if the process was terminated by a signal
    pub code: Option<i32>,
}

impl RunStatus {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn failure(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Port for running external commands
///
/// Implementations:
/// - `SystemRunner`: spawns real processes (production)
/// - test mocks: record invocations and return scripted statuses
pub trait CommandRunner {
    /// Run the command to completion, blocking until it exits
    fn run(&self, spec: &CommandSpec) -> ShipResult<RunStatus>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, spec: &CommandSpec) -> ShipResult<RunStatus> {
        (**self).run(spec)
    }
}

/// Runs commands as real child processes with inherited stdio
///
/// stdin stays inherited so ssh can prompt for passphrases. In quiet mode
/// (JSON event output) child stdout is discarded to keep the NDJSON stream
/// on stdout parseable; stderr always passes through.
pub struct SystemRunner {
    quiet_stdout: bool,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self {
            quiet_stdout: false,
        }
    }

    pub fn with_quiet_stdout(quiet_stdout: bool) -> Self {
        Self { quiet_stdout }
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> ShipResult<RunStatus> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args).stdin(Stdio::inherit());

        if self.quiet_stdout {
            cmd.stdout(Stdio::null()).stderr(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let status = cmd.status().map_err(|e| ShipError::Launch {
            program: spec.program.clone(),
            source: e,
        })?;

        Ok(RunStatus {
            code: status.code(),
        })
    }
}

/// Check whether a tool is installed and reachable on PATH
///
/// Used by `doctor`. `--version` is close to universal; a spawn failure
/// means the tool is missing, a non-zero exit still proves it exists.
pub fn tool_available(program: &str) -> bool {
    Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

/// Quote an argument for shell-style display (simple escaping)
fn quote_arg(arg: &str) -> String {
    if !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:@=+~".contains(c))
    {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}
