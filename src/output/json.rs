//! JSON event sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::deploy::{DeployEvent, DeployEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::Started {
                artifact,
                destination,
                service,
                digest,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "deploy",
                    "artifact": artifact,
                    "destination": destination,
                    "service": service,
                    "digest": digest,
                })
            }

            DeployEvent::TransferStarted { command } => {
                serde_json::json!({
                    "event": "transfer_start",
                    "command": "deploy",
                    "argv": command_argv(&command),
                })
            }

            DeployEvent::TransferFinished { elapsed } => {
                serde_json::json!({
                    "event": "transfer_complete",
                    "command": "deploy",
                    "elapsed_ms": elapsed.as_millis() as u64,
                })
            }

            DeployEvent::RestartStarted { command } => {
                serde_json::json!({
                    "event": "restart_start",
                    "command": "deploy",
                    "argv": command_argv(&command),
                })
            }

            DeployEvent::RestartFinished { elapsed } => {
                serde_json::json!({
                    "event": "restart_complete",
                    "command": "deploy",
                    "elapsed_ms": elapsed.as_millis() as u64,
                })
            }

            DeployEvent::Completed { elapsed } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": "success",
                    "elapsed_ms": elapsed.as_millis() as u64,
                })
            }
        };

        self.write_event(json);
    }
}

fn command_argv(command: &crate::runner::CommandSpec) -> Vec<String> {
    let mut argv = vec![command.program.clone()];
    argv.extend(command.args.iter().cloned());
    argv
}
