//! Deploy event port
//!
//! Observable interface for the deploy flow. Enables progress reporting and
//! NDJSON event streams without coupling the use case to an output format.

use std::time::Duration;

use crate::runner::CommandSpec;

/// Event emitted during a deploy
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Deploy started
    Started {
        artifact: String,
        destination: String,
        service: String,
        /// `sha256:<hex>` of the local artifact, when readable
        digest: Option<String>,
    },

    /// Transfer step is about to run
    TransferStarted { command: CommandSpec },

    /// Transfer step exited zero
    TransferFinished { elapsed: Duration },

    /// Restart step is about to run
    RestartStarted { command: CommandSpec },

    /// Restart step exited zero
    RestartFinished { elapsed: Duration },

    /// Both steps completed in order
    Completed { elapsed: Duration },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - `ConsoleEventSink`: progress display in terminal
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
