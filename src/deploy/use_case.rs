//! Deploy use case
//!
//! Orchestrates the two-step deployment flow:
//! 1. Transfer the artifact to the remote host (rsync over ssh)
//! 2. Restart the remote user service (ssh + systemctl)
//!
//! The restart step is issued only after the transfer exits zero. Execution
//! is strictly sequential and blocking, with exactly one child process in
//! flight at a time; there is no retry, no rollback and no timeout. A hung
//! remote connection blocks indefinitely - the underlying tools own their
//! signal handling.

use std::path::Path;
use std::time::Instant;

use crate::digest::artifact_digest;
use crate::error::{ShipError, ShipResult};
use crate::runner::CommandRunner;

use super::events::{DeployEvent, DeployEventSink};
use super::plan::DeployPlan;
use super::result::{DeployReport, StepReport};

/// Deploy use case, parameterized by the command runner port
pub struct DeployUseCase<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> DeployUseCase<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Run the deploy to completion, emitting events along the way.
    ///
    /// Fails fast: a non-zero transfer exit maps to
    /// [`ShipError::TransferFailed`] and the restart command is never
    /// constructed into a child process; a non-zero restart exit maps to
    /// [`ShipError::RestartFailed`].
    pub fn execute(
        &self,
        plan: &DeployPlan,
        sink: &dyn DeployEventSink,
    ) -> ShipResult<DeployReport> {
        let deploy_start = Instant::now();

        sink.on_event(DeployEvent::Started {
            artifact: plan.artifact.clone(),
            destination: plan.destination(),
            service: plan.service.clone(),
            digest: artifact_digest(Path::new(&plan.artifact)),
        });

        let transfer_command = plan.transfer_command();
        sink.on_event(DeployEvent::TransferStarted {
            command: transfer_command.clone(),
        });

        let transfer_start = Instant::now();
        let status = self.runner.run(&transfer_command)?;
        if !status.is_success() {
            return Err(ShipError::TransferFailed { code: status.code });
        }
        let transfer = StepReport {
            elapsed: transfer_start.elapsed(),
        };
        sink.on_event(DeployEvent::TransferFinished {
            elapsed: transfer.elapsed,
        });

        let restart_command = plan.restart_command();
        sink.on_event(DeployEvent::RestartStarted {
            command: restart_command.clone(),
        });

        let restart_start = Instant::now();
        let status = self.runner.run(&restart_command)?;
        if !status.is_success() {
            return Err(ShipError::RestartFailed { code: status.code });
        }
        let restart = StepReport {
            elapsed: restart_start.elapsed(),
        };
        sink.on_event(DeployEvent::RestartFinished {
            elapsed: restart.elapsed,
        });

        sink.on_event(DeployEvent::Completed {
            elapsed: deploy_start.elapsed(),
        });

        Ok(DeployReport { transfer, restart })
    }
}
