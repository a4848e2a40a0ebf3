//! Two-step deployment: transfer the artifact, restart the remote service

mod events;
mod options;
mod plan;
mod result;
mod use_case;

pub use events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use options::DeployOptions;
pub use plan::DeployPlan;
pub use result::{DeployReport, StepReport};
pub use use_case::DeployUseCase;
