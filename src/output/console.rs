//! Console output
//!
//! Human-facing progress display and config warning printing. The register
//! mirrors the rest of the CLI: one emoji-prefixed line per step, details
//! only in verbose mode.

use std::path::Path;

use crate::config::ConfigWarning;
use crate::deploy::{DeployEvent, DeployEventSink};

/// Event sink that prints progress to stdout
pub struct ConsoleEventSink {
    verbose: bool,
}

impl ConsoleEventSink {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::Started {
                artifact,
                destination,
                service,
                digest,
            } => {
                println!("🚀 Deploying {} to {}", artifact, destination);
                if self.verbose {
                    println!("   Service: {}", service);
                    match digest {
                        Some(digest) => println!("   Artifact: {}", digest),
                        None => println!("   Artifact: (not readable locally)"),
                    }
                }
            }
            DeployEvent::TransferStarted { command } => {
                println!("📦 {}", command.render());
            }
            DeployEvent::TransferFinished { elapsed } => {
                println!("✓ Transfer complete in {}", format_elapsed(elapsed));
            }
            DeployEvent::RestartStarted { command } => {
                println!("🔄 {}", command.render());
            }
            DeployEvent::RestartFinished { elapsed } => {
                println!("✓ Restart issued in {}", format_elapsed(elapsed));
            }
            DeployEvent::Completed { elapsed } => {
                println!("\n🟢 Deploy finished in {}", format_elapsed(elapsed));
            }
        }
    }
}

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

fn format_elapsed(elapsed: std::time::Duration) -> String {
    if elapsed.as_secs() >= 1 {
        format!("{:.1}s", elapsed.as_secs_f64())
    } else {
        format!("{}ms", elapsed.as_millis())
    }
}
