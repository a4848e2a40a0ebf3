//! Output sinks: human console display and NDJSON event stream

mod console;
mod json;

pub use console::{print_config_warnings, ConsoleEventSink};
pub use json::JsonEventSink;
