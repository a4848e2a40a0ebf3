//! Deploy options

/// Options for a single deploy invocation
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Print the planned commands without spawning anything
    pub dry_run: bool,
    /// Skip the interactive confirmation prompt
    pub assume_yes: bool,
    /// Emit NDJSON events instead of human output
    pub json: bool,
    /// Extra detail in human output
    pub verbose: bool,
}

impl DeployOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}
