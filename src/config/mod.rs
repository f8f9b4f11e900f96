//! Configuration for a validation run.

use crate::rules::RuleId;
use std::fmt;
use std::path::PathBuf;

/// Report file used when no output path is given
pub const DEFAULT_OUTPUT_FILE: &str = "GedcomService_output.txt";

/// Configuration for the validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Where the report file is written
    pub output_path: PathBuf,
    /// Echo every finding block to stdout as well as the report file
    pub echo_to_console: bool,
    /// Evaluate rules on the rayon thread pool
    pub parallel_rules: bool,
    /// Rules that are skipped entirely
    pub disabled_rules: Vec<RuleId>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            echo_to_console: true,
            parallel_rules: false,
            disabled_rules: Vec::new(),
        }
    }
}

impl ValidatorConfig {
    /// Set the report file path
    #[must_use]
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Enable or disable console echo
    #[must_use]
    pub const fn with_console_echo(mut self, echo: bool) -> Self {
        self.echo_to_console = echo;
        self
    }

    /// Enable or disable parallel rule evaluation
    #[must_use]
    pub const fn with_parallel_rules(mut self, parallel: bool) -> Self {
        self.parallel_rules = parallel;
        self
    }

    /// Skip a rule
    #[must_use]
    pub fn disable(mut self, rule: RuleId) -> Self {
        if !self.disabled_rules.contains(&rule) {
            self.disabled_rules.push(rule);
        }
        self
    }

    /// Whether a rule will run
    #[must_use]
    pub fn is_enabled(&self, rule: RuleId) -> bool {
        !self.disabled_rules.contains(&rule)
    }
}

impl fmt::Display for ValidatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "output={} echo={} parallel={}",
            self.output_path.display(),
            self.echo_to_console,
            self.parallel_rules
        )?;
        if !self.disabled_rules.is_empty() {
            let disabled: Vec<_> = self.disabled_rules.iter().map(|r| r.user_story()).collect();
            write!(f, " disabled={}", disabled.join(","))?;
        }
        Ok(())
    }
}
