//! Status output
//!
//! Results go to stdout with `println!`; status lines go to stderr here so
//! they never mix into `--json` output.

use console::{style, Term};

use crate::config::CliConfig;

/// Styled status lines on stderr
#[derive(Debug)]
pub struct OutputWriter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl OutputWriter {
    /// Create a new writer
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Create a writer honouring the configured color and verbosity
    #[must_use]
    pub fn from_config(config: &CliConfig) -> Self {
        Self::new(config.color.should_color(), config.verbosity.is_quiet())
    }

    /// Prefix for a success line
    #[must_use]
    pub fn success_prefix(&self) -> String {
        if self.use_color {
            style("✓").green().bold().to_string()
        } else {
            "OK".to_string()
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self
            .term
            .write_line(&format!("{} {message}", self.success_prefix()));
    }

    /// Print a failure message, even when quiet
    pub fn failure(&self, message: &str) {
        let prefix = if self.use_color {
            style("✗").red().bold().to_string()
        } else {
            "FAIL".to_string()
        };
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("⚠").yellow().bold().to_string()
        } else {
            "WARN".to_string()
        };
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("ℹ").blue().bold().to_string()
        } else {
            "INFO".to_string()
        };
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }
}

/// One list row: 1-based position and label
#[must_use]
pub fn list_row(position: usize, label: &str) -> String {
    format!("{position:>3}. {label}")
}
