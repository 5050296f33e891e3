//! Staging log output
//!
//! Buildpack output is line-oriented; the platform captures it and shows it
//! in the app's staging log. Step markers and indentation follow the
//! platform's conventions so our lines sit flush with other buildpacks'.

/// Line prefixes used in staging output
pub mod prefix {
    /// Begins a top-level staging step
    pub const STEP: &str = "-----> ";

    /// Continuation lines under a step
    pub const INDENT: &str = "       ";

    /// Error marker
    pub const ERROR: &str = "       **ERROR**";

    /// Warning marker
    pub const WARNING: &str = "       **WARNING**";
}

/// Line-oriented logger for staging output
#[derive(Debug, Clone, Copy, Default)]
pub struct StagingLog {
    quiet: bool,
}

impl StagingLog {
    /// Create a logger; `quiet` drops everything except errors
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Announce a top-level staging step
    pub fn step(&self, message: &str) {
        if !self.quiet {
            println!("{}{message}", prefix::STEP);
        }
    }

    /// Detail line under the current step
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{}{message}", prefix::INDENT);
        }
    }

    /// Warning line, kept on stdout so it lands in the staging log
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            println!("{} {message}", prefix::WARNING);
        }
    }

    /// Error line on stderr; printed even when quiet
    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", prefix::ERROR);
    }
}
