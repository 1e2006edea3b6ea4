//! Heuristic review checks.
//!
//! This crate provides:
//! - Builtin check definitions (plain content heuristics, no parsing)
//! - Check loading with config overrides (severity, disable, allow globs)
//! - A runner that produces findings for a file's content
//!
//! # Override Format
//!
//! ```toml
//! [checks.magic-numbers]
//! enabled = false
//!
//! [checks.missing-comments]
//! severity = "error"
//! allow = ["**/generated/**"]
//! ```

mod builtin;
mod loader;
mod runner;

pub use builtin::builtin_checks;
pub use loader::{CheckOverride, ChecksConfig, load_checks};
pub use runner::{Finding, run_checks};

use glob::Pattern;
use serde::Serialize;

/// Severity level for check findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    #[default]
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" | "note" => Ok(Severity::Info),
            _ => Err(format!("unknown severity: {}", s)),
        }
    }
}

/// A review check definition.
#[derive(Debug)]
pub struct Check {
    /// Unique identifier for this check.
    pub id: &'static str,
    /// Message to record when the check fires.
    pub message: &'static str,
    /// Severity level.
    pub severity: Severity,
    /// Glob patterns for files where this check is skipped.
    pub allow: Vec<Pattern>,
    /// Whether this check is enabled.
    pub enabled: bool,
    /// Content heuristic. Returns true when the check fires.
    pub applies: fn(&str) -> bool,
}
