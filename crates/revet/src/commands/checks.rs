//! Check management commands.

use crate::config::RevetConfig;
use crate::output::{OutputFormat, OutputFormatter};
use clap::Subcommand;
use nu_ansi_term::Color::{Blue, Red, Yellow};
use revet_checks::{Severity, load_checks};
use serde::Serialize;
use std::fmt::Write;

#[derive(Subcommand)]
pub enum ChecksAction {
    /// List registered checks (after config overrides)
    List,
}

/// Check info for list output.
#[derive(Debug, Serialize)]
pub struct CheckListItem {
    pub id: String,
    pub severity: Severity,
    pub message: String,
    pub allow: Vec<String>,
}

/// Result of the checks list command.
#[derive(Debug, Serialize)]
pub struct CheckListResult {
    pub checks: Vec<CheckListItem>,
}

impl OutputFormatter for CheckListResult {
    fn format_text(&self) -> String {
        let mut out = String::new();
        for check in &self.checks {
            writeln!(out, "{} ({}) - {}", check.id, check.severity, check.message).unwrap();
            if !check.allow.is_empty() {
                writeln!(out, "  allow: {}", check.allow.join(", ")).unwrap();
            }
        }
        write!(out, "{} check(s)", self.checks.len()).unwrap();
        out
    }

    fn format_pretty(&self) -> String {
        let mut out = String::new();
        for check in &self.checks {
            let severity = match check.severity {
                Severity::Error => Red.bold().paint("error").to_string(),
                Severity::Warning => Yellow.paint("warning").to_string(),
                Severity::Info => Blue.paint("info").to_string(),
            };
            writeln!(out, "{} ({}) - {}", check.id, severity, check.message).unwrap();
            if !check.allow.is_empty() {
                writeln!(out, "  allow: {}", check.allow.join(", ")).unwrap();
            }
        }
        write!(out, "{} check(s)", self.checks.len()).unwrap();
        out
    }
}

/// Run the checks command.
pub fn run(action: ChecksAction, format: OutputFormat, config: &RevetConfig) -> i32 {
    match action {
        ChecksAction::List => cmd_list(format, config),
    }
}

fn cmd_list(format: OutputFormat, config: &RevetConfig) -> i32 {
    let checks = load_checks(&config.checks);

    let result = CheckListResult {
        checks: checks
            .iter()
            .map(|c| CheckListItem {
                id: c.id.to_string(),
                severity: c.severity,
                message: c.message.to_string(),
                allow: c.allow.iter().map(|p| p.as_str().to_string()).collect(),
            })
            .collect(),
    };
    result.print(&format);

    0
}
