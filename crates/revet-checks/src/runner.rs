//! Check execution.

use crate::{Check, Severity};
use glob::Pattern;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A finding from running a check.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub check_id: String,
    pub file: PathBuf,
    pub message: String,
    pub severity: Severity,
}

/// Run checks against one file's content.
///
/// `path` is the path as walked; it is recorded verbatim in findings and
/// matched against allow patterns. Findings keep the order of `checks`.
pub fn run_checks(checks: &[Check], path: &Path, content: &str) -> Vec<Finding> {
    let mut findings = Vec::new();

    for check in checks {
        if is_allowed(&check.allow, path) {
            continue;
        }
        if (check.applies)(content) {
            findings.push(Finding {
                check_id: check.id.to_string(),
                file: path.to_path_buf(),
                message: check.message.to_string(),
                severity: check.severity,
            });
        }
    }

    findings
}

/// Check if a path matches any allow pattern.
fn is_allowed(allow: &[Pattern], path: &Path) -> bool {
    if allow.is_empty() {
        return false;
    }
    let path_str = path.to_string_lossy();
    allow.iter().any(|p| p.matches(&path_str))
}
