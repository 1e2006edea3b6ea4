//! Report assembly and writing.

use revet_checks::Finding;
use std::io;
use std::path::Path;

/// Sentinel written when the scan produced no findings.
pub const NO_ISSUES: &str = "No major issues found.";

/// A completed review report.
#[derive(Debug, Default)]
pub struct Report {
    pub findings: Vec<Finding>,
}

impl Report {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    /// Render the report body: one `path: message` line per finding,
    /// newline-joined, or the no-issues sentinel.
    pub fn render(&self) -> String {
        if self.findings.is_empty() {
            return NO_ISSUES.to_string();
        }
        self.findings
            .iter()
            .map(|f| format!("{}: {}", f.file.display(), f.message))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Write the rendered report to `path`.
    pub fn write(&self, path: &Path) -> io::Result<()> {
        std::fs::write(path, self.render())
    }
}
