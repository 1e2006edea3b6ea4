//! Review command - walk a source tree and write the findings report.

use crate::config::RevetConfig;
use crate::output::{OutputFormat, OutputFormatter};
use crate::report::Report;
use crate::walker::collect_source_files;
use clap::Args;
use nu_ansi_term::Color::{Blue, Red, Yellow};
use revet_checks::{Check, Finding, Severity, load_checks, run_checks};
use serde::Serialize;
use std::fmt::Write;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct ReviewArgs {
    /// Source directory to scan (default: src/main/java, or [review] root)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Guidelines file read at startup
    #[arg(short, long)]
    pub guidelines: Option<PathBuf>,

    /// File extension to review, without the dot
    #[arg(short, long)]
    pub extension: Option<String>,

    /// Report output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Run the checks without writing the report file
    #[arg(long)]
    pub dry_run: bool,
}

/// Fully resolved review inputs: CLI flags over config over defaults.
struct ReviewOptions {
    root: PathBuf,
    guidelines: PathBuf,
    extension: String,
    output: PathBuf,
}

impl ReviewOptions {
    fn resolve(args: &ReviewArgs, config: &RevetConfig) -> Self {
        Self {
            root: args
                .root
                .clone()
                .unwrap_or_else(|| PathBuf::from(config.review.root())),
            guidelines: args
                .guidelines
                .clone()
                .unwrap_or_else(|| PathBuf::from(config.review.guidelines())),
            extension: args
                .extension
                .clone()
                .unwrap_or_else(|| config.review.extension().to_string()),
            output: args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(config.review.output())),
        }
    }
}

/// What a scan produced, before report writing.
pub struct ReviewOutcome {
    pub files_scanned: usize,
    pub findings: Vec<Finding>,
}

/// Run checks over every matching file under the root.
///
/// Files are visited in walker order; within a file, findings keep check
/// order. Unreadable files abort the scan.
pub fn review_tree(root: &Path, extension: &str, checks: &[Check]) -> io::Result<ReviewOutcome> {
    let files = collect_source_files(root, extension);

    let mut findings = Vec::new();
    for file in &files {
        let content = std::fs::read_to_string(file)?;
        findings.extend(run_checks(checks, file, &content));
    }

    Ok(ReviewOutcome {
        files_scanned: files.len(),
        findings,
    })
}

/// Result of a review run.
#[derive(Debug, Serialize)]
pub struct ReviewResult {
    pub files_scanned: usize,
    pub findings: Vec<Finding>,
    /// Where the report was written (None for --dry-run).
    pub report_path: Option<String>,
}

impl ReviewResult {
    fn summary(&self) -> String {
        format!(
            "Reviewed {} file(s), {} finding(s)",
            self.files_scanned,
            self.findings.len()
        )
    }
}

impl OutputFormatter for ReviewResult {
    fn format_text(&self) -> String {
        let mut out = String::new();
        for finding in &self.findings {
            writeln!(
                out,
                "{}: {} [{}] {}",
                finding.file.display(),
                finding.severity,
                finding.check_id,
                finding.message
            )
            .unwrap();
        }
        out.push_str(&self.summary());
        if let Some(path) = &self.report_path {
            write!(out, "\nReport written to {}", path).unwrap();
        }
        out
    }

    fn format_pretty(&self) -> String {
        let mut out = String::new();
        for finding in &self.findings {
            let severity = match finding.severity {
                Severity::Error => Red.bold().paint("error").to_string(),
                Severity::Warning => Yellow.paint("warning").to_string(),
                Severity::Info => Blue.paint("info").to_string(),
            };
            writeln!(
                out,
                "{}: {} [{}] {}",
                finding.file.display(),
                severity,
                finding.check_id,
                finding.message
            )
            .unwrap();
        }
        out.push_str(&self.summary());
        if let Some(path) = &self.report_path {
            write!(out, "\nReport written to {}", path).unwrap();
        }
        out
    }
}

/// Run the review command.
pub fn run(args: ReviewArgs, format: OutputFormat, config: &RevetConfig) -> i32 {
    let opts = ReviewOptions::resolve(&args, config);

    // Guidelines are loaded up front; the checks themselves do not consume
    // them yet.
    match std::fs::read_to_string(&opts.guidelines) {
        Ok(text) => {
            if !format.is_json() {
                eprintln!(
                    "Loaded guidelines from {} ({} lines)",
                    opts.guidelines.display(),
                    text.lines().count()
                );
            }
        }
        Err(e) => {
            eprintln!(
                "Failed to read guidelines {}: {}",
                opts.guidelines.display(),
                e
            );
            return 1;
        }
    }

    let checks = load_checks(&config.checks);
    let outcome = match review_tree(&opts.root, &opts.extension, &checks) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Review failed: {}", e);
            return 1;
        }
    };

    let report = Report::new(outcome.findings);
    let report_path = if args.dry_run {
        None
    } else {
        if let Err(e) = report.write(&opts.output) {
            eprintln!("Failed to write report {}: {}", opts.output.display(), e);
            return 1;
        }
        Some(opts.output.display().to_string())
    };

    let had_errors = report
        .findings
        .iter()
        .any(|f| f.severity == Severity::Error);

    let result = ReviewResult {
        files_scanned: outcome.files_scanned,
        findings: report.findings,
        report_path,
    };
    result.print(&format);

    if had_errors { 1 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::NO_ISSUES;
    use revet_checks::builtin_checks;
    use tempfile::TempDir;

    fn write_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_empty_tree_writes_sentinel() {
        let dir = TempDir::new().unwrap();
        let checks = builtin_checks();

        let outcome = review_tree(dir.path(), "java", &checks).unwrap();
        assert_eq!(outcome.files_scanned, 0);

        let out = dir.path().join("code-review-results.txt");
        Report::new(outcome.findings).write(&out).unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), NO_ISSUES);
    }

    #[test]
    fn test_bare_file_yields_single_missing_comments_line() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("Foo.java");
        write_file(&file, "public class Foo { }");

        let checks = builtin_checks();
        let outcome = review_tree(dir.path(), "java", &checks).unwrap();
        assert_eq!(outcome.files_scanned, 1);

        let report = Report::new(outcome.findings);
        assert_eq!(
            report.render(),
            format!("{}: Missing comments.", file.display())
        );
    }

    #[test]
    fn test_report_order_matches_traversal() {
        let dir = TempDir::new().unwrap();
        // No comments, no digits: each yields exactly one finding
        write_file(&dir.path().join("b/Late.java"), "class Late { }");
        write_file(&dir.path().join("a/Early.java"), "class Early { }");

        let checks = builtin_checks();
        let outcome = review_tree(dir.path(), "java", &checks).unwrap();
        let files: Vec<String> = outcome
            .findings
            .iter()
            .map(|f| f.file.to_string_lossy().replace('\\', "/"))
            .collect();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a/Early.java"));
        assert!(files[1].ends_with("b/Late.java"));
    }

    #[test]
    fn test_findings_within_file_follow_check_order() {
        let dir = TempDir::new().unwrap();
        write_file(
            &dir.path().join("Messy.java"),
            "import unused.Thing;\nint answer = 42;\n",
        );

        let checks = builtin_checks();
        let outcome = review_tree(dir.path(), "java", &checks).unwrap();
        let ids: Vec<&str> = outcome
            .findings
            .iter()
            .map(|f| f.check_id.as_str())
            .collect();
        assert_eq!(ids, ["missing-comments", "unused-imports", "magic-numbers"]);
    }

    #[test]
    fn test_resolve_uses_passed_config_and_flag_overrides() {
        let config = RevetConfig {
            review: crate::config::ReviewConfig {
                root: Some("app/src".to_string()),
                extension: Some("kt".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let args = ReviewArgs {
            root: None,
            guidelines: None,
            extension: Some("java".to_string()),
            output: None,
            dry_run: false,
        };

        let opts = ReviewOptions::resolve(&args, &config);
        // Config fills in what flags leave unset
        assert_eq!(opts.root, PathBuf::from("app/src"));
        assert_eq!(opts.guidelines, PathBuf::from("coding_guidelines.txt"));
        // Flags beat config
        assert_eq!(opts.extension, "java");
    }

    #[test]
    fn test_non_matching_extensions_ignored() {
        let dir = TempDir::new().unwrap();
        write_file(&dir.path().join("script.py"), "x = 1");

        let checks = builtin_checks();
        let outcome = review_tree(dir.path(), "java", &checks).unwrap();
        assert_eq!(outcome.files_scanned, 0);
        assert!(outcome.findings.is_empty());
    }
}
