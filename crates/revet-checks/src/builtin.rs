//! Builtin checks.
//!
//! These are deliberately shallow: substring and character tests over the
//! whole file content. They flag candidates for human review rather than
//! proving anything about the code.

use crate::{Check, Severity};

/// Fires when the content has neither a line comment nor a doc comment
/// opener anywhere in the file.
fn missing_comments(content: &str) -> bool {
    !content.contains("//") && !content.contains("/**")
}

/// Fires when the content declares imports and mentions "unused" anywhere,
/// e.g. an editor or linter annotation left in the file.
fn unused_imports(content: &str) -> bool {
    content.contains("import ") && content.contains("unused")
}

/// Fires when any character in the content is a digit.
fn magic_numbers(content: &str) -> bool {
    content.chars().any(|c| c.is_ascii_digit())
}

/// The builtin check table.
///
/// Order here is the order findings appear within a file in the report.
pub fn builtin_checks() -> Vec<Check> {
    vec![
        Check {
            id: "missing-comments",
            message: "Missing comments.",
            severity: Severity::Warning,
            allow: Vec::new(),
            enabled: true,
            applies: missing_comments,
        },
        Check {
            id: "unused-imports",
            message: "Possible unused imports.",
            severity: Severity::Warning,
            allow: Vec::new(),
            enabled: true,
            applies: unused_imports,
        },
        Check {
            id: "magic-numbers",
            message: "Possible magic numbers.",
            severity: Severity::Info,
            allow: Vec::new(),
            enabled: true,
            applies: magic_numbers,
        },
    ]
}
