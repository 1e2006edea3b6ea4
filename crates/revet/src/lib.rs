//! Revet - heuristic code review library and CLI.
//!
//! Walks a source tree and flags files that trip shallow content
//! heuristics (missing comments, possible unused imports, magic numbers),
//! writing a plain-text report next to the console output.
//!
//! # Example
//!
//! ```ignore
//! use revet::commands::review::review_tree;
//! use revet_checks::builtin_checks;
//!
//! let checks = builtin_checks();
//! let outcome = review_tree("src/main/java".as_ref(), "java", &checks)?;
//! ```

pub mod commands;
pub mod config;
pub mod merge;
pub mod output;
pub mod report;
pub mod walker;
