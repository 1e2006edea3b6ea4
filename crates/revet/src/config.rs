//! Configuration system for revet.
//!
//! Loads config from:
//! 1. Global: ~/.config/revet/config.toml
//! 2. Per-project: .revet/config.toml (overrides global)
//!
//! Example config.toml:
//! ```toml
//! [review]
//! root = "src/main/java"              # source directory to scan
//! guidelines = "coding_guidelines.txt"
//! extension = "java"                  # file extension to review
//! output = "code-review-results.txt"  # report path
//!
//! [checks.magic-numbers]
//! enabled = false
//!
//! [checks.missing-comments]
//! severity = "error"
//! allow = ["**/generated/**"]
//!
//! [pretty]
//! enabled = true              # auto-enable when TTY (default: auto)
//! colors = "auto"             # "auto", "always", or "never"
//! ```

use crate::merge::Merge;
use crate::output::PrettyConfig;
use revet_checks::ChecksConfig;
use serde::Deserialize;
use std::path::Path;

/// Review scan configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ReviewConfig {
    /// Source directory to scan. Default: src/main/java
    pub root: Option<String>,
    /// Guidelines file read at startup. Default: coding_guidelines.txt
    pub guidelines: Option<String>,
    /// File extension to review (without the dot). Default: java
    pub extension: Option<String>,
    /// Report output path. Default: code-review-results.txt
    pub output: Option<String>,
}

impl ReviewConfig {
    pub fn root(&self) -> &str {
        self.root.as_deref().unwrap_or("src/main/java")
    }

    pub fn guidelines(&self) -> &str {
        self.guidelines.as_deref().unwrap_or("coding_guidelines.txt")
    }

    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or("java")
    }

    pub fn output(&self) -> &str {
        self.output.as_deref().unwrap_or("code-review-results.txt")
    }
}

impl Merge for ReviewConfig {
    fn merge(self, other: Self) -> Self {
        Self {
            root: self.root.merge(other.root),
            guidelines: self.guidelines.merge(other.guidelines),
            extension: self.extension.merge(other.extension),
            output: self.output.merge(other.output),
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RevetConfig {
    pub review: ReviewConfig,
    pub checks: ChecksConfig,
    pub pretty: PrettyConfig,
}

impl Merge for RevetConfig {
    fn merge(self, other: Self) -> Self {
        Self {
            review: self.review.merge(other.review),
            checks: self.checks.merge(other.checks),
            pretty: self.pretty.merge(other.pretty),
        }
    }
}

impl RevetConfig {
    /// Load configuration for a project.
    ///
    /// Loads global config from ~/.config/revet/config.toml,
    /// then merges with per-project config from .revet/config.toml.
    pub fn load(root: &Path) -> Self {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::load_file(&global_path) {
                config = config.merge(global);
            }
        }

        // Load per-project config (overrides global)
        let project_path = root.join(".revet").join("config.toml");
        if let Some(project) = Self::load_file(&project_path) {
            config = config.merge(project);
        }

        config
    }

    /// Get the global config path.
    fn global_config_path() -> Option<std::path::PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(std::path::PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("revet").join("config.toml"))
    }

    /// Load config from a file path.
    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        toml::from_str(&content).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RevetConfig::default();
        assert_eq!(config.review.root(), "src/main/java");
        assert_eq!(config.review.guidelines(), "coding_guidelines.txt");
        assert_eq!(config.review.extension(), "java");
        assert_eq!(config.review.output(), "code-review-results.txt");
        assert!(config.checks.0.is_empty());
    }

    #[test]
    fn test_load_project_config() {
        let dir = TempDir::new().unwrap();
        let revet_dir = dir.path().join(".revet");
        std::fs::create_dir_all(&revet_dir).unwrap();

        let config_path = revet_dir.join("config.toml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
[review]
root = "lib"
extension = "kt"

[checks.magic-numbers]
enabled = false
"#
        )
        .unwrap();

        let config = RevetConfig::load(dir.path());
        assert_eq!(config.review.root(), "lib");
        assert_eq!(config.review.extension(), "kt");
        // Unset fields keep defaults
        assert_eq!(config.review.output(), "code-review-results.txt");
        assert_eq!(
            config.checks.0.get("magic-numbers").unwrap().enabled,
            Some(false)
        );
    }

    #[test]
    fn test_merge_preserves_explicit_values() {
        // Simulate: global sets root, project only sets extension.
        // The explicit root should survive the merge.
        let global = RevetConfig {
            review: ReviewConfig {
                root: Some("app/src".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let project = RevetConfig {
            review: ReviewConfig {
                extension: Some("kt".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = global.merge(project);
        assert_eq!(merged.review.root(), "app/src");
        assert_eq!(merged.review.extension(), "kt");
    }

    #[test]
    fn test_checks_config_parsed() {
        let dir = TempDir::new().unwrap();
        let revet_dir = dir.path().join(".revet");
        std::fs::create_dir_all(&revet_dir).unwrap();

        let config_path = revet_dir.join("config.toml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
[checks.missing-comments]
severity = "error"
allow = ["**/generated/**"]
"#
        )
        .unwrap();

        let config = RevetConfig::load(dir.path());
        let override_cfg = config.checks.0.get("missing-comments").unwrap();
        assert_eq!(override_cfg.severity.as_deref(), Some("error"));
        assert_eq!(override_cfg.allow, vec!["**/generated/**".to_string()]);
    }
}
