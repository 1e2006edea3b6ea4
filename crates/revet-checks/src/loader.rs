//! Check loading with config overrides.
//!
//! Checks are builtin-only; config can adjust severity, disable a check, or
//! add allow patterns, but never reorder the table.

use crate::Check;
use crate::builtin::builtin_checks;
use glob::Pattern;
use serde::Deserialize;
use std::collections::HashMap;

/// Configuration for review checks.
/// Maps check ID to per-check configuration,
/// e.g. `{ "magic-numbers" = { enabled = false } }`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(transparent)]
pub struct ChecksConfig(pub HashMap<String, CheckOverride>);

/// Per-check configuration override.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct CheckOverride {
    /// Override the check's severity.
    pub severity: Option<String>,
    /// Enable or disable the check.
    pub enabled: Option<bool>,
    /// File patterns where this check is skipped.
    #[serde(default)]
    pub allow: Vec<String>,
}

/// Load the builtin checks with config overrides applied.
/// Disabled checks are dropped; check order is preserved.
pub fn load_checks(config: &ChecksConfig) -> Vec<Check> {
    let mut checks = builtin_checks();

    for check in &mut checks {
        let Some(override_cfg) = config.0.get(check.id) else {
            continue;
        };
        if let Some(ref severity_str) = override_cfg.severity {
            if let Ok(severity) = severity_str.parse() {
                check.severity = severity;
            }
        }
        if let Some(enabled) = override_cfg.enabled {
            check.enabled = enabled;
        }
        for pattern_str in &override_cfg.allow {
            if let Ok(pattern) = Pattern::new(pattern_str) {
                check.allow.push(pattern);
            }
        }
    }

    checks.retain(|c| c.enabled);
    checks
}
