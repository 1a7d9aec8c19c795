//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rpgsheet_domain::FormulaRevision;

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Formula revision for vitality tiers and XP thresholds
    pub formula_revision: FormulaRevision,
    /// Directory relative sheet references resolve against
    pub sheets_dir: PathBuf,
    /// Pretty-print JSON output
    pub output_pretty: bool,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            formula_revision: lookup("FORMULA_REVISION")
                .unwrap_or_else(|| "current".to_string())
                .parse()
                .context("FORMULA_REVISION must be `current` or `legacy`")?,

            sheets_dir: lookup("SHEETS_DIR")
                .unwrap_or_else(|| ".".to_string())
                .into(),

            output_pretty: lookup("OUTPUT_PRETTY")
                .unwrap_or_else(|| "true".to_string())
                .trim()
                .parse()
                .context("OUTPUT_PRETTY must be `true` or `false`")?,
        })
    }
}
