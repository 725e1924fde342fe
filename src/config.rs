//! Configuration for the result model.
//!
//! The model has very few knobs: the policy used when post-processing the
//! pattern sets and the logging setup of the hosting run. Everything has a
//! default so a plain `ResultModel::new()` behaves predictably.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{FileInfoError, Result};

/// Master configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInfoConfig {
    /// Pattern post-processing policy.
    pub patterns: PatternPolicy,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

impl FileInfoConfig {
    /// Parse a configuration from JSON. Missing sections take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| FileInfoError::Config(format!("JSON configuration error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.patterns.validate()
    }
}

/// Order in which pattern sets are sorted.
///
/// Both orders are total: remaining ties are broken by the ordered match
/// list, then by description, YARA rule and byte order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternOrder {
    /// Rule name first, then offset of the first match.
    #[default]
    NameThenOffset,
    /// Offset of the first match first, then rule name.
    OffsetThenName,
}

/// Policy parameters for sorting and redundancy removal of pattern sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternPolicy {
    /// Sort order applied by the `sort_*_patterns` operations.
    pub order: PatternOrder,
    /// Characters splitting a rule name into family and variant parts.
    ///
    /// `"SHA256-K"` with separator `-` belongs to family `"SHA256"` and has
    /// specificity 2 (number of name components).
    pub family_separators: Vec<char>,
}

impl Default for PatternPolicy {
    fn default() -> Self {
        Self {
            order: PatternOrder::NameThenOffset,
            family_separators: vec!['-', '_', '.'],
        }
    }
}

impl PatternPolicy {
    pub fn validate(&self) -> Result<()> {
        if let Some(c) = self
            .family_separators
            .iter()
            .find(|c| c.is_alphanumeric() || c.is_whitespace())
        {
            return Err(FileInfoError::Config(format!(
                "family separator {:?} must be punctuation",
                c
            )));
        }
        Ok(())
    }

    /// Family part of a rule name (everything before the first separator).
    pub fn family<'a>(&self, name: &'a str) -> &'a str {
        match name.find(|c: char| self.family_separators.contains(&c)) {
            Some(pos) => &name[..pos],
            None => name,
        }
    }

    /// Number of separator-delimited components in a rule name.
    pub fn specificity(&self, name: &str) -> usize {
        name.split(|c: char| self.family_separators.contains(&c))
            .filter(|part| !part.is_empty())
            .count()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
    /// Filter used when `RUST_LOG` is not set.
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            default_filter: "info".to_string(),
        }
    }
}
