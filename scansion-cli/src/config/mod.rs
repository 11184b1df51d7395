//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Matching configuration
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

/// Matching-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Named verse form, e.g. "haiku"
    pub form: Option<String>,

    /// Explicit pattern, e.g. "5-7-5"; wins over `form`
    pub pattern: Option<String>,

    /// Pronouncing dictionary path
    pub dictionary: Option<PathBuf>,

    /// Estimate syllables for words missing from the dictionary
    pub estimate_fallback: bool,

    /// Treat every non-blank line as a separate text
    pub per_line: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            form: None,
            pattern: None,
            dictionary: None,
            estimate_fallback: true,
            per_line: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}
