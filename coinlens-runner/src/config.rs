//! Serializable run configuration.
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! reproduces the standard snapshot: top 50 coins by market cap in USD,
//! written to `Crypto_Analysis.xlsx` in the working directory.

use coinlens_core::data::{MarketQuery, DEFAULT_BASE_URL};
use coinlens_core::summary::TOP_N;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default output workbook, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "Crypto_Analysis.xlsx";

/// Largest page the markets endpoint serves.
pub const MAX_PER_PAGE: u32 = 250;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    #[error("parse config: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Full configuration for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub source: SourceConfig,
    pub output: OutputConfig,
}

/// Where and what to fetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub base_url: String,
    pub vs_currency: String,
    pub order: String,
    pub per_page: u32,
    pub page: u32,
    pub sparkline: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        let query = MarketQuery::default();
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            vs_currency: query.vs_currency,
            order: query.order,
            per_page: query.per_page,
            page: query.page,
            sparkline: query.sparkline,
        }
    }
}

impl SourceConfig {
    pub fn query(&self) -> MarketQuery {
        MarketQuery {
            vs_currency: self.vs_currency.clone(),
            order: self.order.clone(),
            per_page: self.per_page,
            page: self.page,
            sparkline: self.sparkline,
        }
    }
}

/// Where the workbook goes and how large the top subset is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub path: PathBuf,
    /// Rows in the top-by-market-cap sheet.
    pub top_n: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
            top_n: TOP_N,
        }
    }
}

impl RunConfig {
    /// Load and validate a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("source.base_url is empty".into()));
        }
        if !(1..=MAX_PER_PAGE).contains(&self.source.per_page) {
            return Err(ConfigError::Invalid(format!(
                "source.per_page must be in 1..={MAX_PER_PAGE}, got {}",
                self.source.per_page
            )));
        }
        if self.source.page == 0 {
            return Err(ConfigError::Invalid("source.page starts at 1".into()));
        }
        if self.output.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("output.path is empty".into()));
        }
        if self.output.top_n == 0 {
            return Err(ConfigError::Invalid("output.top_n must be at least 1".into()));
        }
        Ok(())
    }
}
