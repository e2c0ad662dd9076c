//! Sweep configuration
//!
//! Values come from, in increasing priority:
//! 1. Built-in defaults
//! 2. A JSON file passed with `--config`
//! 3. Individual CLI flags
//!
//! ```
//! use tweetclust::config::SweepConfig;
//!
//! let mut config = SweepConfig::default();
//! config.ks = vec![2, 4, 8];
//! config.seed = Some(7);
//! config.validate().unwrap();
//! ```


use crate::clusterer::DEFAULT_MAX_ITERS;
use crate::source::{CorpusSource, DEFAULT_SOURCE_URL, MAX_BACKOFF, SourceFetcher};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Cluster counts tried when none are configured
pub const DEFAULT_KS: [usize; 5] = [5, 10, 15, 20, 25];

/// Most retries a config may ask for
pub const MAX_FETCH_RETRIES: u32 = 10;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Parameters for one K sweep
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepConfig {
    /// Candidate cluster counts, run in order
    pub ks: Vec<usize>,

    /// Iteration cap per K-means run
    pub max_iters: usize,

    /// Seed for centroid initialization; random when absent
    pub seed: Option<u64>,

    /// URL or local path of the tweet dump
    pub source: String,

    /// Extra fetch attempts after a transient failure
    pub fetch_retries: u32,

    /// Delay before the first retry, in milliseconds
    pub retry_backoff_ms: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            ks: DEFAULT_KS.to_vec(),
            max_iters: DEFAULT_MAX_ITERS,
            seed: None,
            source: DEFAULT_SOURCE_URL.to_string(),
            fetch_retries: 1,
            retry_backoff_ms: 500,
        }
    }
}

impl SweepConfig {
    /// Load from a JSON file; missing fields fall back to defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: SweepConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ks.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one K value is required".to_string(),
            ));
        }

        if self.ks.contains(&0) {
            return Err(ConfigError::ValidationError(
                "K values must be at least 1".to_string(),
            ));
        }

        if self.max_iters == 0 {
            return Err(ConfigError::ValidationError(
                "max_iters must be at least 1".to_string(),
            ));
        }

        if self.fetch_retries > MAX_FETCH_RETRIES {
            return Err(ConfigError::ValidationError(format!(
                "fetch_retries must be at most {}",
                MAX_FETCH_RETRIES
            )));
        }

        if u128::from(self.retry_backoff_ms) > MAX_BACKOFF.as_millis() {
            return Err(ConfigError::ValidationError(format!(
                "retry_backoff_ms must be at most {}",
                MAX_BACKOFF.as_millis()
            )));
        }

        if self.source.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "source cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn corpus_source(&self) -> CorpusSource {
        CorpusSource::parse(&self.source)
    }

    pub fn fetcher(&self) -> SourceFetcher {
        SourceFetcher::new()
            .retries(self.fetch_retries)
            .backoff(Duration::from_millis(self.retry_backoff_ms))
    }
}
