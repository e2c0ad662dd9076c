mod error;

#[cfg(test)]
mod tests;

pub use error::FetchError;

use crate::corpus::Corpus;
use crate::preprocess::Normalizer;
use std::fmt;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

/// Tweet dump used when no source is configured
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/rahulvinay029/CS6375_ML_HW2/main/usnewshealth.txt";

/// Upper bound on the delay between two fetch attempts
pub const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Where the raw newline-separated records come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    Url(String),
    File(PathBuf),
}

impl CorpusSource {
    /// `http://` and `https://` locations are URLs, anything else is a path
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            CorpusSource::Url(trimmed.to_string())
        } else {
            CorpusSource::File(PathBuf::from(trimmed))
        }
    }
}

impl Default for CorpusSource {
    fn default() -> Self {
        CorpusSource::Url(DEFAULT_SOURCE_URL.to_string())
    }
}

impl fmt::Display for CorpusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusSource::Url(url) => write!(f, "{}", url),
            CorpusSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Retrieves a whole source in one go, retrying transient failures
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    retries: u32,
    backoff: Duration,
}

impl SourceFetcher {
    /// Create a fetcher with one retry after 500 ms
    pub fn new() -> Self {
        Self {
            retries: 1,
            backoff: Duration::from_millis(500),
        }
    }

    /// Set how many extra attempts follow a transient failure
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Set the delay before the first retry; it doubles on each later one
    pub fn backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Fetch the full text of `source`
    pub fn fetch(&self, source: &CorpusSource) -> Result<String, FetchError> {
        self.with_retries(source, || match source {
            CorpusSource::Url(url) => fetch_url(url),
            CorpusSource::File(path) => read_file(path),
        })
    }

    /// Run `attempt` until it succeeds, fails permanently or runs out of retries
    fn with_retries<F>(&self, source: &CorpusSource, mut attempt: F) -> Result<String, FetchError>
    where
        F: FnMut() -> Result<String, FetchError>,
    {
        let mut retry = 0;
        loop {
            match attempt() {
                Err(e) if e.is_transient() && retry < self.retries => {
                    let delay = self.delay_for(retry);
                    warn!(%source, attempt = retry + 1, ?delay, error = %e, "fetch failed, retrying");
                    thread::sleep(delay);
                    retry += 1;
                }
                other => return other,
            }
        }
    }

    /// Backoff before retry number `retry`, doubling and capped at `MAX_BACKOFF`
    fn delay_for(&self, retry: u32) -> Duration {
        self.backoff
            .checked_mul(2u32.saturating_pow(retry))
            .unwrap_or(MAX_BACKOFF)
            .min(MAX_BACKOFF)
    }

    /// Fetch `source` and normalize it into a corpus
    pub fn load_corpus(
        &self,
        source: &CorpusSource,
        normalizer: &dyn Normalizer,
    ) -> Result<Corpus, FetchError> {
        let raw = self.fetch(source)?;
        let corpus = Corpus::from_raw(&raw, normalizer);
        info!(
            %source,
            lines = raw.lines().count(),
            documents = corpus.len(),
            "loaded corpus"
        );
        Ok(corpus)
    }
}

impl Default for SourceFetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn fetch_url(url: &str) -> Result<String, FetchError> {
    let response = reqwest::blocking::get(url)
        .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::BadStatus {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    response
        .text()
        .map_err(|e| FetchError::BodyUnreadable(e.to_string()))
}

fn read_file(path: &Path) -> Result<String, FetchError> {
    std::fs::read_to_string(path).map_err(|source| FetchError::Io {
        path: path.display().to_string(),
        source,
    })
}
