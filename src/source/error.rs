use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP {status}: {reason}")]
    BadStatus { status: u16, reason: String },

    #[error("Failed to read response body: {0}")]
    BodyUnreadable(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Whether another attempt could plausibly succeed
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::RequestFailed(_) | FetchError::BodyUnreadable(_) => true,
            FetchError::BadStatus { status, .. } => *status == 429 || *status >= 500,
            FetchError::Io { .. } => false,
        }
    }
}
