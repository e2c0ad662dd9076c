use crate::clusterer::{ClusterError, ClusterResult};
use chrono::Utc;
use serde::Serialize;
use std::fmt;

/// Outcome of clustering the corpus with one K
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    pub k: usize,
    pub outcome: Result<ClusterResult, ClusterError>,
}

impl SweepReport {
    pub fn sse(&self) -> Option<f64> {
        self.outcome.as_ref().ok().map(|r| r.sse)
    }
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(result) => write!(
                f,
                "For K={}, SSE={:.4}, Cluster Sizes={:?}",
                self.k,
                result.sse,
                result.sizes()
            ),
            Err(e) => write!(f, "For K={}, skipped: {}", self.k, e),
        }
    }
}

/// Machine-readable record of a whole sweep
#[derive(Debug, Clone, Serialize)]
pub struct SweepSummary {
    pub created_at: String,
    pub source: String,
    pub seed: u64,
    pub max_iters: usize,
    pub documents: usize,
    pub reports: Vec<SweepReport>,
}

impl SweepSummary {
    pub fn new(
        source: impl Into<String>,
        seed: u64,
        max_iters: usize,
        documents: usize,
        reports: Vec<SweepReport>,
    ) -> Self {
        Self {
            created_at: Utc::now().to_rfc3339(),
            source: source.into(),
            seed,
            max_iters,
            documents,
            reports,
        }
    }

    /// The successful run with the lowest SSE
    pub fn best(&self) -> Option<&SweepReport> {
        self.reports
            .iter()
            .filter(|r| r.sse().is_some())
            .min_by(|a, b| a.sse().partial_cmp(&b.sse()).unwrap_or(std::cmp::Ordering::Equal))
    }
}
