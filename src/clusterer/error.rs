use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClusterError {
    #[error("Not enough documents: {available} available, K={k} requested")]
    InsufficientData { k: usize, available: usize },

    #[error("K must be at least 1")]
    ZeroClusters,

    #[error("Iteration cap must be at least 1")]
    ZeroIterations,
}
