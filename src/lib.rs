// Public API exports
pub mod clusterer;
pub mod config;
pub mod corpus;
pub mod preprocess;
pub mod source;
pub mod sweep;

// Re-export main types for convenience
pub use clusterer::{
    Cluster, ClusterError, ClusterResult, DEFAULT_MAX_ITERS, Termination, compute_centroid,
    jaccard_distance, jaccard_similarity, kmeans, kmeans_seeded,
};

pub use config::{ConfigError, SweepConfig};

pub use corpus::{Corpus, DocId, Document};

pub use preprocess::{Normalizer, TweetNormalizer, preprocess_tweet};

pub use source::{CorpusSource, FetchError, SourceFetcher};

pub use sweep::{SweepReport, SweepSummary, run_sweep};
