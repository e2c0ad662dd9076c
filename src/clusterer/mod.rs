mod centroid;
mod error;
mod kmeans;
mod similarity;
mod types;


pub use centroid::compute_centroid;
pub use error::ClusterError;
pub use kmeans::{DEFAULT_MAX_ITERS, kmeans, kmeans_seeded};
pub use similarity::{jaccard_distance, jaccard_similarity};
pub use types::{Cluster, ClusterResult, Termination};
