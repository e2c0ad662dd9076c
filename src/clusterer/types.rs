use crate::corpus::DocId;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    pub id: u32,
    pub doc_ids: Vec<DocId>,
    /// Medoid of the cluster, always a corpus member
    pub centroid: DocId,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.doc_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc_ids.is_empty()
    }
}

/// How the assignment/update loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Centroids stopped changing
    Converged,
    /// Iteration cap hit before the centroids settled
    MaxItersReached,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterResult {
    pub clusters: Vec<Cluster>,
    /// Sum of squared Jaccard distances from members to their centroid
    pub sse: f64,
    pub iterations: usize,
    pub termination: Termination,
}

impl ClusterResult {
    /// Cluster sizes in cluster index order
    pub fn sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Cluster::len).collect()
    }

    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }
}
