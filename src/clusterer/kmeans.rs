use crate::clusterer::{
    centroid::compute_centroid,
    error::ClusterError,
    similarity::jaccard_distance,
    types::{Cluster, ClusterResult, Termination},
};
use crate::corpus::{Corpus, DocId, Document};
use rand::{Rng, SeedableRng, seq::index};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Iteration cap used when nothing else is configured
pub const DEFAULT_MAX_ITERS: usize = 10;

/// Run K-means with a fixed seed.
pub fn kmeans_seeded(
    corpus: &Corpus,
    k: usize,
    max_iters: usize,
    seed: u64,
) -> Result<ClusterResult, ClusterError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    kmeans(corpus, k, max_iters, &mut rng)
}

/// K-means over token sets with Jaccard distance and medoid centroids.
///
/// Initial centroids are `k` distinct documents sampled from `rng`. The loop
/// stops when the centroid list stops changing (compared by token set) or
/// after `max_iters` rounds. An empty cluster keeps its previous centroid.
pub fn kmeans<R: Rng + ?Sized>(
    corpus: &Corpus,
    k: usize,
    max_iters: usize,
    rng: &mut R,
) -> Result<ClusterResult, ClusterError> {
    if k == 0 {
        return Err(ClusterError::ZeroClusters);
    }
    if max_iters == 0 {
        return Err(ClusterError::ZeroIterations);
    }

    let docs = corpus.documents();
    let n = docs.len();
    if n < k {
        return Err(ClusterError::InsufficientData { k, available: n });
    }

    let degenerate = docs.iter().filter(|d| d.is_degenerate()).count();
    if degenerate > 0 {
        debug!(degenerate, "documents without tokens, treated as identical to each other");
    }

    // 1. Pick random initial medoids
    let mut centroids: Vec<DocId> = index::sample(rng, n, k)
        .into_vec()
        .into_iter()
        .map(|i| i as DocId)
        .collect();

    let mut members: Vec<Vec<DocId>> = vec![Vec::new(); k];
    let mut iterations = 0;
    let mut termination = Termination::MaxItersReached;

    for _ in 0..max_iters {
        iterations += 1;

        // 2. Assign each document to its nearest centroid
        members = assign(docs, &centroids);

        // 3. Recompute medoids
        let new_centroids: Vec<DocId> = members
            .iter()
            .zip(&centroids)
            .enumerate()
            .map(|(c, (cluster, &previous))| match compute_centroid(corpus, cluster) {
                Some((medoid, _)) => medoid,
                None => {
                    debug!(cluster = c, "empty cluster, keeping previous centroid");
                    previous
                }
            })
            .collect();

        let unchanged = new_centroids
            .iter()
            .zip(&centroids)
            .all(|(&a, &b)| docs[a as usize].tokens() == docs[b as usize].tokens());

        debug!(iteration = iterations, k, unchanged, "kmeans iteration");
        centroids = new_centroids;

        if unchanged {
            termination = Termination::Converged;
            break;
        }
    }

    // 4. Build result clusters and score them
    let clusters: Vec<Cluster> = members
        .into_iter()
        .zip(centroids)
        .enumerate()
        .map(|(i, (doc_ids, centroid))| Cluster {
            id: i as u32,
            doc_ids,
            centroid,
        })
        .collect();

    let sse = sum_squared_error(docs, &clusters);

    Ok(ClusterResult {
        clusters,
        sse,
        iterations,
        termination,
    })
}

/// Nearest-centroid assignment. Exact ties go to the lowest cluster index.
fn assign(docs: &[Document], centroids: &[DocId]) -> Vec<Vec<DocId>> {
    let mut members = vec![Vec::new(); centroids.len()];

    for (i, doc) in docs.iter().enumerate() {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;

        for (c, &center) in centroids.iter().enumerate() {
            let dist = jaccard_distance(doc.tokens(), docs[center as usize].tokens());
            if dist < best_dist {
                best = c;
                best_dist = dist;
            }
        }

        members[best].push(i as DocId);
    }

    members
}

fn sum_squared_error(docs: &[Document], clusters: &[Cluster]) -> f64 {
    clusters
        .iter()
        .map(|cluster| {
            let center = docs[cluster.centroid as usize].tokens();
            cluster
                .doc_ids
                .iter()
                .map(|&id| jaccard_distance(docs[id as usize].tokens(), center).powi(2))
                .sum::<f64>()
        })
        .sum()
}
