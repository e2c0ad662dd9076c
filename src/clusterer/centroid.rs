use crate::clusterer::similarity::jaccard_distance;
use crate::corpus::{Corpus, DocId};

/// Pick the medoid of a cluster: the member with the smallest summed
/// Jaccard distance to every member (itself included).
///
/// Ties keep the first candidate in `members` order. Returns `None` for an
/// empty cluster. Cost is quadratic in the cluster size.
pub fn compute_centroid(corpus: &Corpus, members: &[DocId]) -> Option<(DocId, f64)> {
    let mut best: Option<(DocId, f64)> = None;

    for &candidate in members {
        let tokens = corpus.get(candidate)?.tokens();
        let total: f64 = members
            .iter()
            .filter_map(|&other| corpus.get(other))
            .map(|other| jaccard_distance(tokens, other.tokens()))
            .sum();

        match best {
            Some((_, best_total)) if total >= best_total => {}
            _ => best = Some((candidate, total)),
        }
    }

    best
}
