use std::collections::BTreeSet;

pub fn jaccard_similarity(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    // Two empty token sets count as identical
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }

    let intersection = a.intersection(b).count() as f64;
    let union = a.union(b).count() as f64;

    intersection / union
}

pub fn jaccard_distance(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    1.0 - jaccard_similarity(a, b)
}
