mod report;


pub use report::{SweepReport, SweepSummary};

use crate::clusterer::kmeans;
use crate::corpus::Corpus;
use rand::Rng;
use tracing::{info, warn};

/// Run K-means once per entry of `ks`, in order.
///
/// Every run draws its initial centroids from the same `rng`, so each K gets
/// a fresh initialization while the whole sweep stays reproducible from one
/// seed. A failing K is reported and the sweep moves on.
pub fn run_sweep<R: Rng + ?Sized>(
    corpus: &Corpus,
    ks: &[usize],
    max_iters: usize,
    rng: &mut R,
) -> Vec<SweepReport> {
    ks.iter()
        .map(|&k| {
            let outcome = kmeans(corpus, k, max_iters, rng);
            match &outcome {
                Ok(result) => info!(
                    k,
                    sse = result.sse,
                    iterations = result.iterations,
                    termination = ?result.termination,
                    "clustering finished"
                ),
                Err(e) => warn!(k, error = %e, "skipping K"),
            }
            SweepReport { k, outcome }
        })
        .collect()
}
