use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tweetclust::{Corpus, SweepConfig, SweepSummary, TweetNormalizer, run_sweep};

/// Cluster tweets with Jaccard K-means and report SSE for several K
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// URL or local path of the tweet dump
    #[arg(long)]
    source: Option<String>,

    /// Cluster count to try (repeatable)
    #[arg(short = 'k', long = "k")]
    ks: Vec<usize>,

    /// Iteration cap per run
    #[arg(long)]
    max_iters: Option<usize>,

    /// Seed for centroid initialization
    #[arg(long)]
    seed: Option<u64>,

    /// Print the sweep as JSON instead of one line per K
    #[arg(long)]
    json: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_config(&cli)?;
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(seed, ks = ?config.ks, max_iters = config.max_iters, "starting sweep");

    let start = Instant::now();
    let source = config.corpus_source();
    let corpus = match config.fetcher().load_corpus(&source, &TweetNormalizer) {
        Ok(corpus) => corpus,
        Err(e) => {
            warn!(%source, error = %e, "could not load corpus");
            Corpus::default()
        }
    };

    let reports = if corpus.is_empty() {
        warn!("corpus is empty, nothing to cluster");
        Vec::new()
    } else {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        run_sweep(&corpus, &config.ks, config.max_iters, &mut rng)
    };

    let summary = SweepSummary::new(
        source.to_string(),
        seed,
        config.max_iters,
        corpus.len(),
        reports,
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for report in &summary.reports {
            println!("{}", report);
        }
    }

    if let Some(best) = summary.best() {
        info!(k = best.k, sse = best.sse(), "lowest SSE");
    }
    info!(elapsed = ?start.elapsed(), "sweep complete");

    Ok(())
}

/// Defaults, then the config file, then CLI flags
fn build_config(cli: &Cli) -> anyhow::Result<SweepConfig> {
    let mut config = match &cli.config {
        Some(path) => SweepConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SweepConfig::default(),
    };

    if let Some(source) = &cli.source {
        config.source = source.clone();
    }
    if !cli.ks.is_empty() {
        config.ks = cli.ks.clone();
    }
    if let Some(max_iters) = cli.max_iters {
        config.max_iters = max_iters;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    config.validate()?;
    Ok(config)
}

/// Logs go to stderr so stdout only carries the report
fn init_logging(verbose: bool) {
    let filter = if verbose {
        "tweetclust=debug,warn"
    } else {
        "tweetclust=info,warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
