// THEORY:
// The sweep is the driving loop around the clustering core. It quantizes one
// source image once per cluster count in a range and writes one output file per
// count.
//
// Key principles:
// 1.  **Fresh Input Per Run**: Every K decodes the source file again, so no
//     pixel, mean or membership from one run can leak into another.
// 2.  **Bounded Fan-Out**: Runs are CPU-bound, so each one goes to Tokio's
//     blocking pool. At most `workers` runs are in flight at a time.
// 3.  **Isolated Failures**: A decode or encode failure aborts only the K it
//     happened in. The report carries one entry per K, success or error, in
//     ascending K order.

use crate::core_modules::seeder::RngSource;
use crate::core_modules::utils::image_helper::image_helper;
use crate::error::{QuantizeError, Result};
use crate::pipeline::{ClusteringEngine, ClusteringOutcome, QuantizerConfig};
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A successfully written output for one cluster count.
#[derive(Debug, Clone)]
pub struct SweepArtifact {
    pub output_path: PathBuf,
    pub outcome: ClusteringOutcome,
    /// Wall time for decode, clustering and encode together.
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct SweepEntry {
    pub cluster_count: usize,
    pub result: Result<SweepArtifact>,
}

/// One entry per cluster count, sorted by cluster count.
#[derive(Debug, Default)]
pub struct SweepReport {
    pub entries: Vec<SweepEntry>,
}

impl SweepReport {
    pub fn artifacts(&self) -> impl Iterator<Item = &SweepArtifact> {
        self.entries.iter().filter_map(|entry| entry.result.as_ref().ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (usize, &QuantizeError)> {
        self.entries
            .iter()
            .filter_map(|entry| entry.result.as_ref().err().map(|e| (entry.cluster_count, e)))
    }

    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Runs the clustering engine over every cluster count of a `QuantizerConfig`.
pub struct SweepRunner {
    config: Arc<QuantizerConfig>,
}

impl SweepRunner {
    pub fn new(config: QuantizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &QuantizerConfig {
        &self.config
    }

    pub async fn run(&self, input: impl Into<PathBuf>) -> SweepReport {
        let input = Arc::new(input.into());
        let workers = self.config.workers.max(1);
        log::info!(
            "sweeping k={}..={} over {} with {} worker(s)",
            self.config.min_clusters,
            self.config.max_clusters,
            input.display(),
            workers
        );

        let mut entries: Vec<SweepEntry> = stream::iter(self.config.cluster_counts())
            .map(|k| {
                let config = Arc::clone(&self.config);
                let input = Arc::clone(&input);
                async move {
                    let task = move || quantize_file(&config, &input, k);
                    let result = tokio::task::spawn_blocking(task)
                        .await
                        .unwrap_or_else(|join_error| Err(QuantizeError::from(join_error)));

                    match &result {
                        Ok(artifact) => log::info!(
                            "k={} wrote {} ({} iteration(s), {:?})",
                            k,
                            artifact.output_path.display(),
                            artifact.outcome.iterations,
                            artifact.elapsed
                        ),
                        Err(e) => log::error!("k={k} failed: {e}"),
                    }

                    SweepEntry {
                        cluster_count: k,
                        result,
                    }
                }
            })
            .buffer_unordered(workers)
            .collect()
            .await;

        entries.sort_by_key(|entry| entry.cluster_count);
        SweepReport { entries }
    }
}

/// Decodes `input`, quantizes it to `k` colors and writes the result to the
/// configured output path for `k`.
pub fn quantize_file(config: &QuantizerConfig, input: &Path, k: usize) -> Result<SweepArtifact> {
    let started = Instant::now();
    let mut buffer = image_helper::load(input)?;

    let mut random = match config.seed {
        Some(seed) => RngSource::seeded(seed.wrapping_add(k as u64)),
        None => RngSource::from_entropy(),
    };
    let outcome = ClusteringEngine::new(config.seed_policy).run(&mut buffer, k, &mut random)?;

    let output_path = config.output_path(k);
    image_helper::save(&output_path, &buffer)?;

    Ok(SweepArtifact {
        output_path,
        outcome,
        elapsed: started.elapsed(),
    })
}
