// THEORY:
// The `pipeline` module is the top-level API of the clustering core. It wires
// the stages together for one cluster count:
//
//   Stage 1: Seeding      (farthest-point, one random anchor)
//   Stage 2: Clustering   (Lloyd iterations to a fixed point)
//   Stage 3: Recoloring   (visible pixels take their cluster's mean)
//
// The `ClusteringEngine` holds nothing but immutable configuration, so the same
// engine can be run again on a freshly loaded buffer for every K in a sweep
// without any state leaking from one run into the next.

use crate::core_modules::buffer::buffer::PixelBuffer;
use crate::core_modules::lloyd::LloydIterator;
use crate::core_modules::recolor::recolor;
use crate::core_modules::seeder::{RandomSource, select_seeds};
use crate::error::{QuantizeError, Result};
use std::path::PathBuf;

// Re-export key data structures for the public API.
pub use crate::core_modules::pixel::pixel::Pixel;
pub use crate::core_modules::seeder::SeedPolicy;

pub const DEFAULT_MIN_CLUSTERS: usize = 3;
pub const DEFAULT_MAX_CLUSTERS: usize = 10;
pub const DEFAULT_OUTPUT_PREFIX: &str = "output";

/// Configuration for a quantization sweep.
#[derive(Debug, Clone)]
pub struct QuantizerConfig {
    /// The first cluster count of the sweep.
    pub min_clusters: usize,
    /// The last cluster count of the sweep, inclusive.
    pub max_clusters: usize,
    pub output_dir: PathBuf,
    /// Output files are named `<output_prefix><K>.png`.
    pub output_prefix: String,
    /// How many cluster counts may be processed at the same time.
    pub workers: usize,
    /// Fixed RNG seed. The run for K draws from `seed + K`, so results do not
    /// depend on scheduling order. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub seed_policy: SeedPolicy,
}

impl Default for QuantizerConfig {
    fn default() -> Self {
        Self {
            min_clusters: DEFAULT_MIN_CLUSTERS,
            max_clusters: DEFAULT_MAX_CLUSTERS,
            output_dir: PathBuf::from("."),
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            workers: num_cpus::get(),
            seed: None,
            seed_policy: SeedPolicy::default(),
        }
    }
}

impl QuantizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_clusters == 0 || self.min_clusters > self.max_clusters {
            return Err(QuantizeError::InvalidRange {
                min: self.min_clusters,
                max: self.max_clusters,
            });
        }
        Ok(())
    }

    pub fn cluster_counts(&self) -> std::ops::RangeInclusive<usize> {
        self.min_clusters..=self.max_clusters
    }

    pub fn output_path(&self, k: usize) -> PathBuf {
        self.output_dir.join(format!("{}{}.png", self.output_prefix, k))
    }
}

/// What a single clustering run converged to.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringOutcome {
    pub cluster_count: usize,
    /// Lloyd passes executed, including the final pass that changed nothing.
    pub iterations: usize,
    /// Final cluster colors; only the RGB channels are meaningful.
    pub means: Vec<Pixel>,
}

/// Runs seeding, Lloyd iteration and recoloring for one cluster count.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClusteringEngine {
    seed_policy: SeedPolicy,
}

impl ClusteringEngine {
    pub fn new(seed_policy: SeedPolicy) -> Self {
        Self { seed_policy }
    }

    /// Quantizes `buffer` in place to at most `k` colors.
    ///
    /// This is the only public way to drive the Lloyd iterator and recolorer,
    /// so the membership array always matches the buffer it was built for.
    pub fn run<R>(
        &self,
        buffer: &mut PixelBuffer,
        k: usize,
        random: &mut R,
    ) -> Result<ClusteringOutcome>
    where
        R: RandomSource + ?Sized,
    {
        log::info!(
            "running k-means with k={} over {} pixel(s) ({} visible)",
            k,
            buffer.len(),
            buffer.visible_count()
        );

        // Stage 1: Seeding
        let seeds = select_seeds(buffer.pixels(), k, self.seed_policy, random)?;

        // Stage 2: Clustering
        let mut lloyd = LloydIterator::new(seeds, buffer.len());
        lloyd.run(buffer.pixels());
        let iterations = lloyd.iterations();
        let (means, memberships) = lloyd.into_parts();

        // Stage 3: Recoloring
        recolor(buffer.pixels_mut(), &memberships, &means);

        Ok(ClusteringOutcome {
            cluster_count: k,
            iterations,
            means,
        })
    }
}
