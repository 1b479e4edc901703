// THEORY:
// The `LloydIterator` is the heart of the clustering engine. It owns the K means
// for one run and drives them to a fixed point with Lloyd's algorithm.
//
// Key architectural principles:
// 1.  **Two Phases Per Pass**: An assignment phase maps every visible pixel to
//     its nearest mean (strict `<`, so the lowest index wins a tie). An update
//     phase, run only when some assignment moved, recomputes every mean from
//     scratch out of the pixels now assigned to it.
// 2.  **External Membership**: Cluster ids are not stored on the pixels. The
//     iterator keeps a `Membership` per pixel, parallel to the buffer, holding
//     the previous and current index into `means`. All ids start at 0, so a
//     pixel whose first assignment is cluster 0 does not count as a change.
// 3.  **Unconditional Convergence**: The loop stops on the first pass in which
//     no assignment changed. There is no iteration cap and no distortion
//     threshold; the number of assignment configurations is finite, so the
//     loop terminates.
// 4.  **Transparency**: Pixels with alpha == 0 are skipped by both phases and
//     their membership is never touched.

use crate::core_modules::distance::distance::{DistanceSquared, distance_squared};
use crate::core_modules::mean::mean::mean_color;
use crate::core_modules::pixel::pixel::Pixel;

/// Cluster ids of one pixel across the last two assignment passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Membership {
    pub previous: usize,
    pub current: usize,
}

/// Index of the mean closest to `pixel`; the lowest index wins ties.
pub fn nearest_mean(means: &[Pixel], pixel: &Pixel) -> usize {
    let mut smallest = DistanceSquared::MAX;
    let mut nearest = 0;
    for (index, mean) in means.iter().enumerate() {
        let distance = distance_squared(pixel, mean);
        if distance < smallest {
            smallest = distance;
            nearest = index;
        }
    }
    nearest
}

/// Runs assignment/update passes over a pixel slice until assignments settle.
///
/// Crate-private: the membership array is sized once in `new`, and only
/// `ClusteringEngine::run` is trusted to pass the matching pixel slice.
#[derive(Debug, Clone)]
pub(crate) struct LloydIterator {
    means: Vec<Pixel>,
    memberships: Vec<Membership>,
    /// Pixel indices per cluster, rebuilt on every pass.
    clusters: Vec<Vec<usize>>,
    iterations: usize,
}

impl LloydIterator {
    /// `seeds` must hold at least one mean; `pixel_count` is the length of the
    /// slice later handed to `step`/`run`.
    pub fn new(seeds: Vec<Pixel>, pixel_count: usize) -> Self {
        let clusters = vec![Vec::new(); seeds.len()];
        Self {
            means: seeds,
            memberships: vec![Membership::default(); pixel_count],
            clusters,
            iterations: 0,
        }
    }

    /// Iterates to the fixed point and returns the number of passes taken.
    pub fn run(&mut self, pixels: &[Pixel]) -> usize {
        while self.step(pixels) {}
        log::debug!(
            "k={} converged after {} iteration(s)",
            self.means.len(),
            self.iterations
        );
        self.iterations
    }

    /// One assignment pass, followed by an update pass if anything moved.
    /// Returns whether any assignment changed.
    pub fn step(&mut self, pixels: &[Pixel]) -> bool {
        debug_assert_eq!(pixels.len(), self.memberships.len());

        self.iterations += 1;
        let changed = self.assign(pixels);
        log::trace!("iteration {}: {} reassignment(s)", self.iterations, changed);

        if changed == 0 {
            return false;
        }
        self.update(pixels);
        true
    }

    fn assign(&mut self, pixels: &[Pixel]) -> usize {
        for cluster in &mut self.clusters {
            cluster.clear();
        }

        let mut changed = 0;
        for (index, (pixel, membership)) in pixels.iter().zip(&mut self.memberships).enumerate() {
            if !pixel.is_visible() {
                continue;
            }

            let assignment = nearest_mean(&self.means, pixel);
            self.clusters[assignment].push(index);

            membership.previous = membership.current;
            membership.current = assignment;
            if membership.previous != membership.current {
                changed += 1;
            }
        }
        changed
    }

    fn update(&mut self, pixels: &[Pixel]) {
        for (mean, cluster) in self.means.iter_mut().zip(&self.clusters) {
            *mean = mean_color(cluster.iter().map(|&index| &pixels[index]));
        }
    }

    #[cfg(test)]
    pub fn means(&self) -> &[Pixel] {
        &self.means
    }

    #[cfg(test)]
    pub fn memberships(&self) -> &[Membership] {
        &self.memberships
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn into_parts(self) -> (Vec<Pixel>, Vec<Membership>) {
        (self.means, self.memberships)
    }
}
