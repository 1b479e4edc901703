// THEORY:
// The `seeder` picks the K starting means for the Lloyd iterator using a
// farthest-point heuristic.
//
// Algorithm:
// 1.  **Random Anchor**: The first mean is a single random draw from the pixel
//     collection. This is the only source of randomness in a clustering run, and
//     it goes through the `RandomSource` trait so callers (and tests) can pin it.
// 2.  **Farthest Point**: Every further mean is the visible pixel whose average
//     squared distance to the means chosen so far is strictly largest. The scan
//     runs in buffer order, so the first pixel wins a tie.
//
// Given the anchor, the remaining seeds are a pure function of the pixel data.

use crate::core_modules::distance::distance::distance_squared;
use crate::core_modules::pixel::pixel::Pixel;
use crate::error::{QuantizeError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the random index used for the first seed.
pub trait RandomSource {
    /// Returns an index in `0..len`. Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Adapts any `rand` generator into a `RandomSource`.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Seeds from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible source for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Always draws the same index, clamped to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDraw(pub usize);

impl RandomSource for FixedDraw {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

/// Which pixels the first, random seed may be drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Any pixel, transparent ones included.
    #[default]
    AnyPixel,
    /// Visible pixels only, consistent with the farthest-point scan.
    VisibleOnly,
}

/// Chooses `k` initial means from `pixels`.
pub fn select_seeds<R>(
    pixels: &[Pixel],
    k: usize,
    policy: SeedPolicy,
    random: &mut R,
) -> Result<Vec<Pixel>>
where
    R: RandomSource + ?Sized,
{
    if pixels.is_empty() {
        return Err(QuantizeError::EmptyImage);
    }
    if k == 0 {
        return Err(QuantizeError::InvalidClusterCount(k));
    }

    let mut means = Vec::with_capacity(k);
    means.push(first_seed(pixels, policy, random)?);

    for i in 1..k {
        let mean = farthest_visible(pixels, &means);
        log::trace!("seed {i}: {mean:?}");
        means.push(mean);
    }

    Ok(means)
}

fn first_seed<R>(pixels: &[Pixel], policy: SeedPolicy, random: &mut R) -> Result<Pixel>
where
    R: RandomSource + ?Sized,
{
    match policy {
        SeedPolicy::AnyPixel => Ok(pixels[random.pick_index(pixels.len())]),
        SeedPolicy::VisibleOnly => {
            let visible = pixels.iter().filter(|p| p.is_visible()).count();
            if visible == 0 {
                return Err(QuantizeError::NoVisiblePixels);
            }
            let draw = random.pick_index(visible);
            pixels
                .iter()
                .filter(|p| p.is_visible())
                .nth(draw)
                .copied()
                .ok_or(QuantizeError::NoVisiblePixels)
        }
    }
}

/// The visible pixel with the largest average squared distance to `means`.
/// Falls back to black when no pixel is strictly farther than zero.
fn farthest_visible(pixels: &[Pixel], means: &[Pixel]) -> Pixel {
    let chosen = means.len() as u64;
    let mut largest_average = 0u64;
    let mut farthest = Pixel::default();

    for pixel in pixels.iter().filter(|p| p.is_visible()) {
        let total: u64 = means
            .iter()
            .map(|mean| distance_squared(pixel, mean) as u64)
            .sum();
        let average = total / chosen;
        if average > largest_average {
            largest_average = average;
            farthest = *pixel;
        }
    }

    farthest
}
