// THEORY:
// This file is the main entry point for the `kmeans_palette` library crate.
//
// The public surface is small: `ClusteringEngine` quantizes a
// `PixelBuffer` in place for one cluster count, and `SweepRunner` drives the
// engine over a range of cluster counts against an image file. The algorithm
// stages (seeding, Lloyd iteration, recoloring) live in `core_modules` and are
// public so they can be driven and tested one at a time.

pub mod core_modules;
pub mod error;
pub mod pipeline;
pub mod sweep;

pub use core_modules::buffer::buffer::PixelBuffer;
pub use core_modules::pixel::pixel::Pixel;
pub use core_modules::seeder::{FixedDraw, RandomSource, RngSource, SeedPolicy};
pub use error::{QuantizeError, Result};
pub use pipeline::{ClusteringEngine, ClusteringOutcome, QuantizerConfig};
pub use sweep::{SweepArtifact, SweepEntry, SweepReport, SweepRunner};
