// THEORY:
// Pairwise comparison of two pixels. Everything the clustering loop decides,
// from seeding to assignment, is driven by one measure: the squared Euclidean
// distance between two colors in plain RGB.
//
// Alpha never participates. Squaring is kept (no square root) because the
// algorithm only ever compares and sums distances, and the integer form keeps
// tie-breaking exact.

pub mod distance {
    use crate::core_modules::pixel::pixel::{Channel, Pixel};

    pub type DistanceSquared = u32;

    #[inline]
    fn channel_delta_squared(a: Channel, b: Channel) -> DistanceSquared {
        let delta = a.abs_diff(b) as DistanceSquared;
        delta * delta
    }

    /// Sum of squared per-channel differences over red, green and blue.
    ///
    /// At most `3 * 255^2`, so it always fits a `u32`.
    #[inline]
    pub fn distance_squared(a: &Pixel, b: &Pixel) -> DistanceSquared {
        channel_delta_squared(a.red, b.red)
            + channel_delta_squared(a.green, b.green)
            + channel_delta_squared(a.blue, b.blue)
    }
}

#[cfg(test)]
mod tests {
    use super::distance::*;
    use crate::core_modules::pixel::pixel::Pixel;

    #[test]
    fn is_symmetric() {
        let samples = [
            Pixel::new(0, 0, 0, 255),
            Pixel::new(255, 0, 0, 255),
            Pixel::new(17, 200, 3, 0),
            Pixel::new(255, 255, 255, 128),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(distance_squared(a, b), distance_squared(b, a));
            }
        }
    }

    #[test]
    fn identical_colors_are_zero_apart_regardless_of_alpha() {
        let a = Pixel::new(90, 45, 12, 255);
        assert_eq!(distance_squared(&a, &a), 0);
        assert_eq!(distance_squared(&a, &Pixel::new(90, 45, 12, 0)), 0);
    }

    #[test]
    fn sums_rgb_squares() {
        let a = Pixel::new(1, 2, 3, 0);
        let b = Pixel::new(4, 6, 15, 255);
        assert_eq!(distance_squared(&a, &b), 9 + 16 + 144);
    }

    #[test]
    fn black_to_white_is_the_maximum() {
        let black = Pixel::opaque(0, 0, 0);
        let white = Pixel::opaque(255, 255, 255);
        assert_eq!(distance_squared(&black, &white), 3 * 255 * 255);
    }
}
