// THEORY:
// The mean calculator summarizes a cluster with a single color: the per-channel
// arithmetic average of its members, truncated toward zero.
//
// An empty cluster is not an error. It averages to black, a degenerate mean
// that simply competes with the others on the next assignment pass.

pub mod mean {
    use crate::core_modules::pixel::pixel::{Channel, Pixel};

    /// Integer-truncated RGB mean of `pixels`; black for an empty set.
    ///
    /// The returned alpha is zero and carries no meaning.
    pub fn mean_color<'a, I>(pixels: I) -> Pixel
    where
        I: IntoIterator<Item = &'a Pixel>,
    {
        let mut count = 0u64;
        let mut sum_r = 0u64;
        let mut sum_g = 0u64;
        let mut sum_b = 0u64;

        for pixel in pixels {
            sum_r += pixel.red as u64;
            sum_g += pixel.green as u64;
            sum_b += pixel.blue as u64;
            count += 1;
        }

        if count == 0 {
            return Pixel::default();
        }

        Pixel::new(
            (sum_r / count) as Channel,
            (sum_g / count) as Channel,
            (sum_b / count) as Channel,
            0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::mean::mean_color;
    use crate::core_modules::pixel::pixel::Pixel;

    #[test]
    fn empty_cluster_is_black() {
        let empty: [Pixel; 0] = [];
        let mean = mean_color(&empty);
        assert!(mean.same_color(&Pixel::opaque(0, 0, 0)));
    }

    #[test]
    fn truncates_instead_of_rounding() {
        let pixels = [Pixel::opaque(0, 10, 255), Pixel::opaque(1, 11, 254)];
        let mean = mean_color(&pixels);
        assert_eq!((mean.red, mean.green, mean.blue), (0, 10, 254));
    }

    #[test]
    fn ignores_member_alpha() {
        let pixels = [
            Pixel::new(30, 60, 90, 255),
            Pixel::new(60, 90, 120, 7),
            Pixel::new(90, 120, 150, 200),
        ];
        let mean = mean_color(&pixels);
        assert_eq!((mean.red, mean.green, mean.blue), (60, 90, 120));
    }

    #[test]
    fn large_sets_do_not_overflow() {
        let pixels = vec![Pixel::opaque(255, 255, 255); 100_000];
        let mean = mean_color(&pixels);
        assert_eq!((mean.red, mean.green, mean.blue), (255, 255, 255));
    }
}
