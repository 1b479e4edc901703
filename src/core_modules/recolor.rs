// THEORY:
// Final pass of a clustering run: every visible pixel takes the color of the
// mean it converged to and becomes fully opaque. Transparent pixels are left
// bit-for-bit as they were. The buffer keeps its length and order.

use crate::core_modules::lloyd::Membership;
use crate::core_modules::pixel::pixel::{OPAQUE, Pixel};

/// Repaints `pixels` in place from `means`, using each pixel's current cluster.
/// `memberships` must be the array produced for this exact pixel slice.
pub(crate) fn recolor(pixels: &mut [Pixel], memberships: &[Membership], means: &[Pixel]) {
    debug_assert_eq!(pixels.len(), memberships.len());

    for (pixel, membership) in pixels.iter_mut().zip(memberships) {
        if !pixel.is_visible() {
            continue;
        }
        let mean = &means[membership.current];
        *pixel = Pixel::new(mean.red, mean.green, mean.blue, OPAQUE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(current: usize) -> Membership {
        Membership {
            previous: current,
            current,
        }
    }

    #[test]
    fn paints_visible_pixels_with_their_mean() {
        let means = [Pixel::new(10, 20, 30, 0), Pixel::new(200, 100, 50, 0)];
        let mut pixels = vec![Pixel::new(12, 18, 33, 40), Pixel::new(190, 90, 60, 255)];
        recolor(&mut pixels, &[member(0), member(1)], &means);
        assert_eq!(pixels, vec![Pixel::opaque(10, 20, 30), Pixel::opaque(200, 100, 50)]);
    }

    #[test]
    fn leaves_transparent_pixels_untouched() {
        let ghost = Pixel::new(77, 66, 55, 0);
        let mut pixels = vec![ghost];
        recolor(&mut pixels, &[member(0)], &[Pixel::opaque(1, 1, 1)]);
        assert_eq!(pixels, vec![ghost]);
    }

    #[test]
    fn is_idempotent() {
        let means = [Pixel::opaque(5, 5, 5), Pixel::opaque(250, 250, 250)];
        let memberships = [member(0), member(1), member(0)];
        let mut pixels = vec![
            Pixel::new(0, 0, 9, 255),
            Pixel::new(240, 255, 255, 3),
            Pixel::new(9, 9, 9, 0),
        ];
        recolor(&mut pixels, &memberships, &means);
        let once = pixels.clone();
        recolor(&mut pixels, &memberships, &means);
        assert_eq!(pixels, once);
    }
}
