use kmeans_palette::core_modules::distance::distance::distance_squared;
use kmeans_palette::core_modules::lloyd::nearest_mean;
use kmeans_palette::{ClusteringEngine, FixedDraw, Pixel, PixelBuffer, RngSource};
use std::collections::HashSet;

fn gradient(width: u32, height: u32) -> PixelBuffer {
    let pixels = (0..width * height)
        .map(|i| {
            let x = (i % width) as u8;
            let y = (i / width) as u8;
            let alpha = if (x + y) % 7 == 0 { 0 } else { 255 };
            Pixel::new(x.wrapping_mul(16), y.wrapping_mul(16), x ^ y, alpha)
        })
        .collect();
    PixelBuffer::new(width, height, pixels).unwrap()
}

#[test]
fn two_by_two_scenario_end_to_end() {
    let mut buffer = PixelBuffer::from_rgba_bytes(
        2,
        2,
        &[255, 0, 0, 255, 255, 0, 0, 255, 0, 0, 255, 255, 0, 0, 0, 0],
    )
    .unwrap();

    let outcome = ClusteringEngine::default()
        .run(&mut buffer, 2, &mut FixedDraw(1))
        .unwrap();

    let colors: HashSet<(u8, u8, u8)> =
        outcome.means.iter().map(|m| (m.red, m.green, m.blue)).collect();
    assert_eq!(colors, HashSet::from([(255, 0, 0), (0, 0, 255)]));
    assert_eq!(
        buffer.to_rgba_bytes(),
        vec![255, 0, 0, 255, 255, 0, 0, 255, 0, 0, 255, 255, 0, 0, 0, 0]
    );
}

#[test]
fn transparent_pixels_survive_bit_for_bit() {
    let original = gradient(16, 16);
    for k in 1..=6 {
        let mut buffer = original.clone();
        ClusteringEngine::default()
            .run(&mut buffer, k, &mut RngSource::seeded(k as u64))
            .unwrap();

        for (before, after) in original.pixels().iter().zip(buffer.pixels()) {
            if before.is_visible() {
                assert_eq!(after.alpha, 255);
            } else {
                assert_eq!(before, after);
            }
        }
    }
}

#[test]
fn output_uses_at_most_k_colors() {
    let original = gradient(16, 16);
    for k in 1..=8 {
        let mut buffer = original.clone();
        let outcome = ClusteringEngine::default()
            .run(&mut buffer, k, &mut FixedDraw(5))
            .unwrap();

        let used: HashSet<Pixel> =
            buffer.pixels().iter().filter(|p| p.is_visible()).copied().collect();
        assert!(used.len() <= k);
        assert_eq!(outcome.means.len(), k);
        for color in used {
            assert!(outcome.means.iter().any(|m| m.same_color(&color)));
        }
    }
}

#[test]
fn converged_means_are_nearest_for_every_pixel() {
    let original = gradient(32, 8);
    let mut buffer = original.clone();
    let outcome = ClusteringEngine::default()
        .run(&mut buffer, 5, &mut FixedDraw(40))
        .unwrap();

    assert_eq!(buffer.len(), original.len());
    for (before, after) in original.pixels().iter().zip(buffer.pixels()) {
        if before.is_visible() {
            let nearest = &outcome.means[nearest_mean(&outcome.means, before)];
            assert!(after.same_color(nearest));
            let assigned = distance_squared(before, after);
            assert!(outcome.means.iter().all(|m| assigned <= distance_squared(before, m)));
        }
    }
}

#[test]
fn same_anchor_gives_same_image() {
    let original = gradient(20, 10);
    let mut first = original.clone();
    let mut second = original.clone();

    let a = ClusteringEngine::default().run(&mut first, 4, &mut FixedDraw(33)).unwrap();
    let b = ClusteringEngine::default().run(&mut second, 4, &mut FixedDraw(33)).unwrap();

    assert_eq!(a, b);
    assert_eq!(first, second);
}

#[test]
fn fully_transparent_image_passes_through() {
    let original = PixelBuffer::new(3, 1, vec![Pixel::new(9, 8, 7, 0); 3]).unwrap();
    let mut buffer = original.clone();
    let outcome = ClusteringEngine::default()
        .run(&mut buffer, 3, &mut FixedDraw(0))
        .unwrap();

    assert_eq!(buffer, original);
    assert_eq!(outcome.iterations, 1);
}
