// THEORY:
// The `PixelBuffer` is the one shape of data the clustering core consumes and
// produces: a flat, row-major sequence of `Pixel`s (top-left to bottom-right,
// rows of contiguous columns) plus the image dimensions.
//
// Like `Pixel`, it is a "dumb" container. Its only job beyond holding data is to
// guarantee that `pixels.len() == width * height`, so nothing downstream needs
// to re-check the geometry. Codecs build it from raw RGBA8 bytes and turn it
// back into bytes for writing.

pub mod buffer {
    use crate::core_modules::pixel::pixel::{Byte, Bytes, CHANNELS, Pixel};
    use crate::error::{QuantizeError, Result};

    /// A decoded image: `width * height` pixels in row-major order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PixelBuffer {
        /// The width of the image in pixels.
        pub width: u32,
        /// The height of the image in pixels.
        pub height: u32,
        pixels: Vec<Pixel>,
    }

    impl PixelBuffer {
        pub fn new(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self> {
            let expected = width as usize * height as usize;
            if pixels.len() != expected {
                return Err(QuantizeError::BufferSizeMismatch {
                    expected,
                    actual: pixels.len(),
                });
            }
            Ok(Self {
                width,
                height,
                pixels,
            })
        }

        /// Builds a buffer from interleaved RGBA8 bytes.
        pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[Byte]) -> Result<Self> {
            let expected = width as usize * height as usize * CHANNELS;
            if bytes.len() != expected {
                return Err(QuantizeError::BufferSizeMismatch {
                    expected,
                    actual: bytes.len(),
                });
            }
            let pixels = bytes
                .chunks_exact(CHANNELS)
                .map(|rgba| Pixel::new(rgba[0], rgba[1], rgba[2], rgba[3]))
                .collect();
            Self::new(width, height, pixels)
        }

        /// Flattens the buffer back into interleaved RGBA8 bytes.
        pub fn to_rgba_bytes(&self) -> Bytes {
            let mut bytes = Bytes::with_capacity(self.pixels.len() * CHANNELS);
            for pixel in &self.pixels {
                bytes.extend_from_slice(&<[Byte; CHANNELS]>::from(*pixel));
            }
            bytes
        }

        pub fn pixels(&self) -> &[Pixel] {
            &self.pixels
        }

        /// Mutable access to the samples. The slice cannot change length, so the
        /// geometry invariant holds.
        pub fn pixels_mut(&mut self) -> &mut [Pixel] {
            &mut self.pixels
        }

        pub fn len(&self) -> usize {
            self.pixels.len()
        }

        pub fn is_empty(&self) -> bool {
            self.pixels.is_empty()
        }

        pub fn visible_count(&self) -> usize {
            self.pixels.iter().filter(|p| p.is_visible()).count()
        }
    }
}
