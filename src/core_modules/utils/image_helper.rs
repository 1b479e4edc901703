pub mod image_helper {
    use crate::core_modules::buffer::buffer::PixelBuffer;
    use crate::error::{QuantizeError, Result};
    use image::ImageEncoder;
    use image::codecs::png::PngEncoder;
    use std::fs::File;
    use std::io::{BufWriter, Write};
    use std::path::Path;

    /// Decodes any format the `image` crate understands into an RGBA8 buffer.
    pub fn load(path: impl AsRef<Path>) -> Result<PixelBuffer> {
        let path = path.as_ref();
        log::info!("decoding image {}", path.display());

        let decoded = image::open(path).map_err(|source| QuantizeError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();

        PixelBuffer::from_rgba_bytes(width, height, rgba.as_raw())
    }

    /// Writes the buffer as an RGBA8 PNG.
    pub fn save(path: impl AsRef<Path>, buffer: &PixelBuffer) -> Result<()> {
        let path = path.as_ref();
        log::info!("encoding image {}", path.display());

        let encode_error = |source: image::ImageError| QuantizeError::Encode {
            path: path.to_path_buf(),
            source,
        };

        let output = File::create(path).map_err(|e| encode_error(image::ImageError::IoError(e)))?;
        let mut writer = BufWriter::new(output);

        PngEncoder::new(&mut writer)
            .write_image(
                &buffer.to_rgba_bytes(),
                buffer.width,
                buffer.height,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(encode_error)?;

        // Errors from the implicit flush on drop are discarded.
        writer
            .flush()
            .map_err(|e| encode_error(image::ImageError::IoError(e)))?;

        Ok(())
    }
}
