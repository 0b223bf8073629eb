//! PNG output for rendered images.

use std::fs;
use std::path::Path;

use glint_renderer::ImageBuffer;
use image::{ImageFormat, Rgb, RgbImage};
use thiserror::Error;

/// Errors that can occur while writing images.
#[derive(Error, Debug)]
pub enum ImageIoError {
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ImageIoResult<T> = Result<T, ImageIoError>;

/// Quantize a rendered buffer into an 8-bit RGB image.
pub fn to_rgb_image(buffer: &ImageBuffer) -> RgbImage {
    RgbImage::from_fn(buffer.width, buffer.height, |x, y| Rgb(buffer.rgb8_at(x, y)))
}

/// Write a rendered buffer as PNG, creating the parent directory if needed.
pub fn save_png<P: AsRef<Path>>(buffer: &ImageBuffer, path: P) -> ImageIoResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    to_rgb_image(buffer).save_with_format(path, ImageFormat::Png)?;
    log::info!("Wrote {}x{} image to {}", buffer.width, buffer.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_renderer::Color;

    fn sample_buffer() -> ImageBuffer {
        let mut buffer = ImageBuffer::new(3, 2);
        buffer.set(0, 0, Color::new(0.4, 0.2, 0.1));
        buffer.set(2, 1, Color::new(2.0, -1.0, 0.5));
        buffer
    }

    #[test]
    fn test_to_rgb_image() {
        let image = to_rgb_image(&sample_buffer());
        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(0, 0), &Rgb([102, 51, 26]));
        assert_eq!(image.get_pixel(2, 1), &Rgb([255, 0, 128]));
        assert_eq!(image.get_pixel(1, 0), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_save_png_round_trip() {
        let dir = std::env::temp_dir().join(format!("glint_image_io_{}", std::process::id()));
        let path = dir.join("nested").join("out.png");

        save_png(&sample_buffer(), &path).expect("write png");
        let loaded = image::open(&path).expect("read png").to_rgb8();
        fs::remove_dir_all(&dir).ok();

        assert_eq!(loaded, to_rgb_image(&sample_buffer()));
    }
}
