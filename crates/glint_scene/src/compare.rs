//! Pixel-exact image comparison for render regression checks.

use std::path::Path;

use image::{Rgb, RgbImage};
use thiserror::Error;

/// Marker color for differing pixels in a diff image.
pub const DIFF_COLOR: Rgb<u8> = Rgb([255, 0, 255]);

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Image sizes differ: {a_width}x{a_height} vs {b_width}x{b_height}")]
    SizeMismatch {
        a_width: u32,
        a_height: u32,
        b_width: u32,
        b_height: u32,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type CompareResult<T> = Result<T, CompareError>;

/// Load any supported image file as 8-bit RGB.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> CompareResult<RgbImage> {
    Ok(image::open(path)?.to_rgb8())
}

fn check_sizes(a: &RgbImage, b: &RgbImage) -> CompareResult<()> {
    if a.dimensions() != b.dimensions() {
        return Err(CompareError::SizeMismatch {
            a_width: a.width(),
            a_height: a.height(),
            b_width: b.width(),
            b_height: b.height(),
        });
    }
    Ok(())
}

/// Number of pixels whose RGB values are not identical.
pub fn count_different_pixels(a: &RgbImage, b: &RgbImage) -> CompareResult<usize> {
    check_sizes(a, b)?;
    Ok(a.pixels().zip(b.pixels()).filter(|(pa, pb)| pa != pb).count())
}

/// Copy of `a` with every pixel that differs from `b` painted magenta.
pub fn diff_image(a: &RgbImage, b: &RgbImage) -> CompareResult<RgbImage> {
    check_sizes(a, b)?;
    Ok(RgbImage::from_fn(a.width(), a.height(), |x, y| {
        let pa = *a.get_pixel(x, y);
        if pa == *b.get_pixel(x, y) {
            pa
        } else {
            DIFF_COLOR
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32, value: u8) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([value, value, value]))
    }

    #[test]
    fn test_identical_images() {
        let a = gray(4, 4, 10);
        assert_eq!(count_different_pixels(&a, &a.clone()).expect("same size"), 0);
        assert_eq!(diff_image(&a, &a).expect("same size"), a);
    }

    #[test]
    fn test_differing_pixels() {
        let a = gray(4, 3, 10);
        let mut b = a.clone();
        b.put_pixel(1, 1, Rgb([10, 10, 11]));
        b.put_pixel(3, 2, Rgb([0, 0, 0]));

        assert_eq!(count_different_pixels(&a, &b).expect("same size"), 2);

        let diff = diff_image(&a, &b).expect("same size");
        assert_eq!(diff.get_pixel(1, 1), &DIFF_COLOR);
        assert_eq!(diff.get_pixel(3, 2), &DIFF_COLOR);
        assert_eq!(diff.get_pixel(0, 0), &Rgb([10, 10, 10]));
    }

    #[test]
    fn test_size_mismatch() {
        let result = count_different_pixels(&gray(4, 4, 0), &gray(4, 5, 0));
        assert!(matches!(
            result,
            Err(CompareError::SizeMismatch { b_height: 5, .. })
        ));
        assert!(diff_image(&gray(2, 2, 0), &gray(3, 2, 0)).is_err());
    }

    #[test]
    fn test_load_rgb() {
        let path = std::env::temp_dir().join(format!("glint_compare_{}.png", std::process::id()));
        let image = gray(2, 2, 200);
        image.save(&path).expect("write png");

        let loaded = load_rgb(&path).expect("read png");
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, image);
    }
}
