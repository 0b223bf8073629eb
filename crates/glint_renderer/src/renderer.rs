//! Ray casting renderer.
//!
//! One primary ray per pixel through the pixel center, local illumination
//! at the nearest hit. Pixels are independent, so rows are rendered in
//! parallel with rayon unless the config asks for a serial render.

use std::time::Instant;

use rayon::prelude::*;

use crate::{Color, RenderError, RenderResult, Scene};
use glint_math::{Interval, Onb, Point, Ray};

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Render rows in parallel on the rayon thread pool
    pub parallel: bool,
    /// Color written when a primary ray hits nothing
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            background: Color::BLACK,
        }
    }
}

/// Convert a color to 8-bit RGB: clamp each channel to [0, 1], then round
/// `channel * 255` to the nearest integer.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let quantize = |c: f64| (Interval::UNIT.clamp(c) * 255.0).round() as u8;
    [quantize(color.r()), quantize(color.g()), quantize(color.b())]
}

/// Render output: a row-major grid of linear colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// 8-bit RGB value of the pixel at (x, y).
    pub fn rgb8_at(&self, x: u32, y: u32) -> [u8; 3] {
        color_to_rgb8(self.get(x, y))
    }

    /// Convert to packed RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}

/// Per-render state derived from the scene camera and image size.
pub struct Renderer<'a> {
    scene: &'a Scene,
    config: RenderConfig,
    eye: Point,
    basis: Onb,
    width: u32,
    height: u32,
    pixel_width: f64,
    pixel_height: f64,
}

impl<'a> Renderer<'a> {
    /// Validate the scene and precompute the viewing frame.
    ///
    /// Fails if the scene has no camera or a zero width or height.
    pub fn new(scene: &'a Scene, config: RenderConfig) -> RenderResult<Self> {
        let camera = scene.require_camera()?;
        let (width, height) = (scene.width, scene.height);
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }

        let basis = camera.basis();
        if basis.is_degenerate() {
            log::warn!(
                "Camera up hint {} is parallel to the view direction; the image will be undefined",
                camera.up
            );
        }

        let half_height = (camera.fov.to_radians() / 2.0).tan();
        let half_width = half_height * width as f64 / height as f64;

        Ok(Self {
            scene,
            config,
            eye: camera.eye(),
            basis,
            width,
            height,
            pixel_width: 2.0 * half_width / width as f64,
            pixel_height: 2.0 * half_height / height as f64,
        })
    }

    /// Primary ray through the center of pixel (i, j), origin top-left.
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        let x = (i as f64 + 0.5 - self.width as f64 / 2.0) * self.pixel_width;
        let y = (self.height as f64 / 2.0 - (j as f64 + 0.5)) * self.pixel_height;

        Ray::new(self.eye, self.basis.local(x, y, -1.0))
    }

    /// Color of pixel (i, j).
    pub fn pixel_color(&self, i: u32, j: u32) -> Color {
        let ray = self.primary_ray(i, j);
        match self.scene.nearest_intersection(&ray) {
            Some(hit) => self.scene.shade_from(&hit, self.eye),
            None => self.config.background,
        }
    }

    /// Render the full image.
    pub fn render(&self) -> ImageBuffer {
        let start = Instant::now();
        log::info!(
            "Rendering {}x{} ({} shapes, {} lights, {})",
            self.width,
            self.height,
            self.scene.shapes.len(),
            self.scene.lights.len(),
            if self.config.parallel { "parallel" } else { "serial" }
        );

        let mut image = ImageBuffer::new(self.width, self.height);
        let row_len = self.width as usize;

        let render_row = |(j, row): (usize, &mut [Color])| {
            for (i, pixel) in row.iter_mut().enumerate() {
                *pixel = self.pixel_color(i as u32, j as u32);
            }
        };

        if self.config.parallel {
            image
                .pixels
                .par_chunks_mut(row_len)
                .enumerate()
                .for_each(render_row);
        } else {
            image.pixels.chunks_mut(row_len).enumerate().for_each(render_row);
        }

        log::info!("Rendered in {:?}", start.elapsed());
        image
    }
}

/// Render a scene to an image buffer.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    Ok(Renderer::new(scene, config.clone())?.render())
}
