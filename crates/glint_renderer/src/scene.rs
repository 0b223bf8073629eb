//! Scene: camera, lights and shapes, with the nearest-hit query and the
//! local illumination model.

use crate::{Camera, Hittable, Intersection, Light, RenderError, RenderResult, Shape};
use glint_math::{Color, Interval, Point, Ray, SHADOW_EPSILON};

/// Default output file name when a scene does not set one.
pub const DEFAULT_OUTPUT: &str = "output.png";

/// A complete scene ready for rendering.
///
/// Built once, then only read while rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Output file name
    pub output: String,
    /// Camera (required at render time)
    pub camera: Option<Camera>,
    /// Ambient color added at every hit, unscaled by material
    pub ambient: Color,
    /// Lights, in declaration order
    pub lights: Vec<Light>,
    /// Shapes, in declaration order
    pub shapes: Vec<Shape>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            output: DEFAULT_OUTPUT.to_string(),
            camera: None,
            ambient: Color::BLACK,
            lights: Vec::new(),
            shapes: Vec::new(),
        }
    }
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the camera.
    pub fn with_camera(mut self, camera: Camera) -> Self {
        self.camera = Some(camera);
        self
    }

    /// Set the ambient color.
    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    /// Add a light.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Add a shape.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// The camera, or an error if none was set.
    pub fn require_camera(&self) -> RenderResult<&Camera> {
        self.camera.as_ref().ok_or(RenderError::MissingCamera)
    }

    /// Nearest intersection of `ray` with any shape.
    ///
    /// On exactly equal distances the shape declared first wins.
    pub fn nearest_intersection(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let mut closest: Option<(f64, &Shape)> = None;

        for shape in &self.shapes {
            let Some(t) = shape.intersect(ray) else {
                continue;
            };
            let closest_so_far = closest.map_or(f64::INFINITY, |(t, _)| t);
            if Interval::new(0.0, closest_so_far).surrounds(t) {
                closest = Some((t, shape));
            }
        }

        closest.map(|(t, shape)| Intersection::new(t, ray.at(t), shape))
    }

    /// True if something lies between the hit point and `light`.
    ///
    /// Occluders past a point light do not count.
    fn is_in_shadow(&self, hit: &Intersection<'_>, light: &Light) -> bool {
        let shadow_ray = Ray::new(hit.point, light.direction_from(hit.point));
        let window = Interval::new(0.0, light.distance_from(hit.point)).shrink(SHADOW_EPSILON);

        self.nearest_intersection(&shadow_ray)
            .is_some_and(|blocker| window.surrounds(blocker.t))
    }

    /// Final color at a hit, seen from the scene camera.
    pub fn shade(&self, hit: &Intersection<'_>) -> RenderResult<Color> {
        let camera = self.require_camera()?;
        Ok(self.shade_from(hit, camera.eye()))
    }

    /// Final color at a hit, seen from `eye`.
    ///
    /// Ambient, plus Lambert and Blinn-Phong terms for every light that is
    /// not blocked.
    pub fn shade_from(&self, hit: &Intersection<'_>, eye: Point) -> Color {
        let eye_dir = (eye - hit.point).normalize();
        let mut color = self.ambient;

        for light in &self.lights {
            if self.is_in_shadow(hit, light) {
                continue;
            }
            color += hit.lambert(light) + hit.phong(light, eye_dir);
        }

        color
    }
}
