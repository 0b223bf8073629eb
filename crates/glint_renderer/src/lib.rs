//! Glint renderer - CPU ray casting with local illumination.
//!
//! One primary ray per pixel, nearest-hit search over a flat list of
//! spheres, planes and triangles, and shading with ambient, Lambert
//! diffuse and Blinn-Phong specular terms plus hard shadows.
//!
//! No recursion: reflection, refraction and anti-aliasing are out of scope.

mod camera;
mod error;
mod hittable;
mod intersection;
mod light;
mod material;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use hittable::{Hittable, Shape};
pub use intersection::Intersection;
pub use light::Light;
pub use material::Material;
pub use plane::Plane;
pub use renderer::{color_to_rgb8, render, ImageBuffer, RenderConfig, Renderer};
pub use scene::{Scene, DEFAULT_OUTPUT};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export the tuple types and common math from glint_math
pub use glint_math::{Color, Direction, Interval, Onb, Point, Ray, EPSILON, SHADOW_EPSILON};
