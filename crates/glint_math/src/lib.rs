// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod interval;
mod onb;
mod ray;
mod vector;

pub use interval::Interval;
pub use onb::Onb;
pub use ray::Ray;
pub use vector::{Color, Direction, Point};

/// Smallest distance accepted as a real intersection, and the threshold
/// below which a ray is considered parallel to a surface.
pub const EPSILON: f64 = 1e-6;

/// Margin applied at both ends of a shadow ray's occluder window.
pub const SHADOW_EPSILON: f64 = 1e-4;
