//! Light sources.

use glint_math::{Color, Direction, Point};

/// A light in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Infinitely distant light. `direction` is the way the light travels.
    Directional { direction: Direction, color: Color },
    /// Light emitted from a single position.
    Point { position: Point, color: Color },
}

impl Light {
    pub fn directional(direction: Direction, color: Color) -> Self {
        Light::Directional { direction, color }
    }

    pub fn point(position: Point, color: Color) -> Self {
        Light::Point { position, color }
    }

    pub fn color(&self) -> Color {
        match *self {
            Light::Directional { color, .. } | Light::Point { color, .. } => color,
        }
    }

    /// Unit direction from `point` toward the light.
    pub fn direction_from(&self, point: Point) -> Direction {
        match *self {
            Light::Directional { direction, .. } => (-direction).normalize(),
            Light::Point { position, .. } => (position - point).normalize(),
        }
    }

    /// How far a shadow ray from `point` has to travel to reach the light.
    ///
    /// Infinite for directional lights.
    pub fn distance_from(&self, point: Point) -> f64 {
        match *self {
            Light::Directional { .. } => f64::INFINITY,
            Light::Point { position, .. } => position.distance(point),
        }
    }
}
