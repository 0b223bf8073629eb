//! Ray type for ray casting.
//!
//! A ray is defined by an origin point and a unit direction.

use crate::{Direction, Point};

/// A ray with origin and normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray
    origin: Point,
    /// Direction vector (always unit length, or zero for a degenerate input)
    direction: Direction,
}

impl Ray {
    /// Create a new ray. The direction is normalized here.
    #[inline]
    pub fn new(origin: Point, direction: Direction) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Get the ray's unit direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Compute a point along the ray at distance t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Point {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Point::ZERO, Direction::new(0.0, 0.0, -5.0));
        assert_eq!(ray.direction(), Direction::new(0.0, 0.0, -1.0));

        let ray = Ray::new(Point::ZERO, Direction::new(1.0, 2.0, 3.0));
        assert!((ray.direction().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point::new(1.0, 2.0, 3.0), Direction::new(2.0, 0.0, 0.0));

        assert_eq!(ray.at(0.0), Point::new(1.0, 2.0, 3.0));
        assert_eq!(ray.at(1.0), Point::new(2.0, 2.0, 3.0));
        assert_eq!(ray.at(2.5), Point::new(3.5, 2.0, 3.0));
        assert_eq!(ray.at(-1.0), Point::new(0.0, 2.0, 3.0));
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(Point::ZERO, Direction::Y);
        let ray2 = ray1; // Copy, not move

        assert_eq!(ray1.origin(), ray2.origin());
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }
}
