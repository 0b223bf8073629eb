//! Camera viewing parameters.

use glint_math::{Direction, Onb, Point};

/// Pinhole camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position
    pub look_from: Point,
    /// Point the camera is aimed at
    pub look_at: Point,
    /// Up hint. Must not be parallel to the view direction.
    pub up: Direction,
    /// Vertical field of view in degrees
    pub fov: f64,
}

impl Camera {
    /// Create a new camera.
    pub fn new(look_from: Point, look_at: Point, up: Direction, fov: f64) -> Self {
        Self {
            look_from,
            look_at,
            up,
            fov,
        }
    }

    /// Eye position.
    #[inline]
    pub fn eye(&self) -> Point {
        self.look_from
    }

    /// Orthonormal viewing frame (u right, v up, w toward the viewer).
    pub fn basis(&self) -> Onb {
        Onb::look_at(self.look_from, self.look_at, self.up)
    }
}

impl Default for Camera {
    /// Eye at the origin looking down -z, y up, 90 degree field of view.
    fn default() -> Self {
        Self::new(Point::ZERO, Point::new(0.0, 0.0, -1.0), Direction::Y, 90.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_basis() {
        let camera = Camera::new(
            Point::new(0.0, 0.0, 5.0),
            Point::ZERO,
            Direction::Y,
            45.0,
        );

        let basis = camera.basis();
        assert!(basis.w.approx_eq(Direction::Z));
        assert!(basis.u.approx_eq(Direction::X));
        assert!(basis.v.approx_eq(Direction::Y));
        assert_eq!(camera.eye(), Point::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_camera_looking_along_x() {
        let camera = Camera::new(Point::ZERO, Point::new(1.0, 0.0, 0.0), Direction::Y, 60.0);
        let basis = camera.basis();

        // looking down +x, right is +z
        assert!(basis.w.approx_eq(-Direction::X));
        assert!(basis.u.approx_eq(Direction::Z));
        assert!(basis.v.approx_eq(Direction::Y));
    }

    #[test]
    fn test_default_camera() {
        let camera = Camera::default();
        assert_eq!(camera.fov, 90.0);
        assert!(!camera.basis().is_degenerate());
    }
}
