//! Orthonormal basis for camera-space ray construction.

use crate::{Direction, Point};

/// A right-handed (u, v, w) frame.
///
/// For a camera, `w` points from the look-at target back toward the eye,
/// `u` to the right and `v` up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Onb {
    pub u: Direction,
    pub v: Direction,
    pub w: Direction,
}

impl Onb {
    /// Build the viewing frame for an eye looking at `target`.
    ///
    /// `up` must not be parallel to `eye - target`. That case is not
    /// guarded: `u` and `v` come out as zero vectors. Use
    /// [`Onb::is_degenerate`] to detect it.
    pub fn look_at(eye: Point, target: Point, up: Direction) -> Self {
        let w = (eye - target).normalize();
        let u = up.cross(w).normalize();
        let v = w.cross(u);
        Self { u, v, w }
    }

    /// Map camera-space coordinates to a world-space direction.
    #[inline]
    pub fn local(&self, x: f64, y: f64, z: f64) -> Direction {
        x * self.u + y * self.v + z * self.w
    }

    /// True when one of the axes collapsed to zero.
    pub fn is_degenerate(&self) -> bool {
        self.u.length() == 0.0 || self.v.length() == 0.0 || self.w.length() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_frame() {
        let onb = Onb::look_at(Point::ZERO, Point::new(0.0, 0.0, -1.0), Direction::Y);

        assert!(onb.u.approx_eq(Direction::X));
        assert!(onb.v.approx_eq(Direction::Y));
        assert!(onb.w.approx_eq(Direction::Z));
        assert!(!onb.is_degenerate());
    }

    #[test]
    fn test_frame_is_orthonormal_and_right_handed() {
        let onb = Onb::look_at(
            Point::new(3.0, 2.0, 5.0),
            Point::new(-1.0, 0.5, 0.0),
            Direction::new(0.2, 1.0, 0.1),
        );

        for axis in [onb.u, onb.v, onb.w] {
            assert!((axis.length() - 1.0).abs() < 1e-6);
        }
        assert!(onb.u.dot(onb.v).abs() < 1e-6);
        assert!(onb.v.dot(onb.w).abs() < 1e-6);
        assert!(onb.w.dot(onb.u).abs() < 1e-6);
        assert!(onb.u.cross(onb.v).approx_eq(onb.w));

        // w points back toward the eye
        let back = (Point::new(3.0, 2.0, 5.0) - Point::new(-1.0, 0.5, 0.0)).normalize();
        assert!(onb.w.approx_eq(back));
    }

    #[test]
    fn test_up_parallel_to_view_is_degenerate() {
        let onb = Onb::look_at(Point::ZERO, Point::new(0.0, -1.0, 0.0), Direction::Y);
        assert!(onb.is_degenerate());
        assert_eq!(onb.u, Direction::ZERO);
    }

    #[test]
    fn test_local() {
        let onb = Onb::look_at(Point::ZERO, Point::new(0.0, 0.0, -1.0), Direction::Y);
        let d = onb.local(0.5, -0.25, -1.0);
        assert!(d.approx_eq(Direction::new(0.5, -0.25, -1.0)));
    }
}
