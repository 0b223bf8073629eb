//! Three-component tuples: positions, free vectors and colors.
//!
//! All three share the same storage (`DVec3`) and the same basic arithmetic,
//! but are kept as separate types so that only meaningful combinations
//! compile. Subtracting two points gives a direction, a point moved by a
//! direction is a point, and only directions have `dot` / `cross`.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use glam::DVec3;

use crate::EPSILON;

/// Shared tuple operations, generated for each semantic type.
macro_rules! tuple3 {
    ($name:ident) => {
        impl $name {
            /// All components zero.
            pub const ZERO: Self = Self(DVec3::ZERO);

            /// Create a new tuple from its components.
            #[inline]
            pub const fn new(x: f64, y: f64, z: f64) -> Self {
                Self(DVec3::new(x, y, z))
            }

            #[inline]
            pub fn x(&self) -> f64 {
                self.0.x
            }

            #[inline]
            pub fn y(&self) -> f64 {
                self.0.y
            }

            #[inline]
            pub fn z(&self) -> f64 {
                self.0.z
            }

            /// Underlying glam vector.
            #[inline]
            pub fn as_dvec3(&self) -> DVec3 {
                self.0
            }

            /// Multiply every component by `scalar`.
            #[inline]
            pub fn scale(&self, scalar: f64) -> Self {
                Self(self.0 * scalar)
            }

            /// Euclidean norm.
            #[inline]
            pub fn length(&self) -> f64 {
                self.0.length()
            }

            /// Unit-length copy of this tuple.
            ///
            /// A tuple of length exactly zero normalizes to the zero tuple.
            #[inline]
            pub fn normalize(&self) -> Self {
                let len = self.length();
                if len == 0.0 {
                    return Self::ZERO;
                }
                Self(self.0 / len)
            }

            /// Component-wise equality within `EPSILON`.
            pub fn approx_eq(&self, other: Self) -> bool {
                (self.0 - other.0).abs().max_element() < EPSILON
            }
        }

        impl From<DVec3> for $name {
            #[inline]
            fn from(v: DVec3) -> Self {
                Self(v)
            }
        }

        impl From<$name> for DVec3 {
            #[inline]
            fn from(v: $name) -> Self {
                v.0
            }
        }

        impl Mul<f64> for $name {
            type Output = Self;

            #[inline]
            fn mul(self, scalar: f64) -> Self {
                self.scale(scalar)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
            }
        }
    };
}

/// An absolute position in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(DVec3);

/// A free vector. Not necessarily unit length unless stated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Direction(DVec3);

/// Linear RGB radiance or reflectance.
///
/// Channels are nominally in [0, 1] but arithmetic is unclamped; clamping
/// happens only when the raster is quantized to 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color(DVec3);

tuple3!(Point);
tuple3!(Direction);
tuple3!(Color);

impl Point {
    /// Distance between two points.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        self.0.distance(other.0)
    }
}

impl Direction {
    pub const X: Self = Self(DVec3::X);
    pub const Y: Self = Self(DVec3::Y);
    pub const Z: Self = Self(DVec3::Z);

    #[inline]
    pub fn dot(&self, other: Direction) -> f64 {
        self.0.dot(other.0)
    }

    #[inline]
    pub fn cross(&self, other: Direction) -> Direction {
        Self(self.0.cross(other.0))
    }
}

impl Color {
    pub const BLACK: Self = Self::ZERO;
    pub const WHITE: Self = Self(DVec3::ONE);

    /// Component-wise (Schur) product, used to filter light by a material.
    #[inline]
    pub fn schur(&self, other: Color) -> Color {
        Self(self.0 * other.0)
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn g(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn b(&self) -> f64 {
        self.0.z
    }
}

// Point arithmetic

impl Sub for Point {
    type Output = Direction;

    #[inline]
    fn sub(self, rhs: Point) -> Direction {
        Direction(self.0 - rhs.0)
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Direction) -> Point {
        Point(self.0 + rhs.0)
    }
}

impl Sub<Direction> for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Direction) -> Point {
        Point(self.0 - rhs.0)
    }
}

// Direction arithmetic

impl Add for Direction {
    type Output = Direction;

    #[inline]
    fn add(self, rhs: Direction) -> Direction {
        Direction(self.0 + rhs.0)
    }
}

impl Sub for Direction {
    type Output = Direction;

    #[inline]
    fn sub(self, rhs: Direction) -> Direction {
        Direction(self.0 - rhs.0)
    }
}

impl Neg for Direction {
    type Output = Direction;

    #[inline]
    fn neg(self) -> Direction {
        Direction(-self.0)
    }
}

impl Mul<Direction> for f64 {
    type Output = Direction;

    #[inline]
    fn mul(self, rhs: Direction) -> Direction {
        rhs.scale(self)
    }
}

// Color arithmetic

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, rhs: Color) -> Color {
        Color(self.0 + rhs.0)
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, rhs: Color) {
        self.0 += rhs.0;
    }
}

impl Sub for Color {
    type Output = Color;

    #[inline]
    fn sub(self, rhs: Color) -> Color {
        Color(self.0 - rhs.0)
    }
}

impl Mul for Color {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: Color) -> Color {
        self.schur(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_difference_is_direction() {
        let a = Point::new(3.0, 2.0, 1.0);
        let b = Point::new(1.0, 1.0, 1.0);
        let d: Direction = a - b;
        assert_eq!(d, Direction::new(2.0, 1.0, 0.0));
        assert_eq!(b + d, a);
        assert_eq!(a - d, b);
    }

    #[test]
    fn test_direction_dot_and_cross() {
        let x = Direction::X;
        let y = Direction::Y;
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), Direction::Z);
        assert_eq!(y.cross(x), -Direction::Z);

        let a = Direction::new(1.0, 2.0, 3.0);
        let b = Direction::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(a.cross(b), Direction::new(-3.0, 6.0, -3.0));
    }

    #[test]
    fn test_normalize_unit_length() {
        let dirs = [
            Direction::new(3.0, 4.0, 0.0),
            Direction::new(-1.0, 2.0, -7.5),
            Direction::new(1e-3, 0.0, 1e-3),
            Direction::new(1e6, -1e6, 42.0),
        ];
        for d in dirs {
            assert!((d.normalize().length() - 1.0).abs() < 1e-6, "{d}");
        }
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Direction::ZERO.normalize(), Direction::ZERO);
        assert_eq!(Color::ZERO.normalize(), Color::ZERO);
    }

    #[test]
    fn test_length() {
        assert_eq!(Direction::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Point::new(0.0, 0.0, -2.0).length(), 2.0);
    }

    #[test]
    fn test_color_ops() {
        let light = Color::new(1.0, 0.5, 0.25);
        let albedo = Color::new(0.4, 0.2, 0.1);

        assert!(light.schur(albedo).approx_eq(Color::new(0.4, 0.1, 0.025)));
        assert_eq!(light * albedo, light.schur(albedo));
        assert!((light + albedo).approx_eq(Color::new(1.4, 0.7, 0.35)));
        assert!((light * 2.0).approx_eq(Color::new(2.0, 1.0, 0.5)));

        // unclamped
        let mut acc = Color::WHITE;
        acc += Color::WHITE;
        assert_eq!(acc, Color::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_approx_eq_tolerance() {
        let a = Point::new(1.0, 1.0, 1.0);
        assert!(a.approx_eq(Point::new(1.0 + 5e-7, 1.0, 1.0 - 5e-7)));
        assert!(!a.approx_eq(Point::new(1.0 + 1e-5, 1.0, 1.0)));
    }

    #[test]
    fn test_operations_do_not_alias() {
        let a = Direction::new(1.0, 0.0, 0.0);
        let b = a.scale(3.0);
        assert_eq!(a, Direction::X);
        assert_eq!(b, Direction::new(3.0, 0.0, 0.0));
    }
}
