//! Triangle primitive for ray casting.
//!
//! Intersects the supporting plane first, then runs an edge-function
//! inside test on the hit point. No barycentric coordinates are produced.

use crate::{hittable::Hittable, plane::ray_plane_distance, Material};
use glint_math::{Direction, Point, Ray};

/// A triangle primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Vertices, counter-clockwise when seen from the normal side
    a: Point,
    b: Point,
    c: Point,
    /// Pre-computed face normal (unit length, zero if degenerate)
    normal: Direction,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(a: Point, b: Point, c: Point, material: Material) -> Self {
        let normal = (b - a).cross(c - a).normalize();

        Self {
            a,
            b,
            c,
            normal,
            material,
        }
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// True if `p` (assumed on the supporting plane) lies inside the
    /// triangle or on its boundary.
    fn contains(&self, p: Point) -> bool {
        let edges = [(self.a, self.b), (self.b, self.c), (self.c, self.a)];
        edges
            .iter()
            .all(|&(from, to)| (to - from).cross(p - from).dot(self.normal) >= 0.0)
    }
}

impl Hittable for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let t = ray_plane_distance(ray, self.a, self.normal)?;

        if !self.contains(ray.at(t)) {
            return None;
        }

        Some(t)
    }

    fn normal_at(&self, _point: Point) -> Direction {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }
}
