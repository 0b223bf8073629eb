//! Infinite plane primitive.

use crate::{hittable::Hittable, Material};
use glint_math::{Direction, Point, Ray, EPSILON};

/// An infinite plane through `point` with a constant unit `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    point: Point,
    normal: Direction,
    material: Material,
}

impl Plane {
    /// Create a plane. The normal is normalized here.
    pub fn new(point: Point, normal: Direction, material: Material) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            material,
        }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn normal(&self) -> Direction {
        self.normal
    }
}

/// Distance along `ray` to the plane through `point` with unit `normal`.
///
/// Shared with the triangle test. Rays parallel to the plane and hits at or
/// behind `EPSILON` are rejected.
pub(crate) fn ray_plane_distance(ray: &Ray, point: Point, normal: Direction) -> Option<f64> {
    let denom = ray.direction().dot(normal);
    if denom.abs() < EPSILON {
        return None;
    }

    let t = (point - ray.origin()).dot(normal) / denom;
    if t <= EPSILON {
        return None;
    }

    Some(t)
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        ray_plane_distance(ray, self.point, self.normal)
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
