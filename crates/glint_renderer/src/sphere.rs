//! Sphere primitive for ray casting.

use crate::{hittable::Hittable, Material};
use glint_math::{Direction, Interval, Point, Ray, EPSILON};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Point,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        let oc = self.center - ray.origin();
        let a = ray.direction().dot(ray.direction());
        let h = ray.direction().dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let valid = Interval::new(EPSILON, f64::INFINITY);

        // Prefer the entry point; fall back to the exit point when the
        // origin is inside the sphere or on its surface.
        let near = (h - sqrtd) / a;
        if valid.surrounds(near) {
            return Some(near);
        }
        let far = (h + sqrtd) / a;
        if valid.surrounds(far) {
            return Some(far);
        }

        None
    }

    fn normal_at(&self, point: Point) -> Direction {
        (point - self.center).normalize()
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn material_mut(&mut self) -> &mut Material {
        &mut self.material
    }
}
