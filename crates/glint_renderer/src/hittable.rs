//! Hittable trait and the closed set of scene shapes.

use crate::{Intersection, Material, Plane, Sphere, Triangle};
use glint_math::{Direction, Point, Ray};

/// Trait for geometry that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Distance along `ray` to the nearest valid hit.
    ///
    /// Only distances greater than `EPSILON` count. Returns `None` on a miss.
    fn intersect(&self, ray: &Ray) -> Option<f64>;

    /// Unit surface normal at a point on the surface.
    fn normal_at(&self, point: Point) -> Direction;

    /// Surface material.
    fn material(&self) -> &Material;

    fn material_mut(&mut self) -> &mut Material;
}

/// Any primitive that can be placed in a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Triangle(Triangle),
}

impl Shape {
    /// Intersect and build the full hit record.
    pub fn hit(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let t = self.intersect(ray)?;
        Some(Intersection::new(t, ray.at(t), self))
    }

    /// Replace the material.
    ///
    /// Intersections built before the change keep the old material.
    pub fn set_material(&mut self, material: Material) {
        *self.material_mut() = material;
    }

    /// Short name of the primitive kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "sphere",
            Shape::Plane(_) => "plane",
            Shape::Triangle(_) => "triangle",
        }
    }
}

impl Hittable for Shape {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            Shape::Sphere(s) => s.intersect(ray),
            Shape::Plane(p) => p.intersect(ray),
            Shape::Triangle(t) => t.intersect(ray),
        }
    }

    fn normal_at(&self, point: Point) -> Direction {
        match self {
            Shape::Sphere(s) => s.normal_at(point),
            Shape::Plane(p) => p.normal_at(point),
            Shape::Triangle(t) => t.normal_at(point),
        }
    }

    fn material(&self) -> &Material {
        match self {
            Shape::Sphere(s) => s.material(),
            Shape::Plane(p) => p.material(),
            Shape::Triangle(t) => t.material(),
        }
    }

    fn material_mut(&mut self) -> &mut Material {
        match self {
            Shape::Sphere(s) => s.material_mut(),
            Shape::Plane(p) => p.material_mut(),
            Shape::Triangle(t) => t.material_mut(),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(s: Sphere) -> Self {
        Shape::Sphere(s)
    }
}

impl From<Plane> for Shape {
    fn from(p: Plane) -> Self {
        Shape::Plane(p)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Shape::Triangle(t)
    }
}
