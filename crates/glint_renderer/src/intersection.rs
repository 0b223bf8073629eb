//! Hit record and the per-light shading terms evaluated on it.

use std::fmt;

use crate::{Hittable, Light, Material, Shape};
use glint_math::{Color, Direction, Point};

/// Record of a ray-shape intersection.
///
/// The material is copied out of the shape when the record is built, so a
/// later material change on the shape does not affect this record.
#[derive(Clone, Copy, PartialEq)]
pub struct Intersection<'a> {
    /// Distance along the ray
    pub t: f64,
    /// Point of intersection
    pub point: Point,
    /// Shape that was hit
    pub shape: &'a Shape,
    /// Unit surface normal at `point`
    pub normal: Direction,
    /// Material snapshot at hit time
    pub material: Material,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, point: Point, shape: &'a Shape) -> Self {
        Self {
            t,
            point,
            shape,
            normal: shape.normal_at(point),
            material: *shape.material(),
        }
    }

    pub fn diffuse(&self) -> Color {
        self.material.diffuse
    }

    pub fn specular(&self) -> Color {
        self.material.specular
    }

    pub fn shininess(&self) -> f64 {
        self.material.shininess
    }

    /// Lambert diffuse term for one light:
    /// `max(n·l, 0) * light ⊙ diffuse`.
    pub fn lambert(&self, light: &Light) -> Color {
        let to_light = light.direction_from(self.point);
        let n_dot_l = self.normal.dot(to_light);
        if n_dot_l <= 0.0 {
            return Color::BLACK;
        }

        light.color().schur(self.material.diffuse) * n_dot_l
    }

    /// Blinn-Phong specular term for one light, seen from `eye_dir`
    /// (unit direction from the hit point toward the viewer).
    pub fn phong(&self, light: &Light, eye_dir: Direction) -> Color {
        if self.material.shininess <= 0.0 {
            return Color::BLACK;
        }

        let to_light = light.direction_from(self.point);
        let half = (to_light + eye_dir).normalize();
        let n_dot_h = self.normal.dot(half);
        if n_dot_h <= 0.0 {
            return Color::BLACK;
        }

        let factor = n_dot_h.powf(self.material.shininess);
        light.color().schur(self.material.specular) * factor
    }
}

impl fmt::Debug for Intersection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("t", &self.t)
            .field("point", &self.point)
            .field("shape", &self.shape.kind())
            .field("normal", &self.normal)
            .finish()
    }
}
