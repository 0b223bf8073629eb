//! Surface material for local illumination.

use glint_math::Color;

/// Material properties attached to a shape.
///
/// `Copy` so that an intersection can keep its own snapshot of the material
/// as it was when the hit was computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Diffuse reflectance used by the Lambert term
    pub diffuse: Color,
    /// Specular reflectance used by the Blinn-Phong term
    pub specular: Color,
    /// Blinn-Phong exponent. Zero or less disables the specular term.
    pub shininess: f64,
}

impl Material {
    /// Create a material with no specular highlight.
    pub fn new(diffuse: Color, specular: Color) -> Self {
        Self {
            diffuse,
            specular,
            shininess: 0.0,
        }
    }

    /// Set the Blinn-Phong exponent.
    pub fn with_shininess(mut self, shininess: f64) -> Self {
        self.shininess = shininess;
        self
    }

    /// A purely diffuse material.
    pub fn diffuse(diffuse: Color) -> Self {
        Self::new(diffuse, Color::BLACK)
    }

    /// True if this material produces a specular highlight.
    pub fn is_glossy(&self) -> bool {
        self.shininess > 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Color::BLACK, Color::BLACK)
    }
}
