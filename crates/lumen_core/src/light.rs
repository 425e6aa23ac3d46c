use lumen_math::{Color, Vec3};

/// Point light with separate diffuse and specular colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub location: Vec3,
    pub diffuse: Color,
    pub specular: Color,
}

impl PointLight {
    pub fn new(location: Vec3, diffuse: Color, specular: Color) -> Self {
        Self {
            location,
            diffuse,
            specular,
        }
    }
}
