//! Triangle primitive. Interface only.

use lumen_math::{Ray, Vec3};

use crate::{Hit, Material, Surface};

/// A single triangle.
///
/// The type exists so mesh geometry can slot into the `Surface` list
/// later; intersection is not implemented and always reports no hit.
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
    pub material: Material,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3, material: Material) -> Self {
        Self { a, b, c, material }
    }
}

impl Surface for Triangle {
    // TODO: Moller-Trumbore intersection once mesh import lands.
    fn intersect(&self, _ray: &Ray) -> Option<Hit> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Color;

    #[test]
    fn test_triangle_never_hits() {
        let triangle = Triangle::new(
            Vec3::new(-1.0, -1.0, 5.0),
            Vec3::new(1.0, -1.0, 5.0),
            Vec3::new(0.0, 1.0, 5.0),
            Material::from_color(Color::ONE),
        );
        let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();

        assert!(triangle.intersect(&ray).is_none());
    }
}
