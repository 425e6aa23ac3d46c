//! Infinite one-sided plane with a position-dependent material.

use lumen_math::{Color, Ray, Vec3};

use crate::{Hit, Material, SceneError, Surface};

/// Rays closer to parallel than this do not hit the plane.
const PARALLEL_EPSILON: f64 = 1e-6;

/// Shading policy: material as a function of the hit position.
pub type MaterialFn = dyn Fn(Vec3) -> Material + Send + Sync;

/// An infinite one-sided plane.
///
/// The material is supplied as a position function so demo policies like
/// the checkerboard stay out of the intersection routine.
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material_fn: Box<MaterialFn>,
}

impl Plane {
    /// Create a plane through `point` with outward normal `normal`
    /// (normalized here) and a position-to-material shading policy.
    pub fn new(
        point: Vec3,
        normal: Vec3,
        material_fn: Box<MaterialFn>,
    ) -> Result<Self, SceneError> {
        let normal = lumen_math::normalize(normal)?;
        Ok(Self {
            point,
            normal,
            material_fn,
        })
    }

    /// Plane with the same material everywhere.
    pub fn uniform(point: Vec3, normal: Vec3, material: Material) -> Result<Self, SceneError> {
        Self::new(point, normal, Box::new(move |_| material.clone()))
    }

    /// Ten-unit checkerboard: white and black cells selected by the
    /// parity of floor(x/10) + floor(z/10) at the hit position.
    pub fn checkerboard(point: Vec3, normal: Vec3) -> Result<Self, SceneError> {
        let white = Material::from_color(Color::ONE);
        let black = Material::from_color(Color::ZERO);

        Self::new(
            point,
            normal,
            Box::new(move |p: Vec3| {
                let cell = (p.x / 10.0).floor() as i64 + (p.z / 10.0).floor() as i64;
                if cell.rem_euclid(2) == 1 {
                    white.clone()
                } else {
                    black.clone()
                }
            }),
        )
    }
}

impl Surface for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        // One-sided: the ray has to run against the outward normal.
        let facing = -self.normal;
        let denom = facing.dot(ray.direction);
        if denom <= PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin).dot(facing) / denom;
        if t < 0.0 {
            return None;
        }

        let point = ray.at(t);
        let material = (self.material_fn)(point);

        // Positional materials carry constant samplers; the UV is nominal.
        Some(Hit {
            distance: t,
            point,
            normal: Some(self.normal),
            ambient: material.ambient.evaluate(0.0, 0.0),
            diffuse: material.diffuse.evaluate(0.0, 0.0),
            specular: material.specular.evaluate(0.0, 0.0),
            shininess: material.shininess,
        })
    }
}
