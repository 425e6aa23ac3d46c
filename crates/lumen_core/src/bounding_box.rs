//! Axis-aligned box primitive.

use lumen_math::{Ray, Vec3};

use crate::{Hit, Material, Surface};

/// Axis-aligned box with a flat-color material.
///
/// The slab test accepts corners unordered per axis. No surface normal is
/// computed, so hits carry `normal: None` and shade as flat color rather
/// than Phong.
pub struct BoundingBox {
    vmin: Vec3,
    vmax: Vec3,
    material: Material,
}

impl BoundingBox {
    pub fn new(vmin: Vec3, vmax: Vec3, material: Material) -> Self {
        Self {
            vmin,
            vmax,
            material,
        }
    }

    /// Entry and exit distances for one axis slab, ordered.
    fn axis_slab(min: f64, max: f64, origin: f64, direction: f64) -> (f64, f64) {
        let t0 = (min - origin) / direction;
        let t1 = (max - origin) / direction;
        if t0 > t1 {
            (t1, t0)
        } else {
            (t0, t1)
        }
    }
}

impl Surface for BoundingBox {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let (mut tmin, mut tmax) =
            Self::axis_slab(self.vmin.x, self.vmax.x, ray.origin.x, ray.direction.x);

        let (tymin, tymax) =
            Self::axis_slab(self.vmin.y, self.vmax.y, ray.origin.y, ray.direction.y);
        if tmin > tymax || tymin > tmax {
            return None;
        }
        tmin = tmin.max(tymin);
        tmax = tmax.min(tymax);

        let (tzmin, tzmax) =
            Self::axis_slab(self.vmin.z, self.vmax.z, ray.origin.z, ray.direction.z);
        if tmin > tzmax || tzmin > tmax {
            return None;
        }
        tmin = tmin.max(tzmin);

        // Entry behind the origin (or origin inside the box) is no hit.
        if tmin < 0.0 {
            return None;
        }

        Some(Hit {
            distance: tmin,
            point: ray.at(tmin),
            normal: None,
            ambient: self.material.ambient.evaluate(0.0, 0.0),
            diffuse: self.material.diffuse.evaluate(0.0, 0.0),
            specular: self.material.specular.evaluate(0.0, 0.0),
            shininess: self.material.shininess,
        })
    }
}
