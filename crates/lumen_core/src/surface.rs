//! The `Surface` capability and the hit record it produces.

use lumen_math::{Color, Ray, Vec3};

/// Record of where and how a ray met a surface.
#[derive(Clone, Debug)]
pub struct Hit {
    /// Euclidean distance from the ray origin. Never negative.
    pub distance: f64,
    /// World-space intersection point.
    pub point: Vec3,
    /// Unit surface normal. `None` for surfaces that do not compute one
    /// ([`crate::BoundingBox`]); those shade as flat color.
    pub normal: Option<Vec3>,
    /// Ambient term sampled at the hit's UV.
    pub ambient: Color,
    /// Diffuse term sampled at the hit's UV.
    pub diffuse: Color,
    /// Specular term sampled at the hit's UV.
    pub specular: Color,
    /// Specular exponent.
    pub shininess: f64,
}

/// Capability shared by every geometry kind: ray intersection.
pub trait Surface: Send + Sync {
    /// Nearest intersection of this surface with `ray`, or `None`.
    ///
    /// Distances are measured along the ray direction; [`Ray`] guarantees
    /// a unit direction, so they are Euclidean.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;
}
