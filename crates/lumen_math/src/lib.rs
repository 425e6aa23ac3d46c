//! Math kernel for the lumen renderer.
//!
//! Re-exports glam's f64 vector type as [`Vec3`] and adds the [`Color`]
//! alias and [`Ray`] type shared by the scene and render crates.

pub use glam::DVec3;

/// 3D vector used throughout lumen.
///
/// f64 rather than f32: intersection distances and shading terms are
/// asserted to 1e-9 tolerances.
pub type Vec3 = DVec3;

mod color;
mod error;
mod ray;

pub use color::{color_to_discrete, Color};
pub use error::MathError;
pub use ray::Ray;

/// Normalize `v`, failing on a zero-length input instead of producing NaNs.
pub fn normalize(v: Vec3) -> Result<Vec3, MathError> {
    v.try_normalize().ok_or(MathError::DegenerateGeometry)
}
