//! Phong local illumination.

use lumen_core::Scene;
use lumen_math::{normalize, Color, MathError, Ray};

use crate::resolver::{in_shadow, nearest_hit};

/// Color written where a primary ray misses everything.
pub const BACKGROUND: Color = Color::ZERO;

/// Shade a primary ray: ambient plus per-light Lambertian diffuse and
/// Phong specular, with shadow occlusion.
///
/// The result stays unclamped; discretization is the sink's concern.
pub fn shade(scene: &Scene, ray: &Ray) -> Result<Color, MathError> {
    let Some((surface, hit)) = nearest_hit(scene, ray, None) else {
        return Ok(BACKGROUND);
    };

    // Surfaces without a normal (BoundingBox) fall back to flat color.
    let Some(normal) = hit.normal else {
        return Ok(hit.diffuse);
    };

    let ambient = hit.ambient * scene.ambient;

    let mut diffuse = Color::ZERO;
    let mut specular = Color::ZERO;

    for light in &scene.lights {
        let light_dir = normalize(light.location - hit.point)?;
        let alignment = normal.dot(light_dir);
        if alignment < 0.0 {
            continue;
        }
        if in_shadow(scene, hit.point, light, surface)? {
            continue;
        }

        diffuse += hit.diffuse * light.diffuse * alignment;

        let reflection = normal * (2.0 * normal.dot(light_dir)) - light_dir;
        let view = normalize(hit.point - scene.camera_origin)?;
        let spec_alignment = -view.dot(reflection);
        if spec_alignment < 0.0 {
            continue;
        }

        specular += hit.specular * light.specular * spec_alignment.powf(hit.shininess);
    }

    Ok(ambient + diffuse + specular)
}
