//! Nearest-hit and shadow queries over the scene's geometry list.

use lumen_core::{Hit, PointLight, Scene};
use lumen_math::{MathError, Ray, Vec3};

/// Nearest intersection along `ray`, scanning geometry in list order.
///
/// `exclude` skips one surface by index; shadow rays use it so a surface
/// cannot occlude itself. Returns the winning surface's index with its
/// hit, or `None` when nothing is hit.
pub fn nearest_hit(scene: &Scene, ray: &Ray, exclude: Option<usize>) -> Option<(usize, Hit)> {
    let mut closest: Option<(usize, Hit)> = None;

    for (index, surface) in scene.geometry.iter().enumerate() {
        if exclude == Some(index) {
            continue;
        }

        if let Some(hit) = surface.intersect(ray) {
            let nearer = closest
                .as_ref()
                .map_or(true, |(_, best)| hit.distance < best.distance);
            if nearer {
                closest = Some((index, hit));
            }
        }
    }

    closest
}

/// Whether `light` is occluded as seen from `point` on surface `exclude`.
///
/// Occluded means some other surface intersects the shadow ray strictly
/// between the point and the light's location.
pub fn in_shadow(
    scene: &Scene,
    point: Vec3,
    light: &PointLight,
    exclude: usize,
) -> Result<bool, MathError> {
    let to_light = light.location - point;
    let light_distance = to_light.length();
    let shadow_ray = Ray::new(point, to_light)?;

    Ok(nearest_hit(scene, &shadow_ray, Some(exclude))
        .is_some_and(|(_, hit)| hit.distance < light_distance))
}
