//! Sphere primitive.

use std::f64::consts::PI;

use lumen_math::{Ray, Vec3};

use crate::{Hit, Material, SceneError, Surface};

/// A sphere with a Phong material.
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a sphere. The radius must be strictly positive.
    pub fn new(center: Vec3, radius: f64, material: Material) -> Result<Self, SceneError> {
        if radius <= 0.0 {
            return Err(SceneError::InvalidRadius { radius });
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    /// Spherical UV for a unit outward normal.
    fn uv(normal: Vec3) -> (f64, f64) {
        let u = normal.x.atan2(normal.z) / (2.0 * PI) + 0.5;
        let v = 0.5 * normal.y + 0.5;
        (u, v)
    }
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let to_center = ray.origin - self.center;

        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * to_center.dot(ray.direction);
        let c = to_center.dot(to_center) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let near = (-b - sqrt_d) / (2.0 * a);
        let far = (-b + sqrt_d) / (2.0 * a);

        // Smaller non-negative root; a sphere entirely behind the ray
        // origin is not a hit.
        let t = if near >= 0.0 {
            near
        } else if far >= 0.0 {
            far
        } else {
            return None;
        };

        let point = ray.at(t);
        let normal = (point - self.center) / self.radius;
        let (u, v) = Self::uv(normal);

        Some(Hit {
            distance: t,
            point,
            normal: Some(normal),
            ambient: self.material.ambient.evaluate(u, v),
            diffuse: self.material.diffuse.evaluate(u, v),
            specular: self.material.specular.evaluate(u, v),
            shininess: self.material.shininess,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Color;

    fn test_sphere() -> Sphere {
        Sphere::new(
            Vec3::new(0.0, 0.0, 50.0),
            20.0,
            Material::from_color(Color::new(0.0, 1.0, 1.0)),
        )
        .unwrap()
    }

    #[test]
    fn test_hit_selects_nearer_root() {
        let sphere = test_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::Z).unwrap();

        // Roots at t = 31 and t = 71; the front face wins.
        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.distance - 31.0).abs() < 1e-9);
        assert!((hit.point - Vec3::new(0.0, 0.0, 30.0)).length() < 1e-9);
        assert!((hit.normal.unwrap() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-9);
    }

    #[test]
    fn test_miss() {
        let sphere = test_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::Y).unwrap();

        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin_is_no_hit() {
        let sphere = test_sphere();
        // Both roots are negative when looking away from the sphere.
        let ray = Ray::new(Vec3::new(0.0, 0.0, 100.0), Vec3::Z).unwrap();

        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_origin_inside_uses_far_root() {
        let sphere = test_sphere();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 50.0), Vec3::Z).unwrap();

        let hit = sphere.intersect(&ray).unwrap();
        assert!((hit.distance - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_uv_drives_image_sampling() {
        use std::sync::Arc;

        use crate::texture::TextureGrid;
        use crate::ImageSampler;

        // 3x3 grid with a distinct color per texel, row-major.
        let pixels = (0..9)
            .map(|i| Color::splat(i as f64 / 8.0))
            .collect::<Vec<_>>();
        let grid = Arc::new(TextureGrid::new(3, 3, pixels));
        let material = Material::from_sampler(Arc::new(ImageSampler::new(grid)));

        let sphere = Sphere::new(Vec3::ZERO, 1.0, material).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), -Vec3::Y).unwrap();
        let hit = sphere.intersect(&ray).unwrap();

        // Top pole: u = 0.5, v = 1 selects column 1, row 2.
        assert!((hit.normal.unwrap() - Vec3::Y).length() < 1e-9);
        assert_eq!(hit.diffuse, Color::splat(7.0 / 8.0));
    }

    #[test]
    fn test_zero_radius_is_rejected() {
        let result = Sphere::new(Vec3::ZERO, 0.0, Material::from_color(Color::ONE));
        assert!(matches!(result, Err(SceneError::InvalidRadius { .. })));
    }
}
