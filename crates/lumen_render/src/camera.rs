//! Primary-ray generation.

use lumen_core::Scene;
use lumen_math::{MathError, Ray, Vec3};

/// Generates primary rays by bilinear interpolation over the scene's
/// image plane, for one render pass at a fixed raster size.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    top_left: Vec3,
    top_right: Vec3,
    bottom_left: Vec3,
    bottom_right: Vec3,
    origin: Vec3,
    width: u32,
    height: u32,
}

impl Camera {
    pub fn new(scene: &Scene, width: u32, height: u32) -> Self {
        let plane = scene.image_plane;
        Self {
            top_left: plane.top_left,
            top_right: plane.top_right,
            bottom_left: plane.bottom_left,
            bottom_right: plane.bottom_right,
            origin: scene.camera_origin,
            width,
            height,
        }
    }

    /// Primary ray for raster pixel (x, y).
    ///
    /// The ray originates on the image plane and points away from the
    /// camera origin; the direction is normalized once, in [`Ray::new`].
    pub fn primary_ray(&self, x: u32, y: u32) -> Result<Ray, MathError> {
        let alpha = x as f64 / self.width as f64;
        let beta = y as f64 / self.height as f64;

        let top = self.top_left.lerp(self.top_right, alpha);
        let bottom = self.bottom_left.lerp(self.bottom_right, alpha);
        let point = top.lerp(bottom, beta);

        Ray::new(point, point - self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::ImagePlane;
    use lumen_math::Color;

    fn demo_scene() -> Scene {
        Scene::new(
            ImagePlane {
                top_left: Vec3::new(1.0, 0.75, 0.0),
                top_right: Vec3::new(-1.0, 0.75, 0.0),
                bottom_left: Vec3::new(1.0, -0.75, 0.0),
                bottom_right: Vec3::new(-1.0, -0.75, 0.0),
            },
            Vec3::new(0.0, 0.0, -1.0),
            Color::splat(0.2),
            Vec::new(),
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_corner_pixel_starts_at_corner() {
        let camera = Camera::new(&demo_scene(), 256, 192);

        let ray = camera.primary_ray(0, 0).unwrap();
        assert_eq!(ray.origin, Vec3::new(1.0, 0.75, 0.0));

        let expected = lumen_math::normalize(Vec3::new(1.0, 0.75, 1.0)).unwrap();
        assert!((ray.direction - expected).length() < 1e-9);
    }

    #[test]
    fn test_center_ray_points_forward() {
        let camera = Camera::new(&demo_scene(), 256, 192);

        let ray = camera.primary_ray(128, 96).unwrap();
        assert!((ray.origin - Vec3::ZERO).length() < 1e-9);
        assert!((ray.direction - Vec3::Z).length() < 1e-9);
    }

    #[test]
    fn test_origin_on_image_plane_degenerates() {
        let mut scene = demo_scene();
        // Camera sitting exactly on the pixel (0, 0) sample point.
        scene.camera_origin = Vec3::new(1.0, 0.75, 0.0);

        let camera = Camera::new(&scene, 256, 192);
        assert_eq!(camera.primary_ray(0, 0), Err(MathError::DegenerateGeometry));
    }
}
