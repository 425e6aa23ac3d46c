//! The immutable scene aggregate.

use std::sync::Arc;

use lumen_math::{Color, MathError, Vec3};
use thiserror::Error;

use crate::{PointLight, Surface};

/// Errors raised when scene data is validated.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("sphere radius must be positive, got {radius}")]
    InvalidRadius { radius: f64 },

    #[error("image plane corners are degenerate")]
    DegenerateImagePlane,

    #[error(transparent)]
    Math(#[from] MathError),
}

/// The four corners of the virtual image plane.
///
/// Primary rays are generated by bilinear interpolation across these, in
/// raster orientation: `top_left` is pixel (0, 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePlane {
    pub top_left: Vec3,
    pub top_right: Vec3,
    pub bottom_left: Vec3,
    pub bottom_right: Vec3,
}

/// Scene consumed by the renderer.
///
/// Built once by a scene-construction collaborator, validated here, and
/// read-only for the whole render pass.
pub struct Scene {
    pub image_plane: ImagePlane,
    pub camera_origin: Vec3,
    pub ambient: Color,
    /// Lights, evaluated in order.
    pub lights: Vec<PointLight>,
    /// Geometry, scanned in order by the intersection resolver. May be
    /// empty; everything then renders as background.
    pub geometry: Vec<Arc<dyn Surface>>,
}

impl Scene {
    /// Validate and accept scene data.
    ///
    /// Geometry invariants (positive radii, unit plane normals) are
    /// enforced by the surface constructors; the image plane is checked
    /// here. Validation happens once per scene, never per pixel.
    pub fn new(
        image_plane: ImagePlane,
        camera_origin: Vec3,
        ambient: Color,
        lights: Vec<PointLight>,
        geometry: Vec<Arc<dyn Surface>>,
    ) -> Result<Self, SceneError> {
        let p = &image_plane;
        if p.top_left == p.top_right || p.bottom_left == p.bottom_right || p.top_left == p.bottom_left
        {
            return Err(SceneError::DegenerateImagePlane);
        }

        Ok(Self {
            image_plane,
            camera_origin,
            ambient,
            lights,
            geometry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_plane() -> ImagePlane {
        ImagePlane {
            top_left: Vec3::new(1.0, 0.75, 0.0),
            top_right: Vec3::new(-1.0, 0.75, 0.0),
            bottom_left: Vec3::new(1.0, -0.75, 0.0),
            bottom_right: Vec3::new(-1.0, -0.75, 0.0),
        }
    }

    #[test]
    fn test_empty_geometry_is_valid() {
        let scene = Scene::new(
            demo_plane(),
            Vec3::new(0.0, 0.0, -1.0),
            Color::splat(0.2),
            Vec::new(),
            Vec::new(),
        );

        assert!(scene.is_ok());
    }

    #[test]
    fn test_coincident_corners_are_rejected() {
        let mut plane = demo_plane();
        plane.top_right = plane.top_left;

        let scene = Scene::new(
            plane,
            Vec3::new(0.0, 0.0, -1.0),
            Color::splat(0.2),
            Vec::new(),
            Vec::new(),
        );

        assert!(matches!(scene, Err(SceneError::DegenerateImagePlane)));
    }
}
