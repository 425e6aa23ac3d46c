use crate::{MathError, Vec3};

/// A ray with a unit direction.
///
/// The direction is normalized exactly once, here. Intersection code and
/// the shadow resolver rely on that: every reported `t` is a Euclidean
/// distance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Result<Self, MathError> {
        let direction = crate::normalize(direction)?;
        Ok(Self { origin, direction })
    }

    /// Point along the ray at distance `t`.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 5.0)).unwrap();
        assert_eq!(ray.direction, Vec3::Z);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::X).unwrap();

        assert_eq!(ray.at(0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.0), Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_zero_direction_is_degenerate() {
        assert_eq!(
            Ray::new(Vec3::ZERO, Vec3::ZERO),
            Err(MathError::DegenerateGeometry)
        );
    }
}
