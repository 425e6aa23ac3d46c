//! Color samplers: the mapping from texture coordinates to color.

use std::sync::Arc;

use lumen_math::Color;

use crate::texture::TextureGrid;

/// Maps 2D texture coordinates to a color.
pub trait Sampler: Send + Sync {
    /// Evaluate the sampler at (u, v), each nominally in [0, 1].
    fn evaluate(&self, u: f64, v: f64) -> Color;
}

/// A sampler that returns the same color everywhere.
#[derive(Debug, Clone, Copy)]
pub struct ConstantSampler(pub Color);

impl Sampler for ConstantSampler {
    fn evaluate(&self, _u: f64, _v: f64) -> Color {
        self.0
    }
}

/// Samples a decoded texture grid by rounded UV.
///
/// u selects the column and v the row, each independently. Indices are
/// clamped, so out-of-domain UV degrades to the border texel instead of
/// failing.
#[derive(Clone)]
pub struct ImageSampler {
    image: Arc<TextureGrid>,
}

impl ImageSampler {
    pub fn new(image: Arc<TextureGrid>) -> Self {
        Self { image }
    }
}

impl Sampler for ImageSampler {
    fn evaluate(&self, u: f64, v: f64) -> Color {
        if self.image.is_empty() {
            return Color::ZERO;
        }
        let x = round_index(u, self.image.width());
        let y = round_index(v, self.image.height());
        self.image.texel(x, y)
    }
}

/// Round a [0, 1] coordinate onto an axis of `len` texels, clamping.
fn round_index(coord: f64, len: usize) -> usize {
    let scaled = (coord * (len - 1) as f64).round();
    // Negative and NaN values saturate to 0 in the cast.
    (scaled as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner_grid() -> Arc<TextureGrid> {
        // Row-major 2x2: distinct color per corner.
        Arc::new(TextureGrid::new(
            2,
            2,
            vec![
                Color::new(1.0, 0.0, 0.0), // (0, 0)
                Color::new(0.0, 1.0, 0.0), // (1, 0)
                Color::new(0.0, 0.0, 1.0), // (0, 1)
                Color::new(1.0, 1.0, 0.0), // (1, 1)
            ],
        ))
    }

    #[test]
    fn test_constant_ignores_uv() {
        let sampler = ConstantSampler(Color::new(0.3, 0.6, 0.9));
        assert_eq!(sampler.evaluate(0.0, 0.0), sampler.evaluate(0.7, -4.0));
    }

    #[test]
    fn test_image_axes_are_independent() {
        let sampler = ImageSampler::new(corner_grid());

        // Swapping u and v must swap the sampled corner.
        assert_eq!(sampler.evaluate(0.0, 1.0), Color::new(0.0, 0.0, 1.0));
        assert_eq!(sampler.evaluate(1.0, 0.0), Color::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_image_rounds_to_nearest_texel() {
        let sampler = ImageSampler::new(corner_grid());

        assert_eq!(sampler.evaluate(0.49, 0.0), Color::new(1.0, 0.0, 0.0));
        assert_eq!(sampler.evaluate(0.51, 0.0), Color::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_image_clamps_out_of_domain_uv() {
        let sampler = ImageSampler::new(corner_grid());

        assert_eq!(sampler.evaluate(-3.0, -3.0), Color::new(1.0, 0.0, 0.0));
        assert_eq!(sampler.evaluate(7.0, 7.0), Color::new(1.0, 1.0, 0.0));
    }
}
