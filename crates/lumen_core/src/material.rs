//! Phong material: per-term color samplers plus a specular exponent.

use std::sync::Arc;

use lumen_math::Color;

use crate::sampler::{ConstantSampler, Sampler};

/// Material for Phong shading.
///
/// The three terms are sampled independently at the hit's UV; cloning is
/// cheap because the samplers are shared.
#[derive(Clone)]
pub struct Material {
    pub ambient: Arc<dyn Sampler>,
    pub diffuse: Arc<dyn Sampler>,
    pub specular: Arc<dyn Sampler>,
    pub shininess: f64,
}

impl Material {
    pub fn new(
        diffuse: Arc<dyn Sampler>,
        specular: Arc<dyn Sampler>,
        ambient: Arc<dyn Sampler>,
        shininess: f64,
    ) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// The stock material: base color for diffuse and ambient, half-grey
    /// specular, shininess 50.
    pub fn from_color(color: Color) -> Self {
        Self {
            ambient: Arc::new(ConstantSampler(color)),
            diffuse: Arc::new(ConstantSampler(color)),
            specular: Arc::new(ConstantSampler(Color::splat(0.5))),
            shininess: 50.0,
        }
    }

    /// Same shape as [`Material::from_color`] with an image-backed
    /// diffuse and ambient term.
    pub fn from_sampler(sampler: Arc<dyn Sampler>) -> Self {
        Self {
            ambient: sampler.clone(),
            diffuse: sampler,
            specular: Arc::new(ConstantSampler(Color::splat(0.5))),
            shininess: 50.0,
        }
    }
}
