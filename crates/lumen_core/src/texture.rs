//! Texture decoding for image-backed samplers.
//!
//! This is the loader collaborator: it decodes an image file once into a
//! grid of colors. The render core only ever consumes the finished grid
//! and never touches the decoder.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use lumen_math::Color;
use thiserror::Error;

/// Errors that can occur during texture loading.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image decoding error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("texture has zero pixels: {0}")]
    Empty(String),
}

/// A decoded texture: a width x height grid of colors, row-major.
#[derive(Debug, Clone)]
pub struct TextureGrid {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl TextureGrid {
    /// Wrap already-decoded pixels.
    ///
    /// `pixels` is row-major and `width * height` long.
    pub fn new(width: usize, height: usize, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Texel at integer coordinates; out-of-range reads return black.
    pub fn texel(&self, x: usize, y: usize) -> Color {
        self.pixels
            .get(y * self.width + x)
            .copied()
            .unwrap_or(Color::ZERO)
    }
}

/// Decode an image file into a texture grid, channels scaled to [0, 1].
pub fn load_texture(path: impl AsRef<Path>) -> Result<TextureGrid, TextureError> {
    let path = path.as_ref();
    let rgb = image::open(path)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(TextureError::Empty(path.display().to_string()));
    }

    let pixels = rgb
        .pixels()
        .map(|p| {
            Color::new(
                p[0] as f64 / 255.0,
                p[1] as f64 / 255.0,
                p[2] as f64 / 255.0,
            )
        })
        .collect();

    Ok(TextureGrid::new(width as usize, height as usize, pixels))
}

/// Cache of decoded textures, keyed by path.
///
/// Each file is decoded at most once; later loads share the same grid.
pub struct TextureCache {
    textures: HashMap<String, Arc<TextureGrid>>,
}

impl TextureCache {
    /// Create a new empty texture cache.
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
        }
    }

    /// Load a texture from file, using the cache if available.
    pub fn load(&mut self, path: &str) -> Result<Arc<TextureGrid>, TextureError> {
        if let Some(texture) = self.textures.get(path) {
            return Ok(texture.clone());
        }

        let texture = Arc::new(load_texture(path)?);
        self.textures.insert(path.to_string(), texture.clone());

        log::debug!(
            "decoded texture {} ({}x{})",
            path,
            texture.width(),
            texture.height()
        );

        Ok(texture)
    }

    /// Get a cached texture without loading.
    pub fn get(&self, path: &str) -> Option<Arc<TextureGrid>> {
        self.textures.get(path).cloned()
    }

    /// Number of cached textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new()
    }
}
