//! Render driver: the pixel loop and the sink it feeds.

use lumen_core::Scene;
use lumen_math::color_to_discrete;

use crate::camera::Camera;
use crate::shading::{shade, BACKGROUND};

/// Receives each finished pixel of a frame exactly once.
pub trait PixelSink {
    fn put_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]);

    /// Called once, after every pixel of the frame has been delivered.
    fn frame_complete(&mut self) {}
}

/// Render `scene` at `width` x `height` into `sink`.
///
/// Pixels are emitted in row-major raster order, deterministically for a
/// fixed scene. A pixel whose ray or shading math degenerates gets the
/// background color and a diagnostic; the frame always completes.
pub fn render(scene: &Scene, width: u32, height: u32, sink: &mut dyn PixelSink) {
    let camera = Camera::new(scene, width, height);

    for y in 0..height {
        for x in 0..width {
            let color = camera
                .primary_ray(x, y)
                .and_then(|ray| shade(scene, &ray))
                .unwrap_or_else(|err| {
                    log::warn!("pixel ({x}, {y}): {err}; writing background");
                    BACKGROUND
                });

            sink.put_pixel(x, y, color_to_discrete(color));
        }
    }

    sink.frame_complete();
}

/// In-memory pixel sink.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 3]>,
    complete: bool,
}

impl ImageBuffer {
    /// Create a black buffer of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0]; (width * height) as usize],
            complete: false,
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Whether the frame-complete signal has arrived.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Flatten to RGB bytes, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }
}

impl PixelSink for ImageBuffer {
    fn put_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.pixels[(y * self.width + x) as usize] = rgb;
    }

    fn frame_complete(&mut self) {
        self.complete = true;
    }
}
