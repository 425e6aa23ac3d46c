//! The synchronous Phong render core.
//!
//! Drives primary rays from the camera through the scene geometry,
//! resolves nearest hits and shadow occlusion, shades with the Phong
//! model, and writes discrete pixels to a sink.

mod camera;
mod renderer;
mod resolver;
mod shading;

pub use camera::Camera;
pub use renderer::{render, ImageBuffer, PixelSink};
pub use resolver::{in_shadow, nearest_hit};
pub use shading::{shade, BACKGROUND};
