//! Scene data for the lumen renderer.
//!
//! This crate provides:
//!
//! - **Materials**: [`Sampler`] (constant or image-backed), [`Material`],
//!   and the texture-loading collaborator in [`texture`]
//! - **Geometry**: the [`Surface`] capability with [`Sphere`], [`Plane`],
//!   [`BoundingBox`], and the [`Triangle`] stub
//! - **The scene aggregate**: [`Scene`], validated once at construction
//!   and immutable for the whole render pass

mod bounding_box;
mod light;
mod material;
mod plane;
mod sampler;
mod scene;
mod sphere;
mod surface;
pub mod texture;
mod triangle;

pub use bounding_box::BoundingBox;
pub use light::PointLight;
pub use material::Material;
pub use plane::{MaterialFn, Plane};
pub use sampler::{ConstantSampler, ImageSampler, Sampler};
pub use scene::{ImagePlane, Scene, SceneError};
pub use sphere::Sphere;
pub use surface::{Hit, Surface};
pub use texture::{TextureCache, TextureError, TextureGrid};
pub use triangle::Triangle;
