//! The ray-tracing core: camera ray generation, primitive
//! intersection in object-local space, and shading with direct
//! lighting, emission, shadow feelers and one-bounce mirror
//! reflection.
//!
//! This crate is a pure, synchronous computation over an immutable
//! [`Scene`] — no file I/O, no image encoding, no windowing. The
//! `raytrace-cli` crate in this workspace is the thing that turns a
//! rendered buffer into a PNG on disk.

pub mod camera;
pub mod color;
pub mod error;
pub mod intersect;
pub mod material;
pub mod matrix3;
pub mod primitive;
pub mod ray;
pub mod renderer;
pub mod scene;
pub mod shader;
pub mod transform;
pub mod vec3;

pub use camera::Camera;
pub use color::Colour;
pub use error::NumericError;
pub use material::{Material, MaterialKind};
pub use matrix3::Matrix3;
pub use primitive::{Primitive, PrimitiveKind};
pub use ray::{Ray, RayHit};
pub use renderer::Renderer;
pub use scene::{DirectedLight, Scene};
pub use shader::ray_cast;
pub use transform::Transform;
pub use vec3::Vec3;

/// Precision used throughout the math layer: the threshold below
/// which a vector/matrix-determinant is treated as zero, and the
/// minimum ray parameter `t` a hit must clear to avoid self-intersection.
pub const FLOAT_EPS: f64 = 1e-6;
