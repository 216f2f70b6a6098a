//! occlu renderer - CPU ambient occlusion ray caster
//!
//! Casts one primary ray per pixel against a flat list of surfaces and
//! estimates ambient light at each hit with a recursive, stratified
//! hemisphere integrator. The pass fills diffuse, normal, depth, ambient
//! and composite buffers, each of which is then edge-antialiased.

mod ambient;
mod camera;
mod error;
mod export;
mod fxaa;
mod hit;
mod image_buffer;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod surface;

pub use ambient::{ambient, cosine_hemisphere, distance_attenuation, orthonormal_basis};
pub use camera::Camera;
pub use error::{ConfigError, RenderError, RenderResult};
pub use export::{save_all, save_image, to_rgba8, ExportError, ExportResult};
pub use hit::HitRecord;
pub use image_buffer::ImageBuffer;
pub use plane::{ParametricPlane, Plane};
pub use renderer::{render, render_pixel, trace_primary, PixelSample, RenderConfig, RenderOutput};
pub use scene::{Scene, SceneHit, SurfaceId};
pub use sphere::Sphere;
pub use surface::{rgb, Color, Surface};

/// Re-export the math types from occlu_math
pub use occlu_math::{point, Interval, Ray, Vec4, Vec4Ext};

use rand::{Rng, RngCore};

/// Uniform f32 in [0, 1) from a type-erased generator.
#[inline]
pub(crate) fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}
