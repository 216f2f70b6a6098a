//! Primary visibility pass and render driver.
//!
//! One ray per pixel is cast through a pinhole camera. Each hit writes
//! its base color, normal, depth and ambient term into separate buffers;
//! misses leave the zero background. Rows are rendered in parallel with
//! rayon, each row owning its own seeded RNG.

use std::time::Instant;

use crate::{
    ambient, Camera, Color, ConfigError, ImageBuffer, RenderError, RenderResult, Scene, SceneHit,
};
use occlu_math::{Interval, Vec4};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Horizontal field of view in degrees
    pub hfov_degrees: f32,
    /// Ambient samples per hemisphere axis (N for an N x N grid)
    pub ambient_samples: u32,
    /// Ambient bounces after the primary hit
    pub ambient_depth: u32,
    /// Distance normalization of the ambient falloff
    pub ambient_distance: f32,
    /// Offset along the normal for sample ray origins
    pub ambient_bias: f32,
    /// Ray distance mapped to white in the depth buffer
    pub depth_range: f32,
    /// Base seed for the per-row generators
    pub seed: u64,
    /// Run FXAA over every buffer after the pass
    pub fxaa: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 540,
            hfov_degrees: 90.0,
            ambient_samples: 8,
            ambient_depth: 1,
            ambient_distance: 16.0,
            ambient_bias: 1e-3,
            depth_range: 32.0,
            seed: 0,
            fxaa: true,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the horizontal field of view in degrees.
    pub fn with_fov(mut self, hfov_degrees: f32) -> Self {
        self.hfov_degrees = hfov_degrees;
        self
    }

    /// Set ambient quality settings.
    pub fn with_ambient(mut self, samples: u32, depth: u32) -> Self {
        self.ambient_samples = samples;
        self.ambient_depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_fxaa(mut self, fxaa: bool) -> Self {
        self.fxaa = fxaa;
        self
    }

    /// Reject settings a render cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.ambient_samples == 0 {
            return Err(ConfigError::ZeroAmbientSamples);
        }
        if !(self.hfov_degrees > 0.0 && self.hfov_degrees < 180.0) {
            return Err(ConfigError::FieldOfView(self.hfov_degrees));
        }
        if !(self.ambient_distance > 0.0) {
            return Err(ConfigError::AmbientDistance(self.ambient_distance));
        }
        if !(self.depth_range > 0.0) {
            return Err(ConfigError::DepthRange(self.depth_range));
        }
        Ok(())
    }

    /// Camera matching this configuration.
    pub fn camera(&self) -> Camera {
        Camera::new(self.width, self.height, self.hfov_degrees)
    }
}

/// Everything the pass writes for one pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PixelSample {
    pub diffuse: Color,
    pub normal: Color,
    pub depth: Color,
    pub ao: Color,
    pub composite: Color,
}

/// The buffers produced by a render.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// Flat surface color
    pub diffuse: ImageBuffer,
    /// World-space normal remapped to [0, 1]
    pub normal: ImageBuffer,
    /// Hit distance over the depth range, as grey
    pub depth: ImageBuffer,
    /// Ambient term
    pub ao: ImageBuffer,
    /// Diffuse times ambient
    pub composite: ImageBuffer,
}

impl RenderOutput {
    /// Allocate zeroed buffers.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        Ok(Self {
            diffuse: ImageBuffer::new(width, height)?,
            normal: ImageBuffer::new(width, height)?,
            depth: ImageBuffer::new(width, height)?,
            ao: ImageBuffer::new(width, height)?,
            composite: ImageBuffer::new(width, height)?,
        })
    }

    /// Buffers paired with their names, in a fixed order.
    pub fn buffers(&self) -> [(&'static str, &ImageBuffer); 5] {
        [
            ("diffuse", &self.diffuse),
            ("normal", &self.normal),
            ("depth", &self.depth),
            ("ao", &self.ao),
            ("composite", &self.composite),
        ]
    }

    fn buffers_mut(&mut self) -> [(&'static str, &mut ImageBuffer); 5] {
        [
            ("diffuse", &mut self.diffuse),
            ("normal", &mut self.normal),
            ("depth", &mut self.depth),
            ("ao", &mut self.ao),
            ("composite", &mut self.composite),
        ]
    }

    /// Run FXAA over every buffer independently.
    pub fn apply_fxaa(&mut self) {
        let start = Instant::now();
        for (name, buffer) in self.buffers_mut() {
            let blended = buffer.fxaa();
            log::debug!("FXAA on {} buffer touched {} pixels", name, blended);
        }
        log::info!("FXAA pass finished in {:?}", start.elapsed());
    }

    /// Collect the per-pixel results of the pass into buffers.
    fn scatter(&mut self, samples: &[PixelSample]) {
        for (i, s) in samples.iter().enumerate() {
            self.diffuse.pixels[i] = s.diffuse;
            self.normal.pixels[i] = s.normal;
            self.depth.pixels[i] = s.depth;
            self.ao.pixels[i] = s.ao;
            self.composite.pixels[i] = s.composite;
        }
    }
}

#[inline]
fn opaque(color: Color) -> Color {
    color.truncate().extend(1.0)
}

/// Nearest surface seen through pixel `(x, y)`.
pub fn trace_primary<'a>(scene: &'a Scene, camera: &Camera, x: u32, y: u32) -> Option<SceneHit<'a>> {
    let ray = camera.get_ray(x, y);
    scene.nearest_hit(&ray, None)
}

/// Shade a single pixel.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> PixelSample {
    let ray = camera.get_ray(x, y);
    let Some(hit) = scene.nearest_hit(&ray, None) else {
        return PixelSample::default();
    };

    let diffuse = hit.surface.color();
    let normal = opaque((hit.record.normal + Vec4::ONE) * 0.5);
    let d = Interval::UNIT.clamp(hit.record.t / config.depth_range);
    let depth = Color::new(d, d, d, 1.0);
    let ao = opaque(ambient(
        scene,
        &hit.record,
        &ray,
        hit.id,
        config.ambient_depth,
        config,
        rng,
    ));
    let composite = opaque(diffuse * ao);

    PixelSample {
        diffuse,
        normal,
        depth,
        ao,
        composite,
    }
}

/// Seed for the generator of row `y`.
#[inline]
fn row_seed(seed: u64, y: usize) -> u64 {
    seed ^ (y as u64).wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Render the scene into a fresh set of buffers.
///
/// The configuration is validated before any work starts. Rows run in
/// parallel; FXAA, when enabled, runs only after every row is finished.
pub fn render(scene: &Scene, config: &RenderConfig) -> RenderResult<RenderOutput> {
    config.validate()?;

    if scene.is_empty() {
        log::warn!("Rendering an empty scene; every buffer will be background");
    } else if scene.emitter_count() == 0 {
        log::warn!("Scene has no emissive planes; ambient and composite will be black");
    }

    let camera = config.camera();
    let width = config.width as usize;
    let mut output = RenderOutput::new(config.width, config.height)?;

    let mut samples: Vec<PixelSample> = Vec::new();
    samples
        .try_reserve_exact(width * config.height as usize)
        .map_err(|_| RenderError::Allocation {
            width: config.width,
            height: config.height,
        })?;
    samples.resize(width * config.height as usize, PixelSample::default());

    log::info!(
        "Rendering {}x{} with {} surfaces, {}x{} ambient samples, depth {}",
        config.width,
        config.height,
        scene.len(),
        config.ambient_samples,
        config.ambient_samples,
        config.ambient_depth
    );

    let start = Instant::now();
    samples
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let mut rng = StdRng::seed_from_u64(row_seed(config.seed, y));
            for (x, sample) in row.iter_mut().enumerate() {
                *sample = render_pixel(scene, &camera, x as u32, y as u32, config, &mut rng);
            }
        });
    log::info!("Visibility pass finished in {:?}", start.elapsed());

    output.scatter(&samples);

    if config.fxaa {
        output.apply_fxaa();
    }

    Ok(output)
}
