//! Recursive Monte Carlo ambient occlusion.
//!
//! At a hit point the hemisphere above the normal is sampled with a
//! stratified, cosine-weighted `N x N` grid of directions. Each sample
//! ray either escapes (contributes nothing), runs into an emitter
//! (contributes its color), or runs into another surface and recurses
//! while bounces remain. Every contribution is damped by how far the
//! sample ray travelled.

use std::f32::consts::PI;

use crate::{gen_f32, Color, HitRecord, RenderConfig, Scene, SurfaceId};
use occlu_math::{point, Ray, Vec4, Vec4Ext};
use rand::RngCore;

/// Components below this magnitude make an axis usable as a basis helper.
const HELPER_AXIS_THRESHOLD: f32 = 0.6;

/// Estimate the ambient light arriving at `hit`.
///
/// `source` is the surface `hit` lies on; it is skipped by the sample
/// rays so they cannot re-hit their own origin. Emitters return their own
/// color without sampling. With `remaining_bounces == 0` only emitters seen
/// directly from the hemisphere contribute.
pub fn ambient(
    scene: &Scene,
    hit: &HitRecord,
    ray: &Ray,
    source: SurfaceId,
    remaining_bounces: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let source_surface = &scene[source];
    if source_surface.is_emissive() {
        return source_surface.color();
    }

    let normal = hit.normal;
    let origin = hit.point(ray) + normal * config.ambient_bias;
    let (tangent, bitangent) = orthonormal_basis(normal);

    let n = config.ambient_samples;
    let cell = 1.0 / n as f32;
    let mut total = Color::ZERO;

    for i in 0..n {
        for j in 0..n {
            let u1 = (i as f32 + gen_f32(rng)) * cell;
            let u2 = (j as f32 + gen_f32(rng)) * cell;
            let local = cosine_hemisphere(u1, u2);
            let direction =
                (tangent * local.x + bitangent * local.y + normal * local.z).normalize_or_zero();
            let sample_ray = Ray::new(origin, direction);

            let Some(sample) = scene.nearest_hit(&sample_ray, Some(source)) else {
                continue;
            };

            let weight = distance_attenuation(sample.record.t, config.ambient_distance);
            if weight <= 0.0 {
                continue;
            }

            if remaining_bounces > 0 {
                let incoming = ambient(
                    scene,
                    &sample.record,
                    &sample_ray,
                    sample.id,
                    remaining_bounces - 1,
                    config,
                    rng,
                );
                total += incoming * weight;
            } else if sample.surface.is_emissive() {
                total += sample.surface.color() * weight;
            }
        }
    }

    total / (n * n) as f32
}

/// Distance falloff `max(1 - sqrt(distance / normalization), 0)`.
#[inline]
pub fn distance_attenuation(distance: f32, normalization: f32) -> f32 {
    (1.0 - (distance / normalization).sqrt()).max(0.0)
}

/// Two unit tangents completing `normal` to an orthonormal frame.
///
/// A helper axis is picked among X, Y, Z as the first one the normal is
/// not nearly parallel to. For a unit normal at least one component is
/// always below the threshold.
pub fn orthonormal_basis(normal: Vec4) -> (Vec4, Vec4) {
    let helper = if normal.x.abs() < HELPER_AXIS_THRESHOLD {
        point(1.0, 0.0, 0.0)
    } else if normal.y.abs() < HELPER_AXIS_THRESHOLD {
        point(0.0, 1.0, 0.0)
    } else {
        point(0.0, 0.0, 1.0)
    };

    let tangent = helper.cross3(normal).normalize_or_zero();
    let bitangent = tangent.cross3(normal).normalize_or_zero();
    (tangent, bitangent)
}

/// Cosine-weighted direction in the local frame, `z` along the normal.
///
/// `u1` and `u2` are uniform in `[0, 1)`.
#[inline]
pub fn cosine_hemisphere(u1: f32, u2: f32) -> Vec4 {
    let r = u1.sqrt();
    let phi = 2.0 * PI * u2;
    let (sin_phi, cos_phi) = phi.sin_cos();
    point(cos_phi * r, sin_phi * r, (1.0 - r * r).max(0.0).sqrt())
}
