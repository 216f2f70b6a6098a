//! FXAA-style edge antialiasing for image buffers.
//!
//! A console-style FXAA: luma is read at the four diagonal half-pixel
//! corners, pixels with enough local contrast are blended along the
//! edge direction estimated from the diagonal gradients.

use crate::{Color, ImageBuffer};
use occlu_math::{Interval, Vec2, Vec4};
use rayon::prelude::*;

/// Perceptual luma weights (Rec. 601).
const LUMA: Vec4 = Vec4::new(0.299, 0.587, 0.114, 0.0);

/// Bias added to one corner so flat regions never tie exactly.
const CORNER_BIAS: f32 = 1.0 / 384.0;

/// Minimum local contrast that triggers a blend.
const CONTRAST_FLOOR: f32 = 0.05;

/// Contrast threshold as a fraction of the brightest corner.
const CONTRAST_SCALE: f32 = 0.125;

/// Divisor applied to the smaller direction component before the long
/// taps are clamped.
const EDGE_SHARPNESS: f32 = 8.0;

/// Range the long tap direction is clamped to, in units of its own length.
const LONG_TAP_LIMIT: Interval = Interval { min: -2.0, max: 2.0 };

#[inline]
fn luma(color: Color) -> f32 {
    color.dot(LUMA)
}

impl ImageBuffer {
    /// Antialias the buffer.
    ///
    /// Every pixel is filtered against an unmodified snapshot, so the
    /// result does not depend on traversal order. Returns the number of
    /// pixels that were blended.
    pub fn fxaa(&mut self) -> usize {
        let source = self.clone();
        let width = self.width as usize;

        let blended: usize = self
            .pixels
            .par_chunks_mut(width)
            .enumerate()
            .map(|(y, row)| {
                let mut count = 0;
                for (x, pixel) in row.iter_mut().enumerate() {
                    if let Some(color) = fxaa_pixel(&source, x as f32, y as f32) {
                        *pixel = color;
                        count += 1;
                    }
                }
                count
            })
            .sum();

        log::debug!(
            "FXAA blended {} of {} pixels",
            blended,
            self.pixels.len()
        );
        blended
    }
}

/// Filtered color for the pixel at `(x, y)`, or `None` to keep it.
fn fxaa_pixel(source: &ImageBuffer, x: f32, y: f32) -> Option<Color> {
    let luma_lt = luma(source.sample(x - 0.5, y - 0.5));
    let luma_lb = luma(source.sample(x - 0.5, y + 0.5));
    let luma_rt = luma(source.sample(x + 0.5, y - 0.5)) + CORNER_BIAS;
    let luma_rb = luma(source.sample(x + 0.5, y + 0.5));
    let luma_c = luma(source.sample(x, y));

    let luma_max = luma_lt.max(luma_lb).max(luma_rt.max(luma_rb));
    let luma_min = luma_lt.min(luma_lb).min(luma_rt.min(luma_rb));
    let threshold = CONTRAST_FLOOR.max(luma_max * CONTRAST_SCALE);

    let range = luma_max.max(luma_c) - luma_min.min(luma_c);
    if range < threshold {
        return None;
    }

    let dir_ne = luma_lb - luma_rt;
    let dir_nw = luma_rb - luma_lt;
    let dir = Vec2::new(dir_ne + dir_nw, dir_ne - dir_nw).normalize_or_zero();
    if dir == Vec2::ZERO {
        return None;
    }

    let min_abs = dir.x.abs().min(dir.y.abs()) * EDGE_SHARPNESS;
    let long = if min_abs > 0.0 {
        dir / min_abs
    } else {
        dir * LONG_TAP_LIMIT.max
    };
    let long = Vec2::new(LONG_TAP_LIMIT.clamp(long.x), LONG_TAP_LIMIT.clamp(long.y)) * 2.0;
    let short = dir * 0.5;

    let near_a = source.sample(x - short.x, y - short.y);
    let near_b = source.sample(x + short.x, y + short.y);
    let far_a = source.sample(x - long.x, y - long.y);
    let far_b = source.sample(x + long.x, y + long.y);

    let near = near_a + near_b;
    let wide = (far_a + far_b + near) * 0.25;

    let wide_luma = luma(wide);
    if wide_luma < luma_min || wide_luma > luma_max {
        Some(near * 0.5)
    } else {
        Some(wide)
    }
}
