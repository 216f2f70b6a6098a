//! Floating-point RGBA pixel buffer.

use crate::{Color, ConfigError, RenderError, RenderResult};

/// A fixed-size grid of RGBA float pixels, row-major.
///
/// Row 0 is the bottom of the image; exporters flip rows when writing
/// top-down file formats. Reads and writes clamp their coordinates into
/// the image, so edge pixels repeat outward.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with zero (transparent black).
    ///
    /// Allocation failure is reported instead of aborting.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroResolution { width, height }.into());
        }

        let len = width as usize * height as usize;
        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| RenderError::Allocation { width, height })?;
        pixels.resize(len, Color::ZERO);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major from the bottom row.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// One row of pixels.
    pub fn row(&self, y: u32) -> &[Color] {
        let y = y.min(self.height - 1) as usize;
        let w = self.width as usize;
        &self.pixels[y * w..(y + 1) * w]
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> usize {
        let x = x.clamp(0, self.width as i64 - 1) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        y * self.width as usize + x
    }

    /// Get the pixel at (x, y), clamped into the image.
    #[inline]
    pub fn get(&self, x: i64, y: i64) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y), clamped into the image.
    #[inline]
    pub fn set(&mut self, x: i64, y: i64, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Bilinear sample at a fractional pixel coordinate.
    ///
    /// Integer coordinates return the pixel itself.
    pub fn sample(&self, x: f32, y: f32) -> Color {
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let p00 = self.get(x0, y0);
        let p10 = self.get(x0 + 1, y0);
        let p01 = self.get(x0, y0 + 1);
        let p11 = self.get(x0 + 1, y0 + 1);

        let near = p00.lerp(p10, fx);
        let far = p01.lerp(p11, fx);
        near.lerp(far, fy)
    }

    /// Bilinear sample in normalized texture coordinates, `[0, 1)` across
    /// the image.
    pub fn sample_uv(&self, u: f32, v: f32) -> Color {
        self.sample(u * self.width as f32, v * self.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgb;

    #[test]
    fn test_new_is_zeroed() {
        let image = ImageBuffer::new(4, 3).unwrap();
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 3);
        assert_eq!(image.pixels().len(), 12);
        assert!(image.pixels().iter().all(|p| *p == Color::ZERO));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            ImageBuffer::new(0, 10),
            Err(RenderError::InvalidConfig(ConfigError::ZeroResolution { .. }))
        ));
        assert!(ImageBuffer::new(10, 0).is_err());
    }

    #[test]
    fn test_get_set() {
        let mut image = ImageBuffer::new(4, 4).unwrap();
        image.set(2, 1, rgb(1.0, 0.0, 0.0));

        assert_eq!(image.get(2, 1), rgb(1.0, 0.0, 0.0));
        assert_eq!(image.row(1)[2], rgb(1.0, 0.0, 0.0));
        assert_eq!(image.get(1, 2), Color::ZERO);
    }

    #[test]
    fn test_coordinates_clamp() {
        let mut image = ImageBuffer::new(3, 2).unwrap();
        image.set(-5, -5, rgb(0.0, 1.0, 0.0));
        assert_eq!(image.get(0, 0), rgb(0.0, 1.0, 0.0));

        image.set(99, 99, rgb(0.0, 0.0, 1.0));
        assert_eq!(image.get(2, 1), rgb(0.0, 0.0, 1.0));
        assert_eq!(image.get(1000, -1000), image.get(2, 0));
    }

    #[test]
    fn test_sample_bilinear() {
        let mut image = ImageBuffer::new(2, 2).unwrap();
        image.set(0, 0, Color::splat(0.0));
        image.set(1, 0, Color::splat(1.0));
        image.set(0, 1, Color::splat(2.0));
        image.set(1, 1, Color::splat(3.0));

        assert_eq!(image.sample(0.0, 0.0), Color::splat(0.0));
        assert_eq!(image.sample(1.0, 1.0), Color::splat(3.0));
        assert!((image.sample(0.5, 0.0) - Color::splat(0.5)).length() < 1e-6);
        assert!((image.sample(0.0, 0.5) - Color::splat(1.0)).length() < 1e-6);
        assert!((image.sample(0.5, 0.5) - Color::splat(1.5)).length() < 1e-6);
        assert!((image.sample(0.25, 0.0) - Color::splat(0.25)).length() < 1e-6);
    }

    #[test]
    fn test_sample_outside_clamps() {
        let mut image = ImageBuffer::new(2, 1).unwrap();
        image.set(0, 0, Color::splat(1.0));
        image.set(1, 0, Color::splat(5.0));

        assert!((image.sample(-3.5, 0.0) - Color::splat(1.0)).length() < 1e-6);
        assert!((image.sample(7.25, 0.0) - Color::splat(5.0)).length() < 1e-6);
    }

    #[test]
    fn test_sample_uv() {
        let mut image = ImageBuffer::new(4, 4).unwrap();
        image.set(2, 2, rgb(1.0, 1.0, 1.0));
        assert_eq!(image.sample_uv(0.5, 0.5), rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_fill() {
        let mut image = ImageBuffer::new(3, 3).unwrap();
        image.fill(rgb(0.2, 0.2, 0.2));
        assert!(image.pixels().iter().all(|p| *p == rgb(0.2, 0.2, 0.2)));
    }
}
