//! Pinhole camera for primary ray generation.

use occlu_math::{point, Ray, Vec4};

/// Pinhole camera looking down +Z with +Y up.
///
/// The image plane sits one focal length in front of the eye, where
/// the focal length is `1 / tan(hfov / 2)` so that the plane spans
/// `[-1, 1]` horizontally. Pixel rows grow upward: row 0 is the bottom
/// of the image.
#[derive(Debug, Clone)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,
    eye: Vec4,
    hfov: f32,
    focal_length: f32,
    aspect: f32,
}

impl Camera {
    /// Create a camera at the origin with the given horizontal field of view
    /// in degrees.
    pub fn new(image_width: u32, image_height: u32, hfov: f32) -> Self {
        Self {
            image_width,
            image_height,
            eye: Vec4::ZERO,
            hfov,
            focal_length: 1.0 / (hfov.to_radians() / 2.0).tan(),
            aspect: image_height as f32 / image_width as f32,
        }
    }

    /// Move the eye point.
    pub fn with_position(mut self, eye: Vec4) -> Self {
        self.eye = eye;
        self
    }

    pub fn position(&self) -> Vec4 {
        self.eye
    }

    pub fn hfov(&self) -> f32 {
        self.hfov
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    /// Normalized device coordinates of the center of pixel `(x, y)`.
    ///
    /// X spans `[-1, 1]`; Y is scaled by the `height / width` aspect.
    pub fn ndc(&self, x: u32, y: u32) -> (f32, f32) {
        let u = (x as f32 + 0.5) / self.image_width as f32 * 2.0 - 1.0;
        let v = ((y as f32 + 0.5) / self.image_height as f32 * 2.0 - 1.0) * self.aspect;
        (u, v)
    }

    /// Primary ray through the center of pixel `(x, y)`.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let (u, v) = self.ndc(x, y);
        let direction = point(u, v, self.focal_length).normalize_or_zero();
        Ray::new(self.eye, direction)
    }
}
