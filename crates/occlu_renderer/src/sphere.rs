//! Sphere primitive for ray casting.

use crate::{Color, HitRecord};
use occlu_math::{Interval, Ray, Vec4};

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec4,
    radius: f32,
    color: Color,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec4, color: Color, radius: f32) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    pub fn center(&self) -> Vec4 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Intersect a unit-direction ray with the sphere.
    ///
    /// Solves `t^2 + B t + C = 0` with `B = 2 dot(o - c, d)` and
    /// `C = |o - c|^2 - r^2`, keeping the smallest root inside `ray_t`.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let oc = ray.origin() - self.center;
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        let t = if discriminant == 0.0 {
            let root = -b / 2.0;
            if !ray_t.contains(root) {
                return None;
            }
            root
        } else {
            let sqrtd = discriminant.sqrt();
            let near = (-b - sqrtd) / 2.0;
            let far = (-b + sqrtd) / 2.0;
            if ray_t.contains(near) {
                near
            } else if ray_t.contains(far) {
                far
            } else {
                return None;
            }
        };

        let normal = (ray.at(t) - self.center).normalize_or_zero();
        Some(HitRecord::new(t, normal))
    }
}
