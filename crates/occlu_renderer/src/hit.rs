//! Ray-surface intersection record.

use occlu_math::{Ray, Vec4};

/// Where a ray met a surface.
///
/// A miss is expressed as `None` at the call site, so a record always
/// carries a meaningful parameter and normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Ray parameter of the intersection (never negative)
    pub t: f32,
    /// Surface normal at the intersection (unit length, `w = 0`)
    pub normal: Vec4,
}

impl HitRecord {
    /// Create a new hit record.
    #[inline]
    pub fn new(t: f32, normal: Vec4) -> Self {
        Self { t, normal }
    }

    /// World-space point of this hit along `ray`.
    #[inline]
    pub fn point(&self, ray: &Ray) -> Vec4 {
        ray.at(self.t)
    }
}
