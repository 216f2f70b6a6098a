//! Four-component vector helpers.
//!
//! Points, directions and colors all share glam's `Vec4`. Spatial values
//! keep `w` at zero so component-wise arithmetic never drifts it; colors
//! use `w` as alpha. Component-wise arithmetic, `dot`, `length`,
//! `length_squared` and `normalize_or_zero` come straight from glam; the
//! operations below fill in what a ray caster needs on top.

use crate::Vec4;

/// Build a spatial point or direction with `w = 0`.
#[inline]
pub fn point(x: f32, y: f32, z: f32) -> Vec4 {
    Vec4::new(x, y, z, 0.0)
}

/// Ray-casting operations on `Vec4`.
pub trait Vec4Ext {
    /// Cross product of the spatial components. `w` is taken from `self`.
    fn cross3(self, rhs: Vec4) -> Vec4;

    /// Projection of `p` onto `self`.
    ///
    /// `self` must have nonzero length; the result is NaN otherwise.
    fn perspective(self, p: Vec4) -> Vec4;

    /// Component of `p` orthogonal to `self`, i.e. `p - self.perspective(p)`.
    fn perpendicular(self, p: Vec4) -> Vec4;

    /// Rotate the spatial components about the X axis (right-handed, degrees).
    fn rot_x(self, degrees: f32) -> Vec4;

    /// Rotate the spatial components about the Y axis (right-handed, degrees).
    fn rot_y(self, degrees: f32) -> Vec4;

    /// Rotate the spatial components about the Z axis (right-handed, degrees).
    fn rot_z(self, degrees: f32) -> Vec4;
}

impl Vec4Ext for Vec4 {
    #[inline]
    fn cross3(self, rhs: Vec4) -> Vec4 {
        self.truncate().cross(rhs.truncate()).extend(self.w)
    }

    #[inline]
    fn perspective(self, p: Vec4) -> Vec4 {
        self * (p.dot(self) / self.length_squared())
    }

    #[inline]
    fn perpendicular(self, p: Vec4) -> Vec4 {
        p - self.perspective(p)
    }

    fn rot_x(self, degrees: f32) -> Vec4 {
        let (s, c) = degrees.to_radians().sin_cos();
        Vec4::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c, self.w)
    }

    fn rot_y(self, degrees: f32) -> Vec4 {
        let (s, c) = degrees.to_radians().sin_cos();
        Vec4::new(self.x * c + self.z * s, self.y, -self.x * s + self.z * c, self.w)
    }

    fn rot_z(self, degrees: f32) -> Vec4 {
        let (s, c) = degrees.to_radians().sin_cos();
        Vec4::new(self.x * c - self.y * s, self.x * s + self.y * c, self.z, self.w)
    }
}
