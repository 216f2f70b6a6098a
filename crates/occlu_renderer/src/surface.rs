//! The closed set of surface primitives a scene can hold.

use crate::{HitRecord, ParametricPlane, Plane, Sphere};
use occlu_math::{Interval, Ray, Vec4};

/// Color type alias (RGBA, channels typically 0-1)
pub type Color = Vec4;

/// Build an opaque color.
#[inline]
pub fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color::new(r, g, b, 1.0)
}

/// A surface primitive.
///
/// Dispatch is a plain match; emission is a property of the variant
/// rather than of a separate material.
#[derive(Debug, Clone, PartialEq)]
pub enum Surface {
    Sphere(Sphere),
    /// Infinite plane, always emissive.
    Plane(Plane),
    ParametricPlane(ParametricPlane),
}

impl Surface {
    /// Test whether `ray` hits this surface with a parameter inside `ray_t`.
    #[inline]
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self {
            Surface::Sphere(s) => s.hit(ray, ray_t),
            Surface::Plane(p) => p.hit(ray, ray_t),
            Surface::ParametricPlane(p) => p.hit(ray, ray_t),
        }
    }

    /// Flat base color of the surface.
    pub fn color(&self) -> Color {
        match self {
            Surface::Sphere(s) => s.color(),
            Surface::Plane(p) => p.color(),
            Surface::ParametricPlane(p) => p.color(),
        }
    }

    /// Whether the ambient integrator treats this surface as a light.
    #[inline]
    pub fn is_emissive(&self) -> bool {
        matches!(self, Surface::Plane(_))
    }

    /// Short name of the primitive kind, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Surface::Sphere(_) => "sphere",
            Surface::Plane(_) => "plane",
            Surface::ParametricPlane(_) => "parametric plane",
        }
    }
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::Sphere(sphere)
    }
}

impl From<Plane> for Surface {
    fn from(plane: Plane) -> Self {
        Surface::Plane(plane)
    }
}

impl From<ParametricPlane> for Surface {
    fn from(plane: ParametricPlane) -> Self {
        Surface::ParametricPlane(plane)
    }
}
