//! Infinite and bounded plane primitives.

use crate::{Color, HitRecord};
use occlu_math::{Interval, Ray, Vec4, Vec4Ext};

/// Ray parameter where `ray` crosses the plane through `point` with `normal`.
///
/// `None` when the ray is parallel to the plane or the crossing lies
/// outside `ray_t`.
#[inline]
fn plane_crossing(ray: &Ray, point: Vec4, normal: Vec4, ray_t: Interval) -> Option<f32> {
    let denom = ray.direction().dot(normal);
    if denom == 0.0 {
        return None;
    }
    let t = -(ray.origin() - point).dot(normal) / denom;
    ray_t.contains(t).then_some(t)
}

/// An infinite plane. Planes act as the light emitters of a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    point: Vec4,
    normal: Vec4,
    color: Color,
}

impl Plane {
    /// Create a new plane through `point`. `normal` must be unit length.
    pub fn new(point: Vec4, color: Color, normal: Vec4) -> Self {
        Self {
            point,
            normal,
            color,
        }
    }

    pub fn point(&self) -> Vec4 {
        self.point
    }

    pub fn normal(&self) -> Vec4 {
        self.normal
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let t = plane_crossing(ray, self.point, self.normal, ray_t)?;
        Some(HitRecord::new(t, self.normal))
    }
}

/// A rectangle embedded in 3D.
///
/// The rectangle is centered on `point` and spans `tangent_extent` along
/// the tangent and `bitangent_extent` along `normal x tangent`, both as
/// half-extents.
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricPlane {
    point: Vec4,
    normal: Vec4,
    tangent: Vec4,
    tangent_extent: f32,
    bitangent_extent: f32,
    color: Color,
}

impl ParametricPlane {
    /// Create a new bounded plane. `normal` and `tangent` must be unit
    /// length and orthogonal.
    pub fn new(
        point: Vec4,
        color: Color,
        normal: Vec4,
        tangent: Vec4,
        tangent_extent: f32,
        bitangent_extent: f32,
    ) -> Self {
        Self {
            point,
            normal,
            tangent,
            tangent_extent,
            bitangent_extent,
            color,
        }
    }

    pub fn point(&self) -> Vec4 {
        self.point
    }

    pub fn normal(&self) -> Vec4 {
        self.normal
    }

    pub fn tangent(&self) -> Vec4 {
        self.tangent
    }

    /// Second in-plane axis, `normal x tangent`.
    pub fn bitangent(&self) -> Vec4 {
        self.normal.cross3(self.tangent)
    }

    pub fn extents(&self) -> (f32, f32) {
        (self.tangent_extent, self.bitangent_extent)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let t = plane_crossing(ray, self.point, self.normal, ray_t)?;

        let local = ray.at(t) - self.point;
        let along_tangent = self.tangent.perspective(local);
        if along_tangent.length_squared() > self.tangent_extent * self.tangent_extent {
            return None;
        }
        let along_bitangent = local - along_tangent;
        if along_bitangent.length_squared() > self.bitangent_extent * self.bitangent_extent {
            return None;
        }

        Some(HitRecord::new(t, self.normal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgb;
    use occlu_math::point;

    fn floor() -> Plane {
        Plane::new(point(0.0, -1.0, 0.0), rgb(1.0, 1.0, 1.0), point(0.0, 1.0, 0.0))
    }

    #[test]
    fn test_plane_hit() {
        let ray = Ray::new(Vec4::ZERO, point(0.0, -1.0, 0.0));
        let rec = floor().hit(&ray, Interval::FORWARD).expect("should hit");

        assert!((rec.t - 1.0).abs() < 1e-6);
        assert_eq!(rec.normal, point(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_plane_parallel_misses() {
        let ray = Ray::new(Vec4::ZERO, point(1.0, 0.0, 0.0));
        assert!(floor().hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_plane_behind_origin_misses() {
        let ray = Ray::new(Vec4::ZERO, point(0.0, 1.0, 0.0));
        assert!(floor().hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_plane_hit_from_below() {
        // The plane is two-sided; the reported normal does not flip.
        let ray = Ray::new(point(0.0, -3.0, 0.0), point(0.0, 1.0, 0.0));
        let rec = floor().hit(&ray, Interval::FORWARD).expect("should hit");
        assert!((rec.t - 2.0).abs() < 1e-6);
        assert_eq!(rec.normal, point(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_plane_hit_lies_on_plane() {
        let plane = Plane::new(
            point(1.0, 2.0, 3.0),
            rgb(1.0, 1.0, 1.0),
            point(1.0, 1.0, -1.0).normalize(),
        );
        let directions = [
            point(1.0, 0.0, 0.0),
            point(0.0, 1.0, 0.2),
            point(0.5, 0.5, -0.3),
        ];
        for dir in directions {
            let ray = Ray::new(Vec4::ZERO, dir.normalize());
            if let Some(rec) = plane.hit(&ray, Interval::FORWARD) {
                let on_plane = (ray.at(rec.t) - plane.point()).dot(plane.normal());
                assert!(on_plane.abs() < 1e-4, "residual={on_plane}");
            }
        }
    }

    fn panel() -> ParametricPlane {
        // 4 wide along X, 2 tall along Y, facing the origin
        ParametricPlane::new(
            point(0.0, 0.0, 5.0),
            rgb(0.2, 0.4, 0.6),
            point(0.0, 0.0, -1.0),
            point(1.0, 0.0, 0.0),
            2.0,
            1.0,
        )
    }

    #[test]
    fn test_parametric_plane_inside() {
        let ray = Ray::new(point(1.5, 0.5, 0.0), point(0.0, 0.0, 1.0));
        let rec = panel().hit(&ray, Interval::FORWARD).expect("should hit");
        assert!((rec.t - 5.0).abs() < 1e-6);
        assert_eq!(rec.normal, point(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_parametric_plane_outside_tangent_extent() {
        let ray = Ray::new(point(2.5, 0.0, 0.0), point(0.0, 0.0, 1.0));
        assert!(panel().hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_parametric_plane_outside_bitangent_extent() {
        let ray = Ray::new(point(0.0, 1.5, 0.0), point(0.0, 0.0, 1.0));
        assert!(panel().hit(&ray, Interval::FORWARD).is_none());

        // Within the tangent extent but not the bitangent one
        let ray = Ray::new(point(1.5, -1.2, 0.0), point(0.0, 0.0, 1.0));
        assert!(panel().hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_parametric_plane_behind_origin() {
        let ray = Ray::new(point(0.0, 0.0, 10.0), point(0.0, 0.0, 1.0));
        assert!(panel().hit(&ray, Interval::FORWARD).is_none());
    }

    #[test]
    fn test_parametric_plane_bitangent() {
        let b = panel().bitangent();
        // (0,0,-1) x (1,0,0) = (0,-1,0)
        assert!((b - point(0.0, -1.0, 0.0)).length() < 1e-6);
    }
}
