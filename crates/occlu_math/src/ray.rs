use crate::Vec4;

/// A ray in 3D space with an origin and a unit direction.
///
/// The direction is expected to be normalized by the caller; the
/// intersection routines solve their quadratics under that assumption.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec4,
    pub direction: Vec4,
}

impl Ray {
    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vec4, direction: Vec4) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec4 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec4 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec4 {
        self.origin + self.direction * t
    }

    /// `p` expressed relative to the ray origin.
    #[inline]
    pub fn relative_point(&self, p: Vec4) -> Vec4 {
        p - self.origin
    }

    /// Perpendicular distance from the ray line to `p`.
    ///
    /// Returns -1.0 when `p` lies behind the origin.
    pub fn nearest_approach_distance(&self, p: Vec4) -> f32 {
        let rel = self.relative_point(p);
        let along = self.direction.dot(rel);
        if along < 0.0 {
            return -1.0;
        }
        (rel - self.direction * along).length()
    }

    /// Distance along the ray to the point of closest approach to `p`.
    ///
    /// Returns -1.0 when `p` lies behind the origin.
    pub fn nearest_approach_offset(&self, p: Vec4) -> f32 {
        let along = self.direction.dot(self.relative_point(p));
        if along < 0.0 {
            return -1.0;
        }
        along
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec4::ZERO,
            direction: Vec4::Z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;

    #[test]
    fn test_ray_creation() {
        let origin = point(1.0, 2.0, 3.0);
        let direction = point(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
        assert_eq!(ray.origin(), origin);
        assert_eq!(ray.direction(), direction);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec4::ZERO, Vec4::X);

        assert_eq!(ray.at(0.0), Vec4::ZERO);
        assert_eq!(ray.at(1.0), Vec4::X);
        assert_eq!(ray.at(2.0), point(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), point(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_relative_point() {
        let ray = Ray::new(point(1.0, 1.0, 1.0), Vec4::Z);
        assert_eq!(ray.relative_point(point(1.0, 2.0, 5.0)), point(0.0, 1.0, 4.0));
    }

    #[test]
    fn test_nearest_approach_in_front() {
        let ray = Ray::new(Vec4::ZERO, Vec4::Z);
        let p = point(3.0, 4.0, 10.0);

        assert!((ray.nearest_approach_distance(p) - 5.0).abs() < 1e-5);
        assert!((ray.nearest_approach_offset(p) - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_nearest_approach_behind() {
        let ray = Ray::new(Vec4::ZERO, Vec4::Z);
        let p = point(1.0, 0.0, -2.0);

        assert_eq!(ray.nearest_approach_distance(p), -1.0);
        assert_eq!(ray.nearest_approach_offset(p), -1.0);
    }

    #[test]
    fn test_ray_copy() {
        let ray1 = Ray::new(Vec4::ZERO, Vec4::Y);
        let ray2 = ray1; // Copy, not move

        assert_eq!(ray1.origin, ray2.origin);
        assert_eq!(ray1.at(1.0), ray2.at(1.0));
    }
}
