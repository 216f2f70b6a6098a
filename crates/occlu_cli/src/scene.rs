//! The built-in demo scene.

use occlu_math::{point, Vec4};
use occlu_renderer::{rgb, ParametricPlane, Plane, Scene, Sphere};

/// A small room: three spheres on a floor panel in front of a back wall,
/// lit by an emissive ceiling plane.
pub fn build_scene() -> Scene {
    Scene::new()
        // Ceiling light
        .with(Plane::new(
            point(0.0, 4.0, 0.0),
            rgb(1.0, 0.98, 0.92),
            -Vec4::Y,
        ))
        // Floor
        .with(ParametricPlane::new(
            point(0.0, -1.0, 6.0),
            rgb(0.75, 0.75, 0.75),
            Vec4::Y,
            Vec4::X,
            6.0,
            6.0,
        ))
        // Back wall
        .with(ParametricPlane::new(
            point(0.0, 1.5, 10.0),
            rgb(0.6, 0.65, 0.8),
            -Vec4::Z,
            Vec4::X,
            6.0,
            2.5,
        ))
        .with(Sphere::new(point(-1.4, 0.0, 6.0), rgb(0.9, 0.2, 0.2), 1.0))
        .with(Sphere::new(point(1.3, -0.3, 5.0), rgb(0.2, 0.8, 0.3), 0.7))
        .with(Sphere::new(point(0.1, -0.6, 3.8), rgb(0.2, 0.3, 0.9), 0.4))
}
