//! Scene: an ordered, read-only list of surfaces.

use std::ops::Index;

use crate::{HitRecord, Surface};
use occlu_math::{Interval, Ray};

/// Identifies a surface within the scene that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(usize);

impl SurfaceId {
    /// Position of the surface in scene order.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The nearest surface a ray runs into.
#[derive(Debug, Clone, Copy)]
pub struct SceneHit<'a> {
    pub record: HitRecord,
    pub id: SurfaceId,
    pub surface: &'a Surface,
}

/// A list of surfaces, built once and then shared read-only by the
/// render workers.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    surfaces: Vec<Surface>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self {
            surfaces: Vec::new(),
        }
    }

    /// Add a surface and return its id.
    pub fn add(&mut self, surface: impl Into<Surface>) -> SurfaceId {
        self.surfaces.push(surface.into());
        SurfaceId(self.surfaces.len() - 1)
    }

    /// Builder-style variant of [`Scene::add`].
    pub fn with(mut self, surface: impl Into<Surface>) -> Self {
        self.add(surface);
        self
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub fn get(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.get(id.0)
    }

    /// Surfaces paired with their ids, in scene order.
    pub fn iter(&self) -> impl Iterator<Item = (SurfaceId, &Surface)> {
        self.surfaces
            .iter()
            .enumerate()
            .map(|(i, s)| (SurfaceId(i), s))
    }

    /// Number of emissive surfaces.
    pub fn emitter_count(&self) -> usize {
        self.surfaces.iter().filter(|s| s.is_emissive()).count()
    }

    /// Find the closest surface in front of the ray origin.
    ///
    /// Every surface except `exclude` is tested. A strictly smaller ray
    /// parameter wins, so on a tie the surface added first is kept.
    pub fn nearest_hit(&self, ray: &Ray, exclude: Option<SurfaceId>) -> Option<SceneHit<'_>> {
        let mut nearest: Option<SceneHit<'_>> = None;

        for (id, surface) in self.iter() {
            if exclude == Some(id) {
                continue;
            }
            let Some(record) = surface.hit(ray, Interval::FORWARD) else {
                continue;
            };
            if nearest.map_or(true, |n| record.t < n.record.t) {
                nearest = Some(SceneHit {
                    record,
                    id,
                    surface,
                });
            }
        }

        nearest
    }
}

impl Index<SurfaceId> for Scene {
    type Output = Surface;

    fn index(&self, id: SurfaceId) -> &Surface {
        &self.surfaces[id.0]
    }
}
