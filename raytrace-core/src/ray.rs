use crate::color::{Colour, BLACK};
use crate::vec3::Vec3;

/// A ray cast either from the camera (a primary ray) or from a
/// surface hit (a shadow feeler or a reflection bounce).
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub source: Vec3,
    /// Not renormalized on construction — the Intersector relies on
    /// non-unit directions under anisotropic scale (see
    /// [`crate::intersect`]).
    pub direction: Vec3,
    /// Colour accumulator carried alongside the ray. The core shader
    /// does not thread state through this field (see
    /// [`crate::shader::ray_cast`]); it exists so callers building
    /// their own traversal have somewhere to fold in per-ray tint.
    pub colour: Colour,
}

impl Ray {
    #[must_use]
    pub fn new(source: Vec3, direction: Vec3) -> Self {
        Self {
            source,
            direction,
            colour: BLACK,
        }
    }
}

/// The closest intersection of a ray with the scene, or a miss
/// (`distance = f64::INFINITY`, `object_index = None`).
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    pub distance: f64,
    pub point: Vec3,
    pub normal: Vec3,
    /// Index into `Scene::primitives()`. An index rather than a
    /// reference so a hit record survives independently of any
    /// particular borrow of the scene.
    pub object_index: Option<usize>,
}

impl RayHit {
    #[must_use]
    pub fn miss() -> Self {
        Self {
            distance: f64::INFINITY,
            point: Vec3::zero(),
            normal: Vec3::zero(),
            object_index: None,
        }
    }

    #[must_use]
    pub fn has_hit(&self) -> bool {
        self.distance.is_finite() && self.object_index.is_some()
    }
}

impl Default for RayHit {
    fn default() -> Self {
        Self::miss()
    }
}
