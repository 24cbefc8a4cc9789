use crate::material::Material;
use crate::transform::Transform;

/// Which intersection routine the Intersector dispatches to.
///
/// A tagged enum with a single `intersect` dispatcher (see
/// [`crate::intersect`]), not virtual dispatch over a trait object —
/// adding a primitive means adding a tag and a case, keeping the
/// Intersector a closed, auditable state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    /// Always a miss.
    Empty,
    /// Unit sphere at the local origin; world shape follows `Transform::scale`.
    Sphere,
    /// The plane `y_local = 0`, outward normal `+UNIT_Y` in local space.
    Plane,
    /// Reserved. The Intersector always returns a miss for this kind;
    /// no box intersection routine exists in this core.
    Box,
}

/// A typed primitive with its material and placement in the scene.
///
/// Light sources are not a separate kind: any primitive whose material
/// has a non-black `emissive` colour is a light (see
/// [`Material::is_light_source`]). The shader's "skip self when
/// gathering direct light" rule is what keeps an emissive sphere from
/// shadowing itself.
#[derive(Debug, Clone, Copy)]
pub struct Primitive {
    pub kind: PrimitiveKind,
    pub material: Material,
    pub transform: Transform,
}

impl Primitive {
    #[must_use]
    pub fn new(kind: PrimitiveKind, material: Material, transform: Transform) -> Self {
        Self {
            kind,
            material,
            transform,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(PrimitiveKind::Empty, Material::hidden(), Transform::default())
    }

    #[must_use]
    pub fn is_light_source(&self) -> bool {
        self.material.is_light_source()
    }
}
