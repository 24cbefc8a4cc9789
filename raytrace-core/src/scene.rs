use crate::camera::Camera;
use crate::color::{Colour, BLACK};
use crate::primitive::Primitive;
use crate::vec3::Vec3;

/// A light at infinity: a travel direction and a colour.
///
/// `direction` is the direction the light *travels in* — the vector
/// pointing *towards* the light from a surface is `-direction`.
#[derive(Debug, Clone, Copy)]
pub struct DirectedLight {
    pub direction: Vec3,
    pub colour: Colour,
}

impl DirectedLight {
    /// `direction` is normalized on construction; if it is the zero
    /// vector the light is treated as absent (`colour` stays Black).
    #[must_use]
    pub fn new(direction: Vec3, colour: Colour) -> Self {
        match direction.normalize() {
            Ok(d) => Self { direction: d, colour },
            Err(_) => Self {
                direction: Vec3::zero(),
                colour: BLACK,
            },
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.colour != BLACK
    }
}

/// Upper bound on primitives held by a scene. `Scene::add_primitive`
/// logs a warning and drops anything past this instead of growing
/// without limit.
pub const MAX_OBJECTS: usize = 16;

#[derive(Debug, Clone)]
pub struct Scene {
    pub camera: Camera,
    pub ambient: Colour,
    pub directed: Option<DirectedLight>,
    primitives: Vec<Primitive>,
}

impl Scene {
    #[must_use]
    pub fn new(camera: Camera, ambient: Colour, directed: Option<DirectedLight>) -> Self {
        Self {
            camera,
            ambient,
            directed: directed.filter(DirectedLight::is_active),
            primitives: Vec::with_capacity(MAX_OBJECTS),
        }
    }

    #[must_use]
    pub fn has_ambient(&self) -> bool {
        self.ambient != BLACK
    }

    #[must_use]
    pub fn has_directed(&self) -> bool {
        self.directed.is_some()
    }

    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Adds a primitive, silently dropping it once `MAX_OBJECTS` is
    /// reached (logged at `warn` level since a dropped primitive is
    /// easy to miss while iterating on a scene).
    pub fn add_primitive(&mut self, primitive: Primitive) {
        if self.primitives.len() >= MAX_OBJECTS {
            log::warn!(
                "scene already holds {MAX_OBJECTS} primitives; dropping additional primitive"
            );
            return;
        }
        self.primitives.push(primitive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use crate::primitive::PrimitiveKind;
    use crate::transform::Transform;

    fn camera() -> Camera {
        Camera::new(Transform::default(), 90.0)
    }

    #[test]
    fn primitives_past_capacity_are_dropped() {
        let mut scene = Scene::new(camera(), BLACK, None);
        for _ in 0..MAX_OBJECTS + 5 {
            scene.add_primitive(Primitive::new(
                PrimitiveKind::Sphere,
                Material::new(1.0, crate::color::WHITE, BLACK),
                Transform::default(),
            ));
        }
        assert_eq!(scene.primitives().len(), MAX_OBJECTS);
    }

    #[test]
    fn black_directed_light_is_not_active() {
        let scene = Scene::new(camera(), BLACK, Some(DirectedLight::new(Vec3::new(0.0, -1.0, 0.0), BLACK)));
        assert!(!scene.has_directed());
    }
}
