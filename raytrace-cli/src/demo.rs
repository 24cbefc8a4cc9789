//! Hardcoded demo scenes.
//!
//! Scene construction ergonomics are out of scope here; a handful of
//! scenes built directly against the programmatic `Scene`/`Primitive`
//! API is enough to drive the renderer from the command line.

use raytrace_core::{
    Camera, Colour, DirectedLight, Material, Matrix3, Primitive, PrimitiveKind, Scene, Transform,
    Vec3,
};

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Demo {
    /// A single sphere lit only by ambient light.
    Ambient,
    /// A sphere lit by a directed light, shadowed by a plane floor.
    Directed,
    /// A mirror sphere reflecting an emissive sphere.
    Mirror,
}

impl Demo {
    pub fn build(self) -> Scene {
        match self {
            Demo::Ambient => ambient_sphere(),
            Demo::Directed => directed_sphere_over_plane(),
            Demo::Mirror => mirror_and_light(),
        }
    }
}

fn camera_looking_forward(fov_deg: f64) -> Camera {
    Camera::new(Transform::default(), fov_deg)
}

fn sphere(position: Vec3, material: Material) -> Primitive {
    Primitive::new(
        PrimitiveKind::Sphere,
        material,
        Transform::new(position, Vec3::new(1.0, 1.0, 1.0), Matrix3::identity()),
    )
}

fn ambient_sphere() -> Scene {
    let mut scene = Scene::new(camera_looking_forward(70.0), Colour::new(1.0, 1.0, 1.0), None);
    scene.add_primitive(sphere(
        Vec3::new(0.0, 0.0, 10.0),
        Material::new(1.0, Colour::new(1.0, 1.0, 1.0), Colour::new(0.0, 0.0, 0.0)),
    ));
    scene
}

fn directed_sphere_over_plane() -> Scene {
    let light = DirectedLight::new(Vec3::new(0.0, -1.0, 1.0), Colour::new(1.0, 1.0, 1.0) * 1.5);

    let mut scene = Scene::new(camera_looking_forward(70.0), Colour::new(0.05, 0.05, 0.05), Some(light));
    scene.add_primitive(sphere(
        Vec3::new(0.0, 0.0, 10.0),
        Material::new(1.0, Colour::new(1.0, 1.0, 1.0), Colour::new(0.0, 0.0, 0.0)),
    ));
    scene.add_primitive(Primitive::new(
        PrimitiveKind::Plane,
        Material::new(0.8, Colour::new(0.6, 0.6, 0.6), Colour::new(0.0, 0.0, 0.0)),
        Transform::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
            Matrix3::identity(),
        ),
    ));
    scene
}

fn mirror_and_light() -> Scene {
    let mut scene = Scene::new(camera_looking_forward(60.0), Colour::new(0.0, 0.0, 0.0), None);
    scene.add_primitive(sphere(
        Vec3::new(-1.2, 0.0, 8.0),
        Material::new(0.1, Colour::new(0.9, 0.9, 0.9), Colour::new(0.0, 0.0, 0.0)),
    ));
    scene.add_primitive(sphere(
        Vec3::new(1.5, 0.0, 14.0),
        Material::new(1.0, Colour::new(1.0, 1.0, 1.0), Colour::new(1.0, 0.9, 0.6)),
    ));
    scene
}
