//! Direct lighting, emission, reflection and the top-level `ray_cast`
//! entry point that the Renderer drives per pixel.

use crate::color::{Colour, BLACK};
use crate::intersect::closest;
use crate::ray::Ray;
use crate::scene::Scene;

/// Shades a single ray against `scene`, recursing into mirror
/// reflection up to `max_reflections` bounces.
///
/// This shading model is intentionally not physically based: it
/// multiplies accumulated direct+emitted light by the surface's
/// diffuse response, then adds mirror reflection and ambient on top.
/// That order is the renderer's defining look and must not be
/// "corrected" to a more physical model.
#[must_use]
pub fn ray_cast(ray: &Ray, scene: &Scene, max_reflections: u32) -> Colour {
    let hit = closest(scene, ray);

    let Some(index) = hit.object_index else {
        return background(ray, scene);
    };

    let object = &scene.primitives()[index];
    let material = &object.material;
    let cos = ray.direction.dot(hit.normal).abs();

    let mut light = direct_lighting(&hit, scene);
    light += material.emissive;
    light = material.colour * (light * (cos * material.diffusion()));

    if max_reflections > 0 {
        let perpendicular = ray.direction - hit.normal * ray.direction.dot(hit.normal);
        let reflected_dir = -ray.direction + 2.0 * perpendicular;
        let reflected_ray = Ray::new(hit.point, reflected_dir);
        let reflected = ray_cast(&reflected_ray, scene, max_reflections - 1);
        light += reflected * material.reflectivity();
    }

    if scene.has_ambient() {
        light += scene.ambient * material.colour;
    }

    light
}

fn background(ray: &Ray, scene: &Scene) -> Colour {
    let Some(directed) = scene.directed.as_ref() else {
        return BLACK;
    };

    let c = ray.direction.dot(-directed.direction);
    if c < 0.0 {
        return BLACK;
    }
    directed.colour * c
}

/// Sums the contribution of every light source (emissive primitives
/// and the optional directed light) visible from `hit`, testing each
/// with a shadow feeler ray.
fn direct_lighting(hit: &crate::ray::RayHit, scene: &Scene) -> Colour {
    let mut light = BLACK;
    let hit_index = hit.object_index;

    for (index, candidate) in scene.primitives().iter().enumerate() {
        if !candidate.is_light_source() || Some(index) == hit_index {
            continue;
        }

        let Ok(dir) = (candidate.transform.position - hit.point).normalize() else {
            continue;
        };
        let shadow_ray = Ray::new(hit.point, dir);
        let shadow_hit = closest(scene, &shadow_ray);

        if shadow_hit.object_index == Some(index) {
            light += hit.normal.dot(dir).abs() * candidate.material.emissive;
        }
    }

    if let Some(directed) = scene.directed.as_ref() {
        let dir = -directed.direction;
        let shadow_ray = Ray::new(hit.point, dir);
        let shadow_hit = closest(scene, &shadow_ray);

        if !shadow_hit.has_hit() {
            light += hit.normal.dot(dir).abs() * directed.colour;
        }
    }

    light
}
