//! Ray/primitive intersection in local (object) space, and the
//! linear-scan closest-hit query over a whole [`Scene`].

use crate::matrix3::Matrix3;
use crate::primitive::{Primitive, PrimitiveKind};
use crate::ray::{Ray, RayHit};
use crate::scene::Scene;
use crate::vec3::{Vec3, UNIT_Y};
use crate::FLOAT_EPS;

/// Minimum `t` along a ray for a hit to count — skips both
/// behind-the-origin intersections and self-intersection of the
/// surface a shadow/reflection ray originates from.
const EPS_HIT: f64 = 1e-6;

/// Intersects `ray` with a single `primitive`, in world space.
///
/// Builds the world→local affine transform from the primitive's
/// `Transform`, solves the local-space equation for the primitive's
/// kind, then maps the hit back to world space. Any singular rotation
/// or scale (caught as [`crate::error::NumericError`] from
/// `Matrix3::inverse`) is folded into a miss rather than propagated.
#[must_use]
pub fn intersect(ray: &Ray, primitive: &Primitive) -> RayHit {
    if primitive.kind == PrimitiveKind::Empty || primitive.material.is_hidden() {
        return RayHit::miss();
    }

    let transform = &primitive.transform;

    let rotation_inv = match transform.rotation.inverse() {
        Ok(r) => r,
        Err(e) => {
            log::debug!("folding singular rotation into a miss: {e}");
            return RayHit::miss();
        }
    };

    if !is_scale_invertible(transform.scale) {
        log::debug!("folding non-invertible scale into a miss");
        return RayHit::miss();
    }
    let scale_inv = Matrix3::inverse_scale(transform.scale);

    let local_origin = scale_inv * (rotation_inv * (ray.source - transform.position));
    // Deliberately not renormalized: the `t` solved for in local space
    // must map back to world-space distance under anisotropic scale.
    let local_dir = scale_inv * (rotation_inv * ray.direction);

    let local_hit = match primitive.kind {
        PrimitiveKind::Sphere => intersect_sphere_local(local_origin, local_dir),
        PrimitiveKind::Plane => intersect_plane_local(local_origin, local_dir),
        PrimitiveKind::Box | PrimitiveKind::Empty => None,
    };

    let Some((distance_local, local_point, local_normal)) = local_hit else {
        return RayHit::miss();
    };
    let _ = distance_local;

    let scale = Matrix3::from_scale(transform.scale);
    let world_point = transform.position + transform.rotation * (scale * local_point);

    let world_normal = match (transform.rotation * (scale_inv * local_normal)).normalize() {
        Ok(n) => n,
        Err(e) => {
            log::debug!("folding degenerate normal into a miss: {e}");
            return RayHit::miss();
        }
    };

    let distance = (ray.source - world_point).length();

    RayHit {
        distance,
        point: world_point,
        normal: world_normal,
        // Placeholder marking "hit"; `closest` overwrites this with the
        // primitive's real index in the scene.
        object_index: Some(0),
    }
}

fn is_scale_invertible(scale: Vec3) -> bool {
    scale.x.abs() >= FLOAT_EPS && scale.y.abs() >= FLOAT_EPS && scale.z.abs() >= FLOAT_EPS
}

/// Unit sphere at the local origin. `|o + t*d|^2 = 1`.
fn intersect_sphere_local(o: Vec3, d: Vec3) -> Option<(f64, Vec3, Vec3)> {
    let a = d.dot(d);
    let b_half = o.dot(d);
    let c = o.dot(o) - 1.0;
    let delta_half = b_half * b_half - a * c;

    if delta_half < 0.0 {
        return None;
    }
    let sqrt_delta = delta_half.sqrt();

    let t0 = (-b_half - sqrt_delta) / a;
    let t1 = (-b_half + sqrt_delta) / a;

    let t = if t0 > EPS_HIT {
        t0
    } else if t1 > EPS_HIT {
        t1
    } else {
        return None;
    };

    let point = o + d * t;
    let normal = point.normalize().ok()?;
    Some((t, point, normal))
}

/// The plane `y = 0`, outward normal `+UNIT_Y`.
fn intersect_plane_local(o: Vec3, d: Vec3) -> Option<(f64, Vec3, Vec3)> {
    if d.y.abs() < EPS_HIT {
        return None;
    }
    let t = -o.y / d.y;
    if t < EPS_HIT {
        return None;
    }
    let point = o + d * t;
    Some((t, point, UNIT_Y))
}

/// Linear scan over `scene`'s primitives for the closest finite hit.
/// Ties (equal distance) resolve to the earliest primitive in scan
/// order.
#[must_use]
pub fn closest(scene: &Scene, ray: &Ray) -> RayHit {
    let mut best = RayHit::miss();

    for (index, primitive) in scene.primitives().iter().enumerate() {
        let hit = intersect(ray, primitive);
        if hit.object_index.is_some() && hit.distance < best.distance {
            best = RayHit {
                object_index: Some(index),
                ..hit
            };
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, WHITE};
    use crate::material::Material;
    use crate::transform::Transform;

    fn sphere_at(position: Vec3) -> Primitive {
        Primitive::new(
            PrimitiveKind::Sphere,
            Material::new(1.0, WHITE, BLACK),
            Transform::new(position, Vec3::new(1.0, 1.0, 1.0), Matrix3::identity()),
        )
    }

    #[test]
    fn sphere_hit_distance_and_normal() {
        let sphere = sphere_at(Vec3::zero());
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = intersect(&ray, &sphere);

        assert!(hit.object_index.is_some());
        assert!((hit.distance - 9.0).abs() < 1e-9);
        assert_eq!(hit.normal, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn translation_equivariance() {
        let offset = Vec3::new(3.0, -2.0, 5.0);

        let sphere = sphere_at(Vec3::zero());
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = intersect(&ray, &sphere);

        let shifted_sphere = sphere_at(offset);
        let shifted_ray = Ray::new(ray.source + offset, ray.direction);
        let shifted_hit = intersect(&shifted_ray, &shifted_sphere);

        assert!((hit.distance - shifted_hit.distance).abs() < 1e-9);
        assert_eq!(hit.normal, shifted_hit.normal);
    }

    #[test]
    fn self_intersection_is_avoided() {
        let sphere = sphere_at(Vec3::zero());
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = intersect(&ray, &sphere);

        let shadow_ray = Ray::new(hit.point, Vec3::new(0.3, 0.6, -1.0));
        let shadow_hit = intersect(&shadow_ray, &sphere);
        assert!(shadow_hit.object_index.is_none());
    }

    #[test]
    fn plane_parallel_ray_misses() {
        let plane = Primitive::new(
            PrimitiveKind::Plane,
            Material::new(1.0, WHITE, BLACK),
            Transform::default(),
        );
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(intersect(&ray, &plane).object_index.is_none());
    }

    #[test]
    fn box_kind_is_always_a_miss() {
        let b = Primitive::new(
            PrimitiveKind::Box,
            Material::new(1.0, WHITE, BLACK),
            Transform::default(),
        );
        let ray = Ray::new(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(intersect(&ray, &b).object_index.is_none());
    }
}
