use crate::transform::Transform;
use crate::vec3::Vec3;

/// Default field of view, in degrees, used when a caller supplies one
/// outside the valid `(0, 180)` range.
const DEFAULT_FOV_DEG: f64 = 120.0;

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub transform: Transform,
    /// Full (not half) field of view, in radians.
    fov: f64,
}

impl Camera {
    /// `fov_deg` is the full field of view in degrees. Values outside
    /// the open interval `(0, 180)` fall back to `DEFAULT_FOV_DEG`
    /// (spec's `InvalidParameter` policy: clamp, never fail).
    #[must_use]
    pub fn new(transform: Transform, fov_deg: f64) -> Self {
        Self {
            transform,
            fov: Self::clamp_fov_deg(fov_deg).to_radians(),
        }
    }

    fn clamp_fov_deg(fov_deg: f64) -> f64 {
        if fov_deg > 0.0 && fov_deg < 180.0 {
            fov_deg
        } else {
            DEFAULT_FOV_DEG
        }
    }

    #[must_use]
    pub fn fov_deg(&self) -> f64 {
        self.fov.to_degrees()
    }

    pub fn set_fov_deg(&mut self, fov_deg: f64) {
        self.fov = Self::clamp_fov_deg(fov_deg).to_radians();
    }

    /// Primary ray direction for normalized image-plane coordinates
    /// `(u, v)`, both typically in `[-1, 1]`.
    #[must_use]
    pub fn direction_at(&self, u: f64, v: f64) -> Vec3 {
        let cot = (self.fov / 2.0).cos() / (self.fov / 2.0).sin();
        let dir = self.transform.forward() * cot
            + self.transform.right() * u
            + self.transform.up() * v;
        // The combination above is never the zero vector for a valid
        // fov and an orthonormal basis.
        dir.normalize().expect("camera basis is never degenerate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_fov_falls_back_to_default() {
        let c = Camera::new(Transform::default(), 0.0);
        assert!((c.fov_deg() - DEFAULT_FOV_DEG).abs() < 1e-9);

        let c = Camera::new(Transform::default(), 200.0);
        assert!((c.fov_deg() - DEFAULT_FOV_DEG).abs() < 1e-9);
    }

    #[test]
    fn center_of_frame_points_forward() {
        let c = Camera::new(Transform::default(), 90.0);
        let dir = c.direction_at(0.0, 0.0);
        assert_eq!(dir, c.transform.forward());
    }
}
