use crate::matrix3::Matrix3;
use crate::vec3::{Vec3, UNIT_X, UNIT_Y, UNIT_Z};

/// Position, per-axis scale, and rotation of a scene object or camera.
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
    pub rotation: Matrix3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zero(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            rotation: Matrix3::identity(),
        }
    }
}

impl Transform {
    #[must_use]
    pub fn new(position: Vec3, scale: Vec3, rotation: Matrix3) -> Self {
        Self {
            position,
            scale,
            rotation,
        }
    }

    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.rotation * UNIT_X
    }

    #[must_use]
    pub fn left(&self) -> Vec3 {
        -self.right()
    }

    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * UNIT_Y
    }

    #[must_use]
    pub fn down(&self) -> Vec3 {
        -self.up()
    }

    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * UNIT_Z
    }

    #[must_use]
    pub fn backward(&self) -> Vec3 {
        -self.forward()
    }

    pub fn move_by(&mut self, translation: Vec3) {
        self.position = self.position + translation;
    }

    pub fn move_to(&mut self, target: Vec3) {
        self.position = target;
    }

    /// Left-multiplies the current rotation by a new rotation of
    /// `angle_deg` degrees around `axis`.
    pub fn rotate(&mut self, axis: Vec3, angle_deg: f64) {
        self.rotation = Matrix3::from_rotation(axis, angle_deg) * self.rotation;
    }

    pub fn scale_by(&mut self, scale: Vec3) {
        self.scale = Vec3::new(
            self.scale.x * scale.x,
            self.scale.y * scale.y,
            self.scale.z * scale.z,
        );
    }

    pub fn scale_to(&mut self, scale: Vec3) {
        self.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn default_basis_matches_world_axes() {
        let t = Transform::default();
        assert_eq!(t.right(), UNIT_X);
        assert_eq!(t.up(), UNIT_Y);
        assert_eq!(t.forward(), UNIT_Z);
    }

    #[test]
    fn rotation_keeps_basis_orthonormal() {
        let mut t = Transform::default();
        t.rotate(Vec3::new(0.3, 0.7, -0.2).normalize().unwrap(), 58.0);

        let (r, u, f) = (t.right(), t.up(), t.forward());
        assert!(approx_eq(r.dot(u), 0.0, 1e-9));
        assert!(approx_eq(u.dot(f), 0.0, 1e-9));
        assert!(approx_eq(f.dot(r), 0.0, 1e-9));
        assert!(approx_eq(r.length(), 1.0, 1e-9));
        assert!(approx_eq(u.length(), 1.0, 1e-9));
        assert!(approx_eq(f.length(), 1.0, 1e-9));
    }

    #[test]
    fn move_by_accumulates() {
        let mut t = Transform::default();
        t.move_by(Vec3::new(1.0, 2.0, 3.0));
        t.move_by(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(t.position, Vec3::new(2.0, 2.0, 3.0));
    }
}
