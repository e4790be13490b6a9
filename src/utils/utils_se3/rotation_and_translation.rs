use nalgebra::{Quaternion, Rotation3, UnitQuaternion, Vector3};
use serde::{Serialize, Deserialize};

/// A representation for an SE(3) transform composed of just rotation and translation components.
/// Used for sensor mounting frames, joint origins and the base attitude.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform {
    rotation: UnitQuaternion<f64>,
    translation: Vector3<f64>
}
impl RigidTransform {
    pub fn new(rotation: UnitQuaternion<f64>, translation: Vector3<f64>) -> Self {
        Self {
            rotation,
            translation
        }
    }
    pub fn new_identity() -> Self {
        Self::new(UnitQuaternion::identity(), Vector3::zeros())
    }
    /// Pure translation, identity rotation.
    pub fn new_from_translation(x: f64, y: f64, z: f64) -> Self {
        Self::new(UnitQuaternion::identity(), Vector3::new(x, y, z))
    }
    /// Roll, pitch, yaw about fixed axes (URDF convention), then translation.
    pub fn new_from_euler_angles(rx: f64, ry: f64, rz: f64, x: f64, y: f64, z: f64) -> Self {
        Self::new(UnitQuaternion::from_euler_angles(rx, ry, rz), Vector3::new(x, y, z))
    }
    /// Quaternion given as `w, x, y, z`; it is normalized.
    pub fn new_from_quaternion_and_translation(w: f64, qx: f64, qy: f64, qz: f64, x: f64, y: f64, z: f64) -> Self {
        Self::new(UnitQuaternion::from_quaternion(Quaternion::new(w, qx, qy, qz)), Vector3::new(x, y, z))
    }
    /// Returns the rotation component of the object.
    pub fn rotation(&self) -> &UnitQuaternion<f64> {
        &self.rotation
    }
    pub fn rotation_matrix(&self) -> Rotation3<f64> {
        self.rotation.to_rotation_matrix()
    }
    /// Returns the translation component of the object.
    pub fn translation(&self) -> &Vector3<f64> {
        &self.translation
    }
    pub fn multiply_by_point(&self, point: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * point + self.translation
    }
    /// The inverse transform such that T * T^-1 = I.
    pub fn inverse(&self) -> RigidTransform {
        let rotation = self.rotation.inverse();
        let translation = rotation * -self.translation;
        Self::new(rotation, translation)
    }
    /// `[w, x, y, z, tx, ty, tz]`
    pub fn to_quaternion_and_translation_array(&self) -> [f64; 7] {
        let q = self.rotation.quaternion();
        [q.w, q.i, q.j, q.k, self.translation[0], self.translation[1], self.translation[2]]
    }
}
impl Default for RigidTransform {
    fn default() -> Self { Self::new_identity() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn inverse_cancels() {
        let t = RigidTransform::new_from_euler_angles(0.1, -0.3, FRAC_PI_2, 0.2, 0.0, -0.04511);
        let p = Vector3::new(0.07025, 0.0299, 0.0);
        let back = t.inverse().multiply_by_point(&t.multiply_by_point(&p));
        assert!((back - p).norm() < 1e-12);
    }

    #[test]
    fn yaw_rotates_x_onto_y() {
        let t = RigidTransform::new_from_euler_angles(0.0, 0.0, FRAC_PI_2, 0.0, 0.0, 0.0);
        let p = t.multiply_by_point(&Vector3::new(1.0, 0.0, 0.0));
        assert!((p - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn quaternion_array_layout() {
        let t = RigidTransform::new_from_quaternion_and_translation(1., 0., 0., 0., -0.006, 0.0, 0.32325);
        assert_eq!(t.to_quaternion_and_translation_array(), [1., 0., 0., 0., -0.006, 0.0, 0.32325]);
    }
}
