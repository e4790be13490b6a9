use nalgebra::Vector2;
use serde::{Serialize, Deserialize};
use crate::utils::utils_se3::rotation_and_translation::RigidTransform;

/// Tuning of the LIPM (linear inverted pendulum) balance stabilizer.  The stabilizer itself
/// lives in the control framework.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LipmStabilizerConfig {
    pub left_foot_surface: String,
    pub right_foot_surface: String,
    pub torso_body_name: String,
    pub com_height: f64,
    pub com_active_joints: Vec<String>,
    pub torso_pitch: f64,
    pub cop_admittance: Vector2<f64>,
    pub dcm_prop_gain: f64,
    pub dcm_integral_gain: f64,
    pub dcm_deriv_gain: f64,
    pub dcm_derivator_time_constant: f64,
    pub dcm_integrator_time_constant: f64
}
impl LipmStabilizerConfig {
    pub fn nao() -> Self {
        Self {
            left_foot_surface: "LeftFootCenter".to_string(),
            right_foot_surface: "RightFootCenter".to_string(),
            torso_body_name: "torso".to_string(),
            com_height: 0.23,
            com_active_joints: [
                "Root", "LAnklePitch", "LAnkleRoll", "LHipPitch",
                "LHipRoll", "LHipYawPitch", "LKneePitch", "RAnklePitch",
                "RAnkleRoll", "RHipPitch", "RHipRoll", "RKneePitch"
            ].iter().map(|s| s.to_string()).collect(),
            torso_pitch: 0.0,
            cop_admittance: Vector2::new(0.01, 0.01),
            dcm_prop_gain: 5.0,
            dcm_integral_gain: 10.0,
            dcm_deriv_gain: 0.0,
            dcm_derivator_time_constant: 1.0,
            dcm_integrator_time_constant: 10.0
        }
    }
}

/// Base link posture in half-sitting, used when no attitude estimate is available.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DefaultAttitude {
    pub pose: RigidTransform
}
impl DefaultAttitude {
    pub fn nao() -> Self {
        Self { pose: RigidTransform::new_from_quaternion_and_translation(1., 0., 0., 0., -0.006, 0.0, 0.32325) }
    }
    /// `[w, x, y, z, tx, ty, tz]`
    pub fn to_array(&self) -> [f64; 7] {
        self.pose.to_quaternion_and_translation_array()
    }
}
