use serde::{Serialize, Deserialize};
use crate::utils::utils_se3::rotation_and_translation::RigidTransform;

/// A force sensor (here, the foot pressure cells) attached to a body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForceSensor {
    name: String,
    parent_body: String,
    x_p_f: RigidTransform
}
impl ForceSensor {
    pub fn new(name: &str, parent_body: &str, x_p_f: RigidTransform) -> Self {
        Self { name: name.to_string(), parent_body: parent_body.to_string(), x_p_f }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn parent_body(&self) -> &str {
        &self.parent_body
    }
    /// Sensor frame expressed in the parent body frame.
    pub fn x_p_f(&self) -> &RigidTransform {
        &self.x_p_f
    }
}

/// An inertial sensor (accelerometer, gyrometer) attached to a body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodySensor {
    name: String,
    parent_body: String,
    x_b_s: RigidTransform
}
impl BodySensor {
    pub fn new(name: &str, parent_body: &str, x_b_s: RigidTransform) -> Self {
        Self { name: name.to_string(), parent_body: parent_body.to_string(), x_b_s }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn parent_body(&self) -> &str {
        &self.parent_body
    }
    pub fn x_b_s(&self) -> &RigidTransform {
        &self.x_b_s
    }
}

/// Height of the sole pressure cells below the ankle frame.
pub const ANKLE_Z: f64 = -0.04511;

/// Planar position of the four pressure cells of one foot, in the ankle frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FootPressureLayout {
    pub front_left: (f64, f64),
    pub front_right: (f64, f64),
    pub rear_left: (f64, f64),
    pub rear_right: (f64, f64)
}
impl FootPressureLayout {
    pub fn nao_left_foot() -> Self {
        Self {
            front_left: (0.07025, 0.0299),
            front_right: (0.07025, -0.0231),
            rear_left: (-0.03025, 0.0299),
            rear_right: (-0.02965, -0.0191)
        }
    }
    pub fn nao_right_foot() -> Self {
        Self {
            front_left: (0.07025, 0.0231),
            front_right: (0.07025, -0.0299),
            rear_left: (-0.03025, 0.0191),
            rear_right: (-0.02965, -0.0299)
        }
    }
}

/// The six force sensors of one foot: four pressure cells, the total weight and the
/// foot wrench sensor, the latter two at the ankle origin.
///
/// `prefix` names the cells (`LF`, `RF`), `side` names the foot sensor (`Left`, `Right`).
pub fn foot_force_sensors(prefix: &str, side: &str, link: &str, layout: &FootPressureLayout) -> Vec<ForceSensor> {
    let at = |(x, y): (f64, f64)| RigidTransform::new_from_translation(x, y, ANKLE_Z);
    vec![
        ForceSensor::new(&format!("{}srFR", prefix), link, at(layout.front_right)),
        ForceSensor::new(&format!("{}srRR", prefix), link, at(layout.rear_right)),
        ForceSensor::new(&format!("{}srFL", prefix), link, at(layout.front_left)),
        ForceSensor::new(&format!("{}srRL", prefix), link, at(layout.rear_left)),
        ForceSensor::new(&format!("{}_TOTAL_WEIGHT", prefix), link, at((0.0, 0.0))),
        // TODO: add an observer turning the pressure cells into a wrench for this sensor.
        ForceSensor::new(&format!("{}FootForceSensor", side), link, at((0.0, 0.0)))
    ]
}

pub fn nao_force_sensors() -> Vec<ForceSensor> {
    let mut out_vec = foot_force_sensors("LF", "Left", "l_ankle", &FootPressureLayout::nao_left_foot());
    out_vec.extend(foot_force_sensors("RF", "Right", "r_ankle", &FootPressureLayout::nao_right_foot()));
    out_vec
}

pub fn nao_body_sensors() -> Vec<BodySensor> {
    vec![
        BodySensor::new("Accelerometer", "torso", RigidTransform::new_from_translation(-0.008, 0.00606, 0.027)),
        BodySensor::new("Gyrometer", "torso", RigidTransform::new_from_translation(-0.008, 0.006, 0.029))
    ]
}
