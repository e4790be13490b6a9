use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};
use crate::robot_modules::robot_model_module::RobotModelModule;
use crate::utils::utils_robot::joint::Joint;

/// Position, velocity and torque bounds of every joint with degrees of freedom, one value
/// per dof.  Unbounded quantities are infinite.
///
/// Infinite values are serialized as `null` (`None` in RON) so that JSON dumps can be loaded back.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JointBounds {
    #[serde(with = "lower_bounds")]
    pub position_lower: BTreeMap<String, Vec<f64>>,
    #[serde(with = "upper_bounds")]
    pub position_upper: BTreeMap<String, Vec<f64>>,
    #[serde(with = "lower_bounds")]
    pub velocity_lower: BTreeMap<String, Vec<f64>>,
    #[serde(with = "upper_bounds")]
    pub velocity_upper: BTreeMap<String, Vec<f64>>,
    #[serde(with = "lower_bounds")]
    pub torque_lower: BTreeMap<String, Vec<f64>>,
    #[serde(with = "upper_bounds")]
    pub torque_upper: BTreeMap<String, Vec<f64>>
}
impl JointBounds {
    pub fn from_robot_model_module(robot_model_module: &RobotModelModule) -> Self {
        let mut out_self = Self::default();
        for j in robot_model_module.joints() {
            if j.num_dofs() == 0 { continue; }
            out_self.add_joint(j);
        }
        out_self
    }
    fn add_joint(&mut self, j: &Joint) {
        let n = j.num_dofs();
        let u = j.urdf_joint();

        let (ql, qu) = if j.joint_type().is_position_bounded() {
            (u.limits_lower(), u.limits_upper())
        } else {
            (f64::NEG_INFINITY, f64::INFINITY)
        };
        let v = if u.limits_velocity() > 0.0 { u.limits_velocity() } else { f64::INFINITY };
        let t = if u.limits_effort() > 0.0 { u.limits_effort() } else { f64::INFINITY };

        let name = j.name().to_string();
        self.position_lower.insert(name.clone(), vec![ql; n]);
        self.position_upper.insert(name.clone(), vec![qu; n]);
        self.velocity_lower.insert(name.clone(), vec![-v; n]);
        self.velocity_upper.insert(name.clone(), vec![v; n]);
        self.torque_lower.insert(name.clone(), vec![-t; n]);
        self.torque_upper.insert(name, vec![t; n]);
    }
    pub fn num_joints(&self) -> usize {
        self.position_lower.len()
    }
}

type OptionalBounds = BTreeMap<String, Vec<Option<f64>>>;

fn finite_or_none(m: &BTreeMap<String, Vec<f64>>) -> OptionalBounds {
    m.iter().map(|(k, v)| (k.clone(), v.iter().map(|x| if x.is_finite() { Some(*x) } else { None }).collect())).collect()
}

fn none_to(m: OptionalBounds, unbounded: f64) -> BTreeMap<String, Vec<f64>> {
    m.into_iter().map(|(k, v)| (k, v.into_iter().map(|x| x.unwrap_or(unbounded)).collect())).collect()
}

mod lower_bounds {
    use serde::{Serializer, Deserializer};
    use super::*;

    pub fn serialize<S: Serializer>(m: &BTreeMap<String, Vec<f64>>, serializer: S) -> Result<S::Ok, S::Error> {
        finite_or_none(m).serialize(serializer)
    }
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeMap<String, Vec<f64>>, D::Error> {
        Ok(none_to(OptionalBounds::deserialize(deserializer)?, f64::NEG_INFINITY))
    }
}

mod upper_bounds {
    use serde::{Serializer, Deserializer};
    use super::*;

    pub fn serialize<S: Serializer>(m: &BTreeMap<String, Vec<f64>>, serializer: S) -> Result<S::Ok, S::Error> {
        finite_or_none(m).serialize(serializer)
    }
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BTreeMap<String, Vec<f64>>, D::Error> {
        Ok(none_to(OptionalBounds::deserialize(deserializer)?, f64::INFINITY))
    }
}
