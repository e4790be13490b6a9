use std::collections::BTreeMap;
use std::f64::consts::PI;
use serde::{Serialize, Deserialize};
use crate::robot_modules::robot_model_module::RobotModelModule;
use crate::utils::utils_console::print_warning;

/// Half-sitting angles in degrees.  Arm values are tabulated in radians on the robot side,
/// hence the conversions.
pub const NAO_HALF_SITTING_DEGREES: &[(&str, f64)] = &[
    ("HeadYaw", 0.0),
    ("HeadPitch", 0.0),

    ("LHipYawPitch", 0.0),
    ("LHipRoll", 0.0),
    ("LHipPitch", -18.551),
    ("LKneePitch", 35.023),
    ("LAnklePitch", -16.418),
    ("LAnkleRoll", 0.0),

    ("RHipYawPitch", 0.0),
    ("RHipRoll", 0.0),
    ("RHipPitch", -18.551),
    ("RKneePitch", 35.023),
    ("RAnklePitch", -16.418),
    ("RAnkleRoll", 0.0),

    ("LShoulderPitch", 1.49 * 180.0 / PI),
    ("LShoulderRoll", 0.30 * 180.0 / PI),
    ("LElbowYaw", 0.0),
    ("LElbowRoll", -0.28 * 180.0 / PI),
    ("LWristYaw", 0.0),
    ("LHand", 0.50 * 180.0 / PI),
    ("LFinger11", 0.0),
    ("LFinger12", 0.0),
    ("LFinger13", 0.0),
    ("LFinger21", 0.0),
    ("LFinger22", 0.0),
    ("LFinger23", 0.0),
    ("LThumb1", 0.0),
    ("LThumb2", 0.0),

    ("RShoulderPitch", 1.49 * 180.0 / PI),
    ("RShoulderRoll", -0.30 * 180.0 / PI),
    ("RElbowYaw", 0.0),
    ("RElbowRoll", 0.28 * 180.0 / PI),
    ("RWristYaw", 0.0),
    ("RHand", 0.50 * 180.0 / PI),
    ("RFinger11", 0.0),
    ("RFinger12", 0.0),
    ("RFinger13", 0.0),
    ("RFinger21", 0.0),
    ("RFinger22", 0.0),
    ("RFinger23", 0.0),
    ("RThumb1", 0.0),
    ("RThumb2", 0.0)
];

/// Joint name to reference angles, in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HalfSittingTable {
    degrees: BTreeMap<String, Vec<f64>>
}
impl HalfSittingTable {
    pub fn new(degrees: BTreeMap<String, Vec<f64>>) -> Self {
        Self { degrees }
    }
    pub fn nao() -> Self {
        let degrees = NAO_HALF_SITTING_DEGREES.iter().map(|(n, d)| (n.to_string(), vec![*d])).collect();
        Self::new(degrees)
    }
    pub fn degrees(&self) -> &BTreeMap<String, Vec<f64>> {
        &self.degrees
    }
    /// Walks the joints of the model in tree order.  Tabulated joints get their angles converted
    /// to radians.  A joint with degrees of freedom that is neither `Root` nor tabulated is
    /// reported once as a warning and left out of the pose.
    pub fn derive_half_sitting_pose(&self, robot_model_module: &RobotModelModule) -> HalfSittingPose {
        let mut pose = BTreeMap::new();
        let mut warnings = vec![];

        for j in robot_model_module.joints() {
            match self.degrees.get(j.name()) {
                Some(angles) => {
                    let radians = angles.iter().map(|a| PI * a / 180.0).collect();
                    pose.insert(j.name().to_string(), radians);
                }
                None => {
                    if j.name() != "Root" && j.num_dofs() > 0 {
                        let w = MissingHalfSittingJoint { joint_name: j.name().to_string(), num_dofs: j.num_dofs() };
                        print_warning(&w.to_string());
                        warnings.push(w);
                    }
                }
            }
        }

        HalfSittingPose { pose, warnings }
    }
}

/// A joint that has degrees of freedom but no half-sitting entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingHalfSittingJoint {
    pub joint_name: String,
    pub num_dofs: usize
}
impl std::fmt::Display for MissingHalfSittingJoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Joint {} has {} dof but is not part of the half sitting posture", self.joint_name, self.num_dofs)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HalfSittingPose {
    /// Joint name to angles in radians.
    pub pose: BTreeMap<String, Vec<f64>>,
    pub warnings: Vec<MissingHalfSittingJoint>
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot_modules::robot_model_module::UrdfParserOptions;

    const LEG_URDF: &str = r#"<?xml version="1.0"?>
<robot name="leg">
  <link name="base_link"/>
  <link name="LThigh"/>
  <link name="LTibia"/>
  <link name="LSole"/>
  <link name="LToe"/>
  <joint name="LHipPitch" type="revolute">
    <parent link="base_link"/>
    <child link="LThigh"/>
    <limit lower="-1.53" upper="0.48" effort="1.6" velocity="6.4"/>
  </joint>
  <joint name="LKneePitch" type="revolute">
    <parent link="LThigh"/>
    <child link="LTibia"/>
    <limit lower="-0.09" upper="2.11" effort="1.6" velocity="6.4"/>
  </joint>
  <joint name="LSoleFixed" type="fixed">
    <parent link="LTibia"/>
    <child link="LSole"/>
  </joint>
  <joint name="LToePitch" type="revolute">
    <parent link="LSole"/>
    <child link="LToe"/>
    <limit lower="-0.5" upper="0.5" effort="1.0" velocity="2.0"/>
  </joint>
</robot>"#;

    fn leg() -> RobotModelModule {
        RobotModelModule::new_from_urdf_string(LEG_URDF, &UrdfParserOptions::default()).unwrap()
    }

    #[test]
    fn knee_is_converted_to_radians() {
        let res = HalfSittingTable::nao().derive_half_sitting_pose(&leg());
        let knee = res.pose["LKneePitch"][0];
        assert!((knee - 35.023 * PI / 180.0).abs() < 1e-12);
        assert!((knee - 0.6112667).abs() < 1e-6);
        assert!((res.pose["LHipPitch"][0] - (-18.551f64).to_radians()).abs() < 1e-12);
    }

    #[test]
    fn untabulated_joint_warns_once() {
        let res = HalfSittingTable::nao().derive_half_sitting_pose(&leg());
        assert_eq!(res.warnings, vec![MissingHalfSittingJoint { joint_name: "LToePitch".to_string(), num_dofs: 1 }]);
        assert!(!res.pose.contains_key("LToePitch"));
        assert!(!res.pose.contains_key("LSoleFixed"));
        assert!(!res.pose.contains_key("Root"));
    }

    #[test]
    fn tabulated_joints_absent_from_the_tree_are_skipped() {
        let res = HalfSittingTable::nao().derive_half_sitting_pose(&leg());
        assert_eq!(res.pose.len(), 2);
        assert!(!res.pose.contains_key("HeadYaw"));
    }

    #[test]
    fn arm_values_come_back_as_radians() {
        let table = HalfSittingTable::nao();
        let shoulder = table.degrees()["LShoulderPitch"][0];
        assert!((shoulder.to_radians() - 1.49).abs() < 1e-12);
    }

    #[test]
    fn warning_message() {
        let w = MissingHalfSittingJoint { joint_name: "LToePitch".to_string(), num_dofs: 1 };
        assert_eq!(w.to_string(), "Joint LToePitch has 1 dof but is not part of the half sitting posture");
    }
}
