use serde::{Serialize, Deserialize};
use crate::utils::utils_console::{robot_print, PrintColor, PrintMode};
use crate::utils::utils_robot::urdf_joint::{JointTypeWrapper, URDFJoint};
use crate::utils::utils_se3::rotation_and_translation::RigidTransform;

/// A Joint of the parsed kinematic tree.  Indices refer to the owning `RobotModelModule`.
/// The number of degrees of freedom follows the joint type: one for revolute, continuous and
/// prismatic joints, none for fixed joints, six for the floating `Root` joint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    name: String,
    joint_idx: usize,
    preceding_link_idx: Option<usize>,
    child_link_idx: Option<usize>,
    origin_offset: RigidTransform,
    urdf_joint: URDFJoint
}
impl Joint {
    pub fn new(urdf_joint: URDFJoint, joint_idx: usize) -> Self {
        let rpy = urdf_joint.origin_rpy();
        let xyz = urdf_joint.origin_xyz();

        Self {
            name: urdf_joint.name().to_string(),
            joint_idx,
            preceding_link_idx: None,
            child_link_idx: None,
            origin_offset: RigidTransform::new_from_euler_angles(rpy[0], rpy[1], rpy[2], xyz[0], xyz[1], xyz[2]),
            urdf_joint
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn joint_idx(&self) -> usize {
        self.joint_idx
    }
    pub fn joint_type(&self) -> &JointTypeWrapper {
        self.urdf_joint.joint_type()
    }
    pub fn num_dofs(&self) -> usize {
        self.urdf_joint.joint_type().num_dofs()
    }
    pub fn preceding_link_idx(&self) -> Option<usize> {
        self.preceding_link_idx
    }
    pub fn child_link_idx(&self) -> Option<usize> {
        self.child_link_idx
    }
    /// Transform from the parent link frame to the joint frame.
    pub fn origin_offset(&self) -> &RigidTransform {
        &self.origin_offset
    }
    pub fn urdf_joint(&self) -> &URDFJoint {
        &self.urdf_joint
    }
    pub fn set_preceding_link_idx(&mut self, preceding_link_idx: Option<usize>) {
        self.preceding_link_idx = preceding_link_idx;
    }
    pub fn set_child_link_idx(&mut self, child_link_idx: Option<usize>) {
        self.child_link_idx = child_link_idx;
    }
    pub fn print_summary(&self) {
        robot_print(">> Joint index: ", PrintMode::Print, PrintColor::Blue, true);
        robot_print(&format!(" {} ", self.joint_idx), PrintMode::Print, PrintColor::None, false);
        robot_print("  Joint name: ", PrintMode::Print, PrintColor::Blue, true);
        robot_print(&format!(" {} ", self.name), PrintMode::Print, PrintColor::None, false);
        robot_print("  Type: ", PrintMode::Print, PrintColor::Blue, true);
        robot_print(&format!(" {:?} ", self.joint_type()), PrintMode::Print, PrintColor::None, false);
        robot_print("  Num dofs: ", PrintMode::Print, PrintColor::Blue, true);
        let c = if self.num_dofs() > 0 { PrintColor::Green } else { PrintColor::None };
        robot_print(&format!(" {} ", self.num_dofs()), PrintMode::Println, c, false);
    }
}
