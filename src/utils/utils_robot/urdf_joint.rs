use urdf_rs::*;
use nalgebra::{Vector3};
use serde::{Serialize, Deserialize};

/// This struct holds the information provided by a URDF file on a Joint when parsed by urdf_rs.
/// Only the origin, the type and the limits are kept; the tree connections live on `Joint`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct URDFJoint {
    name: String,
    joint_type: JointTypeWrapper,
    origin_xyz: Vector3<f64>,
    origin_rpy: Vector3<f64>,
    limits_lower: f64,
    limits_upper: f64,
    limits_effort: f64,
    limits_velocity: f64
}
impl URDFJoint {
    pub fn new_from_urdf_joint(joint: &Joint) -> Self {
        Self {
            name: joint.name.clone(),
            joint_type: JointTypeWrapper::from_joint_type(&joint.joint_type),
            origin_xyz: Vector3::new(joint.origin.xyz[0], joint.origin.xyz[1], joint.origin.xyz[2]),
            origin_rpy: Vector3::new(joint.origin.rpy[0], joint.origin.rpy[1], joint.origin.rpy[2]),
            limits_lower: joint.limit.lower,
            limits_upper: joint.limit.upper,
            limits_effort: joint.limit.effort,
            limits_velocity: joint.limit.velocity
        }
    }
    /// The joint attaching the base link to the world.  It is not part of the URDF file.
    pub fn new_root_joint(fixed_base: bool) -> Self {
        Self {
            name: "Root".to_string(),
            joint_type: if fixed_base { JointTypeWrapper::Fixed } else { JointTypeWrapper::Floating },
            origin_xyz: Default::default(),
            origin_rpy: Default::default(),
            limits_lower: 0.0,
            limits_upper: 0.0,
            limits_effort: 0.0,
            limits_velocity: 0.0
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn joint_type(&self) -> &JointTypeWrapper {
        &self.joint_type
    }
    pub fn origin_xyz(&self) -> Vector3<f64> {
        self.origin_xyz
    }
    pub fn origin_rpy(&self) -> Vector3<f64> {
        self.origin_rpy
    }
    pub fn limits_lower(&self) -> f64 {
        self.limits_lower
    }
    pub fn limits_upper(&self) -> f64 {
        self.limits_upper
    }
    pub fn limits_effort(&self) -> f64 {
        self.limits_effort
    }
    pub fn limits_velocity(&self) -> f64 {
        self.limits_velocity
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JointTypeWrapper {
    Revolute,
    Continuous,
    Prismatic,
    Fixed,
    Floating,
    Planar,
    Spherical
}
impl JointTypeWrapper {
    pub fn from_joint_type(j: &JointType) -> Self {
        match j {
            JointType::Revolute => { Self::Revolute }
            JointType::Continuous => { Self::Continuous }
            JointType::Prismatic => { Self::Prismatic }
            JointType::Fixed => { Self::Fixed }
            JointType::Floating => { Self::Floating }
            JointType::Planar => { Self::Planar }
            JointType::Spherical => { Self::Spherical }
        }
    }
    pub fn num_dofs(&self) -> usize {
        match self {
            JointTypeWrapper::Revolute => { 1 }
            JointTypeWrapper::Continuous => { 1 }
            JointTypeWrapper::Prismatic => { 1 }
            JointTypeWrapper::Fixed => { 0 }
            JointTypeWrapper::Floating => { 6 }
            JointTypeWrapper::Planar => { 3 }
            JointTypeWrapper::Spherical => { 3 }
        }
    }
    /// Whether the joint range is bounded by the `<limit>` tag.
    pub fn is_position_bounded(&self) -> bool {
        match self {
            JointTypeWrapper::Revolute | JointTypeWrapper::Prismatic => { true }
            _ => { false }
        }
    }
}
