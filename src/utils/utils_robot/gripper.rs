use serde::{Serialize, Deserialize};

/// An end-effector gripper, driven by its active joints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GripperSpec {
    pub name: String,
    pub active_joints: Vec<String>,
    /// Open and closed positions are swapped with respect to the joint limits.
    pub reverse_limits: bool
}
impl GripperSpec {
    pub fn new(name: &str, active_joints: &[&str], reverse_limits: bool) -> Self {
        Self {
            name: name.to_string(),
            active_joints: active_joints.iter().map(|s| s.to_string()).collect(),
            reverse_limits
        }
    }
}

pub fn nao_grippers() -> Vec<GripperSpec> {
    vec![
        GripperSpec::new("l_gripper", &["LHand"], false),
        GripperSpec::new("r_gripper", &["RHand"], false)
    ]
}

/// Bodies carrying a passive spring.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Springs {
    pub bodies: Vec<String>
}
