use std::collections::{HashMap, HashSet};
use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::utils::utils_console::{robot_print, PrintColor, PrintMode};
use crate::utils::utils_errors::RobotDescriptionError;
use crate::utils::utils_robot::joint::Joint;
use crate::utils::utils_robot::link::Link;
use crate::utils::utils_robot::urdf_joint::URDFJoint;
use crate::utils::utils_robot::urdf_link::URDFLink;

/// Options handed to the URDF parser.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UrdfParserOptions {
    /// When false, the base link is attached to the world through a 6 dof floating `Root` joint.
    pub fixed_base: bool,
    /// Links removed from the tree, together with their joints and everything downstream of them.
    pub filtered_links: Vec<String>,
    /// Express link inertia at the link origin instead of the center of mass.
    pub transform_inertia: bool,
    pub base_link: String
}
impl Default for UrdfParserOptions {
    fn default() -> Self {
        Self {
            fixed_base: false,
            filtered_links: vec![],
            transform_inertia: true,
            base_link: "base_link".to_string()
        }
    }
}

/// The kinematic tree of a robot parsed from a URDF file.
///
/// Links and joints are stored in depth-first order starting from the base link.  Joint 0 is
/// always the `Root` joint connecting the base link to the world; link 0 is the base link.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RobotModelModule {
    robot_name: String,
    links: Vec<Link>,
    joints: Vec<Joint>,
    base_link_idx: usize,
    filtered_links: Vec<String>,
    link_name_to_idx_hashmap: HashMap<String, usize>,
    joint_name_to_idx_hashmap: HashMap<String, usize>
}
impl RobotModelModule {
    pub fn new_from_urdf_file(path: &Path, options: &UrdfParserOptions) -> Result<Self, RobotDescriptionError> {
        if !path.exists() {
            return Err(RobotDescriptionError::new_missing_resource_error("Could not open urdf", &path.display().to_string(), file!(), line!()));
        }
        let urdf_robot = urdf_rs::read_file(path)
            .map_err(|e| RobotDescriptionError::new_urdf_parse_error(&format!("{:?}: {}", path, e), file!(), line!()))?;
        Self::new_from_urdf_robot(&urdf_robot, options)
    }
    pub fn new_from_urdf_string(urdf_str: &str, options: &UrdfParserOptions) -> Result<Self, RobotDescriptionError> {
        let urdf_robot = urdf_rs::read_from_string(urdf_str)
            .map_err(|e| RobotDescriptionError::new_urdf_parse_error(&e.to_string(), file!(), line!()))?;
        Self::new_from_urdf_robot(&urdf_robot, options)
    }
    pub fn new_from_urdf_robot(urdf_robot: &urdf_rs::Robot, options: &UrdfParserOptions) -> Result<Self, RobotDescriptionError> {
        let filtered: HashSet<&str> = options.filtered_links.iter().map(|s| s.as_str()).collect();

        if filtered.contains(options.base_link.as_str()) {
            return Err(RobotDescriptionError::new_urdf_parse_error(&format!("Base link {} is part of the filtered links.", options.base_link), file!(), line!()));
        }

        let urdf_links: HashMap<&str, &urdf_rs::Link> = urdf_robot.links.iter().map(|l| (l.name.as_str(), l)).collect();
        let base_urdf_link = match urdf_links.get(options.base_link.as_str()) {
            None => {
                return Err(RobotDescriptionError::new_urdf_parse_error(&format!("Base link {} is not part of robot {}.", options.base_link, urdf_robot.name), file!(), line!()));
            }
            Some(l) => { *l }
        };

        let mut joints_by_parent: HashMap<&str, Vec<&urdf_rs::Joint>> = HashMap::new();
        for j in &urdf_robot.joints {
            joints_by_parent.entry(j.parent.link.as_str()).or_insert_with(Vec::new).push(j);
        }

        let mut out_self = Self {
            robot_name: urdf_robot.name.clone(),
            links: vec![],
            joints: vec![],
            base_link_idx: 0,
            filtered_links: options.filtered_links.clone(),
            link_name_to_idx_hashmap: HashMap::new(),
            joint_name_to_idx_hashmap: HashMap::new()
        };

        let base_link_idx = out_self.add_link(URDFLink::new_from_urdf_link(base_urdf_link), options.transform_inertia);
        let root_joint_idx = out_self.add_joint(URDFJoint::new_root_joint(options.fixed_base));
        out_self.joints[root_joint_idx].set_child_link_idx(Some(base_link_idx));
        out_self.links[base_link_idx].set_preceding_joint_idx(Some(root_joint_idx));
        out_self.base_link_idx = base_link_idx;

        let mut stack = vec![base_link_idx];
        while let Some(link_idx) = stack.pop() {
            let link_name = out_self.links[link_idx].name().to_string();
            let children = match joints_by_parent.get(link_name.as_str()) {
                None => { continue; }
                Some(c) => { c }
            };

            let mut new_child_link_idxs = vec![];
            for j in children {
                let child_name = j.child.link.as_str();
                if filtered.contains(child_name) || out_self.link_name_to_idx_hashmap.contains_key(child_name) { continue; }
                let child_urdf_link = match urdf_links.get(child_name) {
                    None => {
                        return Err(RobotDescriptionError::new_urdf_parse_error(&format!("Joint {} refers to unknown child link {}.", j.name, child_name), file!(), line!()));
                    }
                    Some(l) => { *l }
                };

                let joint_idx = out_self.add_joint(URDFJoint::new_from_urdf_joint(j));
                let child_link_idx = out_self.add_link(URDFLink::new_from_urdf_link(child_urdf_link), options.transform_inertia);

                out_self.joints[joint_idx].set_preceding_link_idx(Some(link_idx));
                out_self.joints[joint_idx].set_child_link_idx(Some(child_link_idx));
                out_self.links[child_link_idx].set_preceding_link_idx(Some(link_idx));
                out_self.links[child_link_idx].set_preceding_joint_idx(Some(joint_idx));
                out_self.links[link_idx].add_child_link_idx(child_link_idx);
                out_self.links[link_idx].add_child_joint_idx(joint_idx);
                new_child_link_idxs.push(child_link_idx);
            }

            // Reversed so that siblings are expanded in file order.
            for idx in new_child_link_idxs.into_iter().rev() { stack.push(idx); }
        }

        Ok(out_self)
    }
    fn add_link(&mut self, urdf_link: URDFLink, transform_inertia: bool) -> usize {
        let idx = self.links.len();
        self.link_name_to_idx_hashmap.insert(urdf_link.name().to_string(), idx);
        self.links.push(Link::new(urdf_link, idx, transform_inertia));
        idx
    }
    fn add_joint(&mut self, urdf_joint: URDFJoint) -> usize {
        let idx = self.joints.len();
        self.joint_name_to_idx_hashmap.insert(urdf_joint.name().to_string(), idx);
        self.joints.push(Joint::new(urdf_joint, idx));
        idx
    }
    pub fn robot_name(&self) -> &str {
        &self.robot_name
    }
    pub fn links(&self) -> &Vec<Link> {
        &self.links
    }
    pub fn joints(&self) -> &Vec<Joint> {
        &self.joints
    }
    pub fn base_link_idx(&self) -> usize {
        self.base_link_idx
    }
    pub fn filtered_links(&self) -> &Vec<String> {
        &self.filtered_links
    }
    /// Total number of degrees of freedom, `Root` included.
    pub fn num_dofs(&self) -> usize {
        self.joints.iter().map(|j| j.num_dofs()).sum()
    }
    pub fn has_link(&self, link_name: &str) -> bool {
        self.link_name_to_idx_hashmap.contains_key(link_name)
    }
    pub fn has_joint(&self, joint_name: &str) -> bool {
        self.joint_name_to_idx_hashmap.contains_key(joint_name)
    }
    pub fn get_link_idx_from_name(&self, link_name: &str) -> Option<usize> {
        self.link_name_to_idx_hashmap.get(link_name).copied()
    }
    pub fn get_joint_idx_from_name(&self, joint_name: &str) -> Option<usize> {
        self.joint_name_to_idx_hashmap.get(joint_name).copied()
    }
    pub fn get_joint_from_name(&self, joint_name: &str) -> Option<&Joint> {
        self.get_joint_idx_from_name(joint_name).map(|i| &self.joints[i])
    }
    pub fn print_summary(&self) {
        robot_print(&format!("Robot {}: {} links, {} joints, {} dofs", self.robot_name, self.links.len(), self.joints.len(), self.num_dofs()), PrintMode::Println, PrintColor::Magenta, true);
        for j in &self.joints { j.print_summary(); }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARM_URDF: &str = r#"<?xml version="1.0"?>
<robot name="arm">
  <link name="base_link"/>
  <link name="upper">
    <inertial>
      <origin xyz="0 0 0.1" rpy="0 0 0"/>
      <mass value="2.0"/>
      <inertia ixx="0.01" ixy="0" ixz="0" iyy="0.01" iyz="0" izz="0.02"/>
    </inertial>
  </link>
  <link name="lower"/>
  <link name="tool"/>
  <link name="orphan"/>
  <joint name="shoulder" type="revolute">
    <parent link="base_link"/>
    <child link="upper"/>
    <axis xyz="0 1 0"/>
    <limit lower="-1.0" upper="1.5" effort="10" velocity="2"/>
  </joint>
  <joint name="elbow" type="continuous">
    <parent link="upper"/>
    <child link="lower"/>
    <origin xyz="0 0 0.2" rpy="0 0 0"/>
  </joint>
  <joint name="tool_mount" type="fixed">
    <parent link="lower"/>
    <child link="tool"/>
  </joint>
</robot>"#;

    #[test]
    fn tree_starts_with_floating_root() {
        let m = RobotModelModule::new_from_urdf_string(ARM_URDF, &UrdfParserOptions::default()).unwrap();
        assert_eq!(m.robot_name(), "arm");
        assert_eq!(m.joints()[0].name(), "Root");
        assert_eq!(m.joints()[0].num_dofs(), 6);
        assert_eq!(m.links()[m.base_link_idx()].name(), "base_link");
        assert_eq!(m.num_dofs(), 8);
        assert!(!m.has_link("orphan"));
    }

    #[test]
    fn fixed_base_root_has_no_dof() {
        let options = UrdfParserOptions { fixed_base: true, ..Default::default() };
        let m = RobotModelModule::new_from_urdf_string(ARM_URDF, &options).unwrap();
        assert_eq!(m.joints()[0].num_dofs(), 0);
        assert_eq!(m.num_dofs(), 2);
    }

    #[test]
    fn filtering_a_link_drops_its_subtree() {
        let options = UrdfParserOptions { filtered_links: vec!["lower".to_string()], ..Default::default() };
        let m = RobotModelModule::new_from_urdf_string(ARM_URDF, &options).unwrap();
        assert!(m.has_link("upper"));
        assert!(!m.has_link("lower"));
        assert!(!m.has_link("tool"));
        assert!(!m.has_joint("elbow"));
        assert!(!m.has_joint("tool_mount"));
    }

    #[test]
    fn parent_child_indices_are_consistent() {
        let m = RobotModelModule::new_from_urdf_string(ARM_URDF, &UrdfParserOptions::default()).unwrap();
        let elbow = m.get_joint_from_name("elbow").unwrap();
        let upper = m.get_link_idx_from_name("upper").unwrap();
        let lower = m.get_link_idx_from_name("lower").unwrap();
        assert_eq!(elbow.preceding_link_idx(), Some(upper));
        assert_eq!(elbow.child_link_idx(), Some(lower));
        assert_eq!(m.links()[lower].preceding_link_idx(), Some(upper));
        assert!(m.links()[upper].children_link_idxs().contains(&lower));
        assert!((elbow.origin_offset().translation()[2] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn inertia_is_moved_to_link_origin() {
        let m = RobotModelModule::new_from_urdf_string(ARM_URDF, &UrdfParserOptions::default()).unwrap();
        let upper = &m.links()[m.get_link_idx_from_name("upper").unwrap()];
        // Parallel axis: 0.01 + 2.0 * 0.1^2 about x and y, z unchanged.
        assert!((upper.inertia()[(0, 0)] - 0.03).abs() < 1e-12);
        assert!((upper.inertia()[(1, 1)] - 0.03).abs() < 1e-12);
        assert!((upper.inertia()[(2, 2)] - 0.02).abs() < 1e-12);

        let options = UrdfParserOptions { transform_inertia: false, ..Default::default() };
        let m = RobotModelModule::new_from_urdf_string(ARM_URDF, &options).unwrap();
        let upper = &m.links()[m.get_link_idx_from_name("upper").unwrap()];
        assert!((upper.inertia()[(0, 0)] - 0.01).abs() < 1e-12);
    }

    #[test]
    fn unknown_or_filtered_base_link_is_an_error() {
        let options = UrdfParserOptions { base_link: "torso".to_string(), ..Default::default() };
        assert!(matches!(RobotModelModule::new_from_urdf_string(ARM_URDF, &options), Err(RobotDescriptionError::UrdfParseError(_))));

        let options = UrdfParserOptions { filtered_links: vec!["base_link".to_string()], ..Default::default() };
        assert!(matches!(RobotModelModule::new_from_urdf_string(ARM_URDF, &options), Err(RobotDescriptionError::UrdfParseError(_))));
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let res = RobotModelModule::new_from_urdf_file(Path::new("/no/such/dir/urdf/nao.urdf"), &UrdfParserOptions::default());
        match res {
            Err(RobotDescriptionError::MissingResourceError(s)) => { assert!(s.contains("/no/such/dir/urdf/nao.urdf")); }
            _ => { panic!("expected a missing resource error"); }
        }
    }
}
