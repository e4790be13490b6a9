use nalgebra::{Matrix3, Vector3};
use serde::{Serialize, Deserialize};
use crate::utils::utils_robot::urdf_link::URDFLink;
use crate::utils::utils_se3::rotation_and_translation::RigidTransform;

/// A Link (body) of the parsed kinematic tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    name: String,
    link_idx: usize,
    preceding_link_idx: Option<usize>,
    children_link_idxs: Vec<usize>,
    preceding_joint_idx: Option<usize>,
    children_joint_idxs: Vec<usize>,
    mass: f64,
    center_of_mass: Vector3<f64>,
    inertia: Matrix3<f64>,
    urdf_link: URDFLink,
}
impl Link {
    /// With `transform_inertia`, the rotational inertia is expressed at the link origin in the
    /// link frame.  Otherwise it is kept about the center of mass as written in the URDF.
    pub fn new(urdf_link: URDFLink, link_idx: usize, transform_inertia: bool) -> Self {
        let rpy = urdf_link.inertial_origin_rpy();
        let xyz = urdf_link.inertial_origin_xyz();
        let inertial_frame = RigidTransform::new_from_euler_angles(rpy[0], rpy[1], rpy[2], xyz[0], xyz[1], xyz[2]);
        let mass = urdf_link.inertial_mass();

        let inertia = if transform_inertia {
            let r = inertial_frame.rotation_matrix();
            let rotated = r.matrix() * urdf_link.inertial_matrix() * r.matrix().transpose();
            let c = xyz;
            rotated + mass * (Matrix3::identity() * c.dot(&c) - c * c.transpose())
        } else {
            urdf_link.inertial_matrix()
        };

        Self {
            name: urdf_link.name().to_string(),
            link_idx,
            preceding_link_idx: None,
            children_link_idxs: vec![],
            preceding_joint_idx: None,
            children_joint_idxs: vec![],
            mass,
            center_of_mass: xyz,
            inertia,
            urdf_link
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn link_idx(&self) -> usize {
        self.link_idx
    }
    pub fn preceding_link_idx(&self) -> Option<usize> {
        self.preceding_link_idx
    }
    pub fn children_link_idxs(&self) -> &Vec<usize> {
        &self.children_link_idxs
    }
    pub fn preceding_joint_idx(&self) -> Option<usize> {
        self.preceding_joint_idx
    }
    pub fn children_joint_idxs(&self) -> &Vec<usize> {
        &self.children_joint_idxs
    }
    pub fn mass(&self) -> f64 {
        self.mass
    }
    pub fn center_of_mass(&self) -> Vector3<f64> {
        self.center_of_mass
    }
    pub fn inertia(&self) -> Matrix3<f64> {
        self.inertia
    }
    pub fn urdf_link(&self) -> &URDFLink {
        &self.urdf_link
    }
    pub fn set_preceding_link_idx(&mut self, preceding_link_idx: Option<usize>) {
        self.preceding_link_idx = preceding_link_idx;
    }
    pub fn set_preceding_joint_idx(&mut self, preceding_joint_idx: Option<usize>) {
        self.preceding_joint_idx = preceding_joint_idx;
    }
    pub fn add_child_joint_idx(&mut self, idx: usize) {
        self.children_joint_idxs.push(idx);
    }
    pub fn add_child_link_idx(&mut self, idx: usize) {
        self.children_link_idxs.push(idx);
    }
}
