use urdf_rs::*;
use nalgebra::{Vector3, Matrix3};
use serde::{Serialize, Deserialize};

/// This struct holds the information provided by a URDF file on a Link when parsed by urdf_rs.
/// Only the inertial properties are kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct URDFLink {
    name: String,
    inertial_origin_xyz: Vector3<f64>,
    inertial_origin_rpy: Vector3<f64>,
    inertial_matrix: Matrix3<f64>,
    inertial_mass: f64
}
impl URDFLink {
    pub fn new_from_urdf_link(link: &Link) -> Self {
        let i = &link.inertial.inertia;
        Self {
            name: link.name.clone(),
            inertial_origin_xyz: Vector3::new(link.inertial.origin.xyz[0], link.inertial.origin.xyz[1], link.inertial.origin.xyz[2]),
            inertial_origin_rpy: Vector3::new(link.inertial.origin.rpy[0], link.inertial.origin.rpy[1], link.inertial.origin.rpy[2]),
            inertial_matrix: Matrix3::new(i.ixx, i.ixy, i.ixz, i.ixy, i.iyy, i.iyz, i.ixz, i.iyz, i.izz),
            inertial_mass: link.inertial.mass.value
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn inertial_origin_xyz(&self) -> Vector3<f64> {
        self.inertial_origin_xyz
    }
    pub fn inertial_origin_rpy(&self) -> Vector3<f64> {
        self.inertial_origin_rpy
    }
    /// Rotational inertia about the center of mass, expressed in the inertial frame.
    pub fn inertial_matrix(&self) -> Matrix3<f64> {
        self.inertial_matrix
    }
    pub fn inertial_mass(&self) -> f64 {
        self.inertial_mass
    }
}
