pub mod gripper;
pub mod joint;
pub mod link;
pub mod robot_variant;
pub mod self_collision;
pub mod sensors;
pub mod stabilizer;
pub mod urdf_joint;
pub mod urdf_link;
