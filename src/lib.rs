//! A static description of the NAO humanoid robot.
//! The URDF model is parsed with `urdf-rs` into a kinematic tree, and constant tables
//! (half-sitting pose, force and body sensors, self-collision pairs, grippers, convex hull
//! files, balance controller tuning) are built on top of it.  The resulting
//! `RobotDescriptionModule` is immutable once constructed and is meant to be handed, by
//! reference, to a control framework.

pub mod robot_modules;
pub mod utils;
