use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};
use crate::robot_modules::robot_bounds_module::JointBounds;
use crate::robot_modules::robot_convex_hull_module::{ConvexHullEntry, derive_collision_hull_table, standard_collision_files};
use crate::robot_modules::robot_model_module::{RobotModelModule, UrdfParserOptions};
use crate::robot_modules::robot_stance_module::{HalfSittingTable, MissingHalfSittingJoint};
use crate::utils::utils_console::{print_error, print_info, print_success, robot_print, PrintColor, PrintMode};
use crate::utils::utils_errors::RobotDescriptionError;
use crate::utils::utils_files::description_config::DescriptionConfig;
use crate::utils::utils_files::RobotDescriptionPaths;
use crate::utils::utils_robot::gripper::{GripperSpec, nao_grippers, Springs};
use crate::utils::utils_robot::robot_variant::{GRIPPER_LINKS, RobotVariant};
use crate::utils::utils_robot::self_collision::{nao_minimal_self_collisions, SelfCollisionPair};
use crate::utils::utils_robot::sensors::{BodySensor, ForceSensor, nao_body_sensors, nao_force_sensors};
use crate::utils::utils_robot::stabilizer::{DefaultAttitude, LipmStabilizerConfig};

/// Actuated joints in the order used by the robot's low-level interface.
pub const NAO_REF_JOINT_ORDER: [&str; 26] = [
    "HeadPitch", "HeadYaw", "LAnklePitch", "LAnkleRoll", "LElbowRoll",
    "LElbowYaw", "LHand", "LHipPitch", "LHipRoll", "LHipYawPitch",
    "LKneePitch", "LShoulderPitch", "LShoulderRoll", "LWristYaw", "RAnklePitch",
    "RAnkleRoll", "RElbowRoll", "RElbowYaw", "RHand", "RHipPitch",
    "RHipRoll", "RHipYawPitch", "RKneePitch", "RShoulderPitch", "RShoulderRoll", "RWristYaw"
];

/// The complete, immutable description of a NAO robot.
///
/// Construction runs once: the constant tables are filled, the links of the selected variant
/// are filtered out, the URDF is parsed, and the half-sitting pose, convex hull table and joint
/// bounds are derived from the parsed tree.
///
/// ```no_run
/// use nao_description::robot_modules::robot_description_module::RobotDescriptionModule;
/// use nao_description::utils::utils_robot::robot_variant::RobotVariant;
///
/// let nao = RobotDescriptionModule::new_default(RobotVariant::NoHand).expect("NAO description");
/// let knee = nao.stance()["LKneePitch"][0];
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RobotDescriptionModule {
    variant: RobotVariant,
    paths: RobotDescriptionPaths,
    gripper_links: Vec<String>,
    filtered_links: Vec<String>,
    half_sitting_table: HalfSittingTable,
    body_sensors: Vec<BodySensor>,
    force_sensors: Vec<ForceSensor>,
    minimal_self_collisions: Vec<SelfCollisionPair>,
    common_self_collisions: Vec<SelfCollisionPair>,
    grippers: Vec<GripperSpec>,
    springs: Springs,
    default_attitude: DefaultAttitude,
    lipm_stabilizer_config: LipmStabilizerConfig,
    ref_joint_order: Vec<String>,
    robot_model_module: RobotModelModule,
    stance: BTreeMap<String, Vec<f64>>,
    stance_warnings: Vec<MissingHalfSittingJoint>,
    convex_hull: BTreeMap<String, ConvexHullEntry>,
    bounds: JointBounds
}
impl RobotDescriptionModule {
    pub fn new(variant: RobotVariant, config: &DescriptionConfig) -> Result<Self, RobotDescriptionError> {
        let paths = config.paths();
        if config.verbose { print_info(&format!("Loading NAO from {}", paths.model_root().display())); }

        let minimal_self_collisions = nao_minimal_self_collisions();
        let common_self_collisions = minimal_self_collisions.clone();
        let filtered_links = variant.filtered_links();

        if !paths.urdf_path().exists() {
            let e = RobotDescriptionError::new_missing_resource_error("Could not open NAO model", &paths.urdf_path().display().to_string(), file!(), line!());
            print_error(e.message());
            return Err(e);
        }
        let options = UrdfParserOptions {
            fixed_base: config.fixed_base,
            filtered_links: filtered_links.clone(),
            transform_inertia: config.transform_inertia,
            base_link: config.base_link.clone()
        };
        let robot_model_module = RobotModelModule::new_from_urdf_file(paths.urdf_path(), &options)?;

        let half_sitting_table = HalfSittingTable::nao();
        let half_sitting = half_sitting_table.derive_half_sitting_pose(&robot_model_module);
        let convex_hull = derive_collision_hull_table(paths.convex_dir(), &standard_collision_files());
        let bounds = JointBounds::from_robot_model_module(&robot_model_module);

        let out_self = Self {
            variant,
            paths,
            gripper_links: GRIPPER_LINKS.iter().map(|s| s.to_string()).collect(),
            filtered_links,
            half_sitting_table,
            body_sensors: nao_body_sensors(),
            force_sensors: nao_force_sensors(),
            minimal_self_collisions,
            common_self_collisions,
            grippers: nao_grippers(),
            springs: Springs::default(),
            default_attitude: DefaultAttitude::nao(),
            lipm_stabilizer_config: LipmStabilizerConfig::nao(),
            ref_joint_order: NAO_REF_JOINT_ORDER.iter().map(|s| s.to_string()).collect(),
            robot_model_module,
            stance: half_sitting.pose,
            stance_warnings: half_sitting.warnings,
            convex_hull,
            bounds
        };

        if config.verbose { print_success(&format!("{} initialized", variant.module_name())); }

        Ok(out_self)
    }
    /// Loads with `DescriptionConfig::load_default()`.
    pub fn new_default(variant: RobotVariant) -> Result<Self, RobotDescriptionError> {
        let config = DescriptionConfig::load_default()?;
        Self::new(variant, &config)
    }
    pub fn variant(&self) -> RobotVariant {
        self.variant
    }
    pub fn paths(&self) -> &RobotDescriptionPaths {
        &self.paths
    }
    /// All hand links, whether or not they were filtered out.
    pub fn gripper_links(&self) -> &Vec<String> {
        &self.gripper_links
    }
    /// Links removed from the URDF before parsing.
    pub fn filtered_links(&self) -> &Vec<String> {
        &self.filtered_links
    }
    pub fn half_sitting_table(&self) -> &HalfSittingTable {
        &self.half_sitting_table
    }
    pub fn body_sensors(&self) -> &Vec<BodySensor> {
        &self.body_sensors
    }
    pub fn force_sensors(&self) -> &Vec<ForceSensor> {
        &self.force_sensors
    }
    pub fn minimal_self_collisions(&self) -> &Vec<SelfCollisionPair> {
        &self.minimal_self_collisions
    }
    pub fn common_self_collisions(&self) -> &Vec<SelfCollisionPair> {
        &self.common_self_collisions
    }
    pub fn grippers(&self) -> &Vec<GripperSpec> {
        &self.grippers
    }
    /// Left empty: the spring bodies of the robot are not known.
    pub fn springs(&self) -> &Springs {
        &self.springs
    }
    pub fn default_attitude(&self) -> &DefaultAttitude {
        &self.default_attitude
    }
    pub fn lipm_stabilizer_config(&self) -> &LipmStabilizerConfig {
        &self.lipm_stabilizer_config
    }
    pub fn ref_joint_order(&self) -> &Vec<String> {
        &self.ref_joint_order
    }
    pub fn robot_model_module(&self) -> &RobotModelModule {
        &self.robot_model_module
    }
    /// Half-sitting pose in radians.
    pub fn stance(&self) -> &BTreeMap<String, Vec<f64>> {
        &self.stance
    }
    /// Joints with degrees of freedom that have no half-sitting entry.
    pub fn stance_warnings(&self) -> &Vec<MissingHalfSittingJoint> {
        &self.stance_warnings
    }
    pub fn convex_hull(&self) -> &BTreeMap<String, ConvexHullEntry> {
        &self.convex_hull
    }
    pub fn bounds(&self) -> &JointBounds {
        &self.bounds
    }
    pub fn print_summary(&self) {
        robot_print(&format!("{} ({})", self.variant.module_name(), self.variant), PrintMode::Println, PrintColor::Magenta, true);
        robot_print(&format!("  urdf: {}", self.paths.urdf_path().display()), PrintMode::Println, PrintColor::None, false);
        robot_print(&format!("  filtered links: {}", self.filtered_links.len()), PrintMode::Println, PrintColor::None, false);
        self.robot_model_module.print_summary();

        robot_print(">> Half-sitting pose (rad)", PrintMode::Println, PrintColor::Blue, true);
        for (name, q) in &self.stance {
            robot_print(&format!("      {}: {:?}", name, q), PrintMode::Println, PrintColor::None, false);
        }
        robot_print(">> Force sensors", PrintMode::Println, PrintColor::Blue, true);
        for s in &self.force_sensors {
            let t = s.x_p_f().translation();
            robot_print(&format!("      {} on {} at [{}, {}, {}]", s.name(), s.parent_body(), t[0], t[1], t[2]), PrintMode::Println, PrintColor::None, false);
        }
        robot_print(">> Body sensors", PrintMode::Println, PrintColor::Blue, true);
        for s in &self.body_sensors {
            let t = s.x_b_s().translation();
            robot_print(&format!("      {} on {} at [{}, {}, {}]", s.name(), s.parent_body(), t[0], t[1], t[2]), PrintMode::Println, PrintColor::None, false);
        }
        robot_print(">> Self collisions", PrintMode::Println, PrintColor::Blue, true);
        for c in &self.common_self_collisions {
            robot_print(&format!("      {} / {} ({}, {}, {})", c.body1, c.body2, c.interaction_distance, c.safety_distance, c.damping), PrintMode::Println, PrintColor::None, false);
        }
        robot_print(">> Convex hulls", PrintMode::Println, PrintColor::Blue, true);
        for (body, entry) in &self.convex_hull {
            robot_print(&format!("      {}: {}", body, entry.path.display()), PrintMode::Println, PrintColor::None, false);
        }
        if !self.stance_warnings.is_empty() {
            robot_print(&format!(">> {} joint(s) without half-sitting value", self.stance_warnings.len()), PrintMode::Println, PrintColor::Yellow, true);
        }
    }
}
