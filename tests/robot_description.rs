use std::f64::consts::PI;
use std::path::{Path, PathBuf};
use nao_description::robot_modules::robot_description_module::RobotDescriptionModule;
use nao_description::robot_modules::robot_stance_module::NAO_HALF_SITTING_DEGREES;
use nao_description::utils::utils_errors::RobotDescriptionError;
use nao_description::utils::utils_files::description_config::DescriptionConfig;
use nao_description::utils::utils_robot::robot_variant::{GRIPPER_LINKS, RobotVariant};
use nao_description::utils::utils_traits::{SaveAndLoadable, ToAndFromRonString};

fn model_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join("nao_description")
}

fn config() -> DescriptionConfig {
    let mut config = DescriptionConfig::new(&model_root());
    config.verbose = false;
    config
}

fn load(variant: RobotVariant) -> RobotDescriptionModule {
    RobotDescriptionModule::new(variant, &config()).unwrap()
}

#[test]
fn half_sitting_matches_degree_table() {
    for variant in [RobotVariant::WithHand, RobotVariant::NoHand] {
        let nao = load(variant);
        for (name, degrees) in NAO_HALF_SITTING_DEGREES {
            match nao.stance().get(*name) {
                Some(q) => { assert!((q[0] - degrees * PI / 180.0).abs() < 1e-12, "{}", name); }
                None => { assert!(!nao.robot_model_module().has_joint(name), "{} is in the tree but not in the pose", name); }
            }
        }
        assert!((nao.stance()["LKneePitch"][0] - 0.6112667).abs() < 1e-6);
        assert!((nao.stance()["RShoulderPitch"][0] - 1.49).abs() < 1e-12);
    }
}

#[test]
fn full_model_has_no_stance_warnings() {
    let nao = load(RobotVariant::WithHand);
    assert!(nao.stance_warnings().is_empty());
    assert_eq!(nao.stance().len(), 42);
    assert!(!nao.stance().contains_key("Root"));
}

#[test]
fn untabulated_joint_is_reported_once() {
    let mut config = config();
    config.robot_name = "nao_extra_joint".to_string();
    let nao = RobotDescriptionModule::new(RobotVariant::WithHand, &config).unwrap();
    assert_eq!(nao.stance_warnings().len(), 1);
    assert_eq!(nao.stance_warnings()[0].joint_name, "HeadLamp");
    assert_eq!(nao.stance_warnings()[0].num_dofs, 1);
    assert!(!nao.stance().contains_key("HeadLamp"));
    assert!(nao.robot_model_module().has_joint("LSoleJoint"));
}

#[test]
fn no_hand_variant_drops_gripper_links() {
    let nao = load(RobotVariant::NoHand);
    for l in GRIPPER_LINKS {
        assert!(!nao.robot_model_module().has_link(l), "{} should be filtered", l);
    }
    assert!(!nao.robot_model_module().has_joint("LHand"));
    assert!(!nao.robot_model_module().has_joint("RThumb2"));
    assert!(nao.robot_model_module().has_link("l_wrist"));
    assert_eq!(nao.stance().len(), 24);
    assert_eq!(nao.filtered_links().len(), GRIPPER_LINKS.len());
}

#[test]
fn with_hand_variant_keeps_gripper_links() {
    let nao = load(RobotVariant::WithHand);
    for l in GRIPPER_LINKS {
        assert!(nao.robot_model_module().has_link(l), "{} should be kept", l);
    }
    assert!(nao.filtered_links().is_empty());
    assert_eq!(nao.robot_model_module().links().len(), 45);
}

#[test]
fn missing_urdf_is_fatal_and_names_the_path() {
    let mut config = config();
    config.model_root = PathBuf::from("/nonexistent/nao_description");
    let res = RobotDescriptionModule::new(RobotVariant::NoHand, &config);
    match res {
        Err(RobotDescriptionError::MissingResourceError(s)) => {
            assert!(s.contains("/nonexistent/nao_description/urdf/nao.urdf"), "{}", s);
        }
        Err(e) => { panic!("unexpected error {}", e); }
        Ok(_) => { panic!("construction should fail without a urdf"); }
    }
}

#[test]
fn convex_hulls_point_into_the_convex_dir() {
    let nao = load(RobotVariant::NoHand);
    let hull = &nao.convex_hull()["LTibia"];
    assert_eq!(hull.group, "LTibia");
    assert_eq!(hull.path, model_root().join("convex").join("LKneePitch-ch.txt"));
    assert_eq!(nao.paths().rsdf_dir(), model_root().join("rsdf"));
    assert_eq!(nao.paths().calib_dir(), model_root().join("calib"));
}

#[test]
fn every_self_collision_body_is_in_the_no_hand_model() {
    let nao = load(RobotVariant::NoHand);
    for c in nao.common_self_collisions() {
        assert!(nao.robot_model_module().has_link(&c.body1), "{}", c.body1);
        assert!(nao.robot_model_module().has_link(&c.body2), "{}", c.body2);
    }
    assert_eq!(nao.common_self_collisions(), nao.minimal_self_collisions());
}

#[test]
fn constant_tables() {
    let nao = load(RobotVariant::WithHand);
    assert_eq!(nao.force_sensors().len(), 12);
    assert_eq!(nao.body_sensors().len(), 2);
    assert_eq!(nao.grippers().len(), 2);
    assert_eq!(nao.grippers()[0].active_joints, vec!["LHand".to_string()]);
    assert!(nao.springs().bodies.is_empty());
    assert_eq!(nao.default_attitude().to_array(), [1., 0., 0., 0., -0.006, 0.0, 0.32325]);
    assert_eq!(nao.lipm_stabilizer_config().com_active_joints.len(), 12);
    assert_eq!(nao.lipm_stabilizer_config().com_height, 0.23);
    assert_eq!(nao.ref_joint_order().len(), 26);
    for j in nao.ref_joint_order() {
        assert!(nao.robot_model_module().has_joint(j), "{}", j);
    }
}

#[test]
fn bounds_cover_every_actuated_joint() {
    let nao = load(RobotVariant::WithHand);
    let bounds = nao.bounds();
    assert_eq!(bounds.num_joints(), 43);
    assert_eq!(bounds.position_lower["HeadYaw"], vec![-2.0857]);
    assert_eq!(bounds.position_upper["LKneePitch"], vec![2.1125]);
    assert_eq!(bounds.position_lower["Root"].len(), 6);
}

#[test]
fn floating_root() {
    let nao = load(RobotVariant::NoHand);
    let root = &nao.robot_model_module().joints()[0];
    assert_eq!(root.name(), "Root");
    assert_eq!(root.num_dofs(), 6);
    assert_eq!(nao.robot_model_module().num_dofs(), 30);
}

#[test]
fn descriptor_reloads_from_json_and_ron() {
    let nao = load(RobotVariant::NoHand);
    let json_string = nao.get_serialization_string().unwrap();
    let from_json = RobotDescriptionModule::load_from_json_string(&json_string).unwrap();
    let ron_string = nao.convert_to_ron_string().unwrap();
    let from_ron = RobotDescriptionModule::load_from_ron_string(&ron_string).unwrap();

    for loaded in [from_json, from_ron] {
        assert_eq!(loaded.variant(), RobotVariant::NoHand);
        assert_eq!(loaded.robot_model_module().links().len(), nao.robot_model_module().links().len());
        assert_eq!(loaded.stance().len(), nao.stance().len());
        assert_eq!(loaded.bounds().num_joints(), nao.bounds().num_joints());
        assert_eq!(loaded.bounds().position_lower["Root"], vec![f64::NEG_INFINITY; 6]);
        assert_eq!(loaded.bounds().torque_upper["Root"], vec![f64::INFINITY; 6]);
        assert!((loaded.bounds().position_upper["LKneePitch"][0] - 2.1125).abs() < 1e-12);
        assert!((loaded.stance()["LKneePitch"][0] - nao.stance()["LKneePitch"][0]).abs() < 1e-12);
        assert_eq!(loaded.convex_hull(), nao.convex_hull());
    }
}
