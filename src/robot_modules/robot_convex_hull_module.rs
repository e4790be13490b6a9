use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

/// Suffix of the convex hull files generated for each body.
pub const CONVEX_HULL_SUFFIX: &str = "-ch.txt";

/// Collision group and convex hull file of a body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvexHullEntry {
    pub group: String,
    pub path: PathBuf
}

/// Body name to (collision group, hull base name), the group being the body itself.
pub fn standard_collision_files() -> BTreeMap<String, (String, String)> {
    let mut res = BTreeMap::new();
    let mut add_body = |body: &str, file: &str| { res.insert(body.to_string(), (body.to_string(), file.to_string())); };
    add_body("Head", "HeadPitch");
    add_body("xtion_link", "ASUS_XTION");
    add_body("LBicep", "LShoulderRoll");
    add_body("RBicep", "RShoulderRoll");
    add_body("LForeArm", "LElbowRoll");
    add_body("RForeArm", "RElbowRoll");
    add_body("r_wrist", "RWristYaw");
    add_body("l_wrist", "LWristYaw");
    add_body("torso", "Torso");
    add_body("LThigh", "LHipPitch");
    add_body("LTibia", "LKneePitch");
    add_body("l_ankle", "LAnkleRoll");
    add_body("RThigh", "RHipPitch");
    add_body("RTibia", "RKneePitch");
    add_body("r_ankle", "RAnkleRoll");
    res
}

/// Resolves every hull base name to `<convex_dir>/<base>-ch.txt`.
pub fn derive_collision_hull_table(convex_dir: &Path, files: &BTreeMap<String, (String, String)>) -> BTreeMap<String, ConvexHullEntry> {
    files.iter().map(|(body, (group, file))| {
        let entry = ConvexHullEntry {
            group: group.clone(),
            path: convex_dir.join(format!("{}{}", file, CONVEX_HULL_SUFFIX))
        };
        (body.clone(), entry)
    }).collect()
}
