use serde::{Serialize, Deserialize};

/// Two bodies that must keep clear of each other.
///
/// The constraint activates once the bodies are closer than `interaction_distance`, and keeps
/// them at least `safety_distance` apart.  `damping` is the velocity damper gain; zero lets
/// the controller compute it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelfCollisionPair {
    pub body1: String,
    pub body2: String,
    pub interaction_distance: f64,
    pub safety_distance: f64,
    pub damping: f64
}
impl SelfCollisionPair {
    pub fn new(body1: &str, body2: &str, interaction_distance: f64, safety_distance: f64, damping: f64) -> Self {
        Self {
            body1: body1.to_string(),
            body2: body2.to_string(),
            interaction_distance,
            safety_distance,
            damping
        }
    }
    pub fn involves(&self, body: &str) -> bool {
        self.body1 == body || self.body2 == body
    }
}

pub fn nao_minimal_self_collisions() -> Vec<SelfCollisionPair> {
    let c = SelfCollisionPair::new;
    vec![
        c("Head", "l_wrist", 0.02, 0.01, 0.),
        c("Head", "r_wrist", 0.02, 0.01, 0.),
        c("Head", "LForeArm", 0.02, 0.01, 0.),
        c("Head", "RForeArm", 0.02, 0.01, 0.),
        c("xtion_link", "l_wrist", 0.02, 0.02, 0.),
        c("xtion_link", "r_wrist", 0.02, 0.02, 0.),
        c("xtion_link", "LForeArm", 0.02, 0.02, 0.),
        c("xtion_link", "RForeArm", 0.02, 0.02, 0.),
        c("LThigh", "l_wrist", 0.02, 0.01, 0.),
        c("RThigh", "r_wrist", 0.02, 0.01, 0.),
        c("l_wrist", "r_wrist", 0.02, 0.01, 0.),
        c("l_wrist", "torso", 0.02, 0.01, 0.),
        c("r_wrist", "torso", 0.02, 0.01, 0.),
        c("l_ankle", "r_ankle", 0.02, 0.01, 0.),
        c("l_ankle", "RTibia", 0.02, 0.01, 0.),
        c("r_ankle", "LTibia", 0.02, 0.01, 0.)
    ]
}
