use serde::{Serialize, Deserialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Links of the two hands.  Removed from the model when the robot is loaded without hands.
pub const GRIPPER_LINKS: [&str; 18] = [
    "l_gripper", "r_gripper",
    "LFinger11_link", "LFinger12_link", "LFinger13_link",
    "LFinger21_link", "LFinger22_link", "LFinger23_link",
    "LThumb1_link", "LThumb2_link",
    "RFinger11_link", "RFinger12_link", "RFinger13_link",
    "RFinger21_link", "RFinger22_link", "RFinger23_link",
    "RThumb1_link", "RThumb2_link"
];

/// Gripper configuration of the robot.
///
/// ```
/// use std::str::FromStr;
/// use nao_description::utils::utils_robot::robot_variant::RobotVariant;
/// assert_eq!(RobotVariant::from_str("no_hand").unwrap(), RobotVariant::NoHand);
/// assert_eq!(RobotVariant::WithHand.to_string(), "with_hand");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum RobotVariant {
    WithHand,
    NoHand
}
impl RobotVariant {
    /// Links the URDF parser must drop for this variant.
    pub fn filtered_links(&self) -> Vec<String> {
        match self {
            RobotVariant::WithHand => { vec![] }
            RobotVariant::NoHand => { GRIPPER_LINKS.iter().map(|s| s.to_string()).collect() }
        }
    }
    pub fn module_name(&self) -> &'static str {
        match self {
            RobotVariant::WithHand => { "NAOWithHandRobotModule" }
            RobotVariant::NoHand => { "NAONoHandRobotModule" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn only_no_hand_filters_links() {
        assert!(RobotVariant::WithHand.filtered_links().is_empty());
        let filtered = RobotVariant::NoHand.filtered_links();
        assert_eq!(filtered.len(), 18);
        assert!(filtered.contains(&"LThumb2_link".to_string()));
        assert!(filtered.contains(&"r_gripper".to_string()));
    }

    #[test]
    fn every_variant_round_trips_through_its_name() {
        use std::str::FromStr;
        for v in RobotVariant::iter() {
            assert_eq!(RobotVariant::from_str(&v.to_string()).unwrap(), v);
        }
    }
}
