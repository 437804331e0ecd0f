//! Route navigation configuration loaded from YAML.

use log::info;
use serde::{Deserialize, Serialize};

use crate::navigation::ToleranceSpec;

/// Tunable parameters for the route navigation layer.
///
/// Every field has a default, so partial YAML files only need to name the
/// values they override.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RouteNavConfig {
    /// Frame id written into dispatched goal headers
    pub goal_frame: String,
    /// Topic the maneuver navigation goal channel is bound to
    pub goal_topic: String,
    /// Topic the waypoint display channel is bound to
    pub waypoints_topic: String,
    /// Waypoint position tolerance as a squared distance, in square meters
    pub position_tolerance_m2: f64,
    /// Waypoint heading tolerance, in radians
    pub orientation_tolerance_rad: f64,
    /// Seconds a goal may run before the executor gives up on it
    pub goal_timeout_s: f64,
}

impl Default for RouteNavConfig {
    fn default() -> Self {
        RouteNavConfig {
            goal_frame: "map".to_string(),
            goal_topic: "/route_navigation/goal".to_string(),
            waypoints_topic: "/route_navigation/waypoints".to_string(),
            position_tolerance_m2: 0.09,
            orientation_tolerance_rad: 0.3,
            goal_timeout_s: 120.0,
        }
    }
}

impl RouteNavConfig {
    /// Loads a configuration from a YAML file.
    pub fn from_yaml_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config_file = std::fs::File::open(path)?;
        let config: RouteNavConfig = serde_yaml::from_reader(config_file)?;
        info!("Loaded route navigation config from {}", path);
        Ok(config)
    }

    /// The waypoint achievement tolerances this configuration describes.
    pub fn tolerance(&self) -> ToleranceSpec {
        ToleranceSpec::new(self.position_tolerance_m2, self.orientation_tolerance_rad)
    }
}
