//! Goal messages consumed by the maneuver navigation component.

use serde::{Deserialize, Serialize};

use super::geometry::PoseStamped;

/// Configuration flags for a single maneuver navigation request.
///
/// The three flags are independent and any combination is valid. A value is
/// built per dispatch call, embedded into the outgoing goal and discarded;
/// nothing here outlives the call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManeuverNavConfig {
    /// Append the new maneuver to the one currently executing instead of
    /// replacing it
    pub append_maneuver: bool,
    /// Ask the executor to reach the goal pose precisely
    pub precise_goal: bool,
    /// Plan the maneuver with the line planner
    pub use_line_planner: bool,
}

impl ManeuverNavConfig {
    /// Creates a config with the given flags. `Default` yields all false.
    pub fn new(append_maneuver: bool, precise_goal: bool, use_line_planner: bool) -> Self {
        ManeuverNavConfig {
            append_maneuver,
            precise_goal,
            use_line_planner,
        }
    }
}

/// A discrete navigation goal: drive from `start` to `goal` under `conf`.
///
/// Ownership moves to the publish channel at dispatch time. Delivery is not
/// acknowledged back to this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ManeuverNavGoal {
    /// Stamped start pose of the maneuver
    pub start: PoseStamped,
    /// Stamped goal pose of the maneuver
    pub goal: PoseStamped,
    /// Configuration flags, copied verbatim from the caller
    pub conf: ManeuverNavConfig,
}
