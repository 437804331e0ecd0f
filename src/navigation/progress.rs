//! Waypoint achievement and operation timeout checks.
//!
//! These are the predicates a task executor polls to decide whether to
//! advance to the next waypoint or abort the current goal. Both are pure:
//! geometry and clock readings come in, a bool comes out. Malformed (NaN)
//! geometry evaluates to "not achieved" through standard float comparison
//! rules rather than raising an error.

use crate::clock::Clock;
use crate::geometry::{planar_distance_sq, yaw_distance};
use crate::msg::Pose;

/// Thresholds under which two poses count as the same waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceSpec {
    /// Position threshold as a squared planar distance, in square meters.
    ///
    /// Callers pass meters squared, not meters: the evaluation compares
    /// against squared distance and never takes a square root.
    pub position_m2: f64,
    /// Absolute yaw difference threshold, in radians
    pub orientation_rad: f64,
}

impl ToleranceSpec {
    /// Creates a tolerance from a squared position threshold and an
    /// orientation threshold.
    pub fn new(position_m2: f64, orientation_rad: f64) -> Self {
        ToleranceSpec {
            position_m2,
            orientation_rad,
        }
    }
}

/// Returns true if `current` lies within tolerance of `target` in both
/// position and heading.
///
/// Both comparisons are strict: a squared distance exactly equal to the
/// position threshold does not count as achieved. Yaw differences carry no
/// wraparound correction (see [`yaw_distance`]), so headings either side of
/// ±π compare as far apart.
pub fn is_waypoint_achieved(current: &Pose, target: &Pose, tolerance: &ToleranceSpec) -> bool {
    let position_dist = planar_distance_sq(&current.position, &target.position);
    let heading_dist = yaw_distance(&current.orientation, &target.orientation);
    position_dist < tolerance.position_m2 && heading_dist < tolerance.orientation_rad
}

/// Returns true once at least `timeout` seconds have elapsed on `clock`
/// since `start_time`.
///
/// Both values are in the clock's seconds scale. A zero or negative timeout
/// reports timed out from the first call onward; it is not rejected.
pub fn has_timed_out(clock: &impl Clock, start_time: f64, timeout: f64) -> bool {
    (clock.seconds() - start_time) >= timeout
}
