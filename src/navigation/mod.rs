//! Route navigation on top of the maneuver navigation component.
//!
//! Splits into two halves: [`progress`] holds the pure predicates a task
//! executor polls between waypoints, and [`dispatch`] composes and publishes
//! the wire messages that drive the maneuver navigation component itself.

pub mod dispatch;
pub mod progress;

pub use dispatch::{publish_waypoint_array, send_maneuver_nav_goal};
pub use progress::{has_timed_out, is_waypoint_achieved, ToleranceSpec};
