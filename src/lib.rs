//! Route navigation layer for mobile robots.
//!
//! This library sits between a route planner and a maneuver navigation
//! component: it checks waypoint achievement and goal timeouts, converts
//! between yaw angles and quaternions, and composes and dispatches
//! navigation goals over injected channels.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod channel;
pub mod clock;
pub mod config;
pub mod geometry;
pub mod msg;
pub mod navigation;

// Re-export commonly used items for easier access
pub use channel::{Channel, ChannelError, LoopbackChannel};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::RouteNavConfig;
pub use navigation::{
    has_timed_out, is_waypoint_achieved, publish_waypoint_array, send_maneuver_nav_goal,
    ToleranceSpec,
};
