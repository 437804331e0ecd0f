//! Composition and dispatch of maneuver navigation goals.
//!
//! Wraps raw poses into stamped, frame-tagged wire messages and hands them
//! to an injected [`Channel`]. Stamps come from the injected [`Clock`] at
//! composition time; the start pose is stamped before the goal pose, so the
//! two headers can differ when the clock advances between reads.

use crate::channel::{Channel, ChannelError};
use crate::clock::Clock;
use crate::msg::{Header, ManeuverNavConfig, ManeuverNavGoal, Pose, PoseArray, PoseStamped};

/// Composes a maneuver navigation goal from a start and goal pose and
/// publishes it on `channel`.
///
/// `frame_id` is normalized by trimming leading and trailing `/` before it
/// is written into both headers. A `None` config falls back to
/// [`ManeuverNavConfig::default`], which disables every planner option.
/// Each stamped pose reads the clock separately, start first.
pub fn send_maneuver_nav_goal(
    channel: &impl Channel<ManeuverNavGoal>,
    clock: &impl Clock,
    start: Pose,
    goal: Pose,
    frame_id: &str,
    conf: Option<ManeuverNavConfig>,
) -> Result<(), ChannelError> {
    let conf = conf.unwrap_or_default();
    let frame_id = frame_id.trim_matches('/');

    let start = PoseStamped {
        header: Header {
            stamp: clock.now(),
            frame_id: frame_id.to_string(),
        },
        pose: start,
    };
    let goal = PoseStamped {
        header: Header {
            stamp: clock.now(),
            frame_id: frame_id.to_string(),
        },
        pose: goal,
    };

    log::info!("Sending maneuver navigation goal in frame '{}'", frame_id);
    channel.publish(ManeuverNavGoal { start, goal, conf })
}

/// Flattens `waypoint_groups` into a single stamped pose array and publishes
/// it on `channel` for display.
///
/// Group order and in-group order are both preserved. Unlike goal dispatch,
/// `frame_id` is written into the header exactly as given.
pub fn publish_waypoint_array(
    channel: &impl Channel<PoseArray>,
    clock: &impl Clock,
    waypoint_groups: &[Vec<Pose>],
    frame_id: &str,
) -> Result<(), ChannelError> {
    let poses: Vec<Pose> = waypoint_groups.iter().flatten().copied().collect();

    log::info!("Publishing {} waypoints for display", poses.len());
    channel.publish(PoseArray {
        header: Header {
            stamp: clock.now(),
            frame_id: frame_id.to_string(),
        },
        poses,
    })
}
