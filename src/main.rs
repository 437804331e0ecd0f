// src/main.rs
// Demo binary walking a short waypoint route through the navigation layer.

// Imports dependencies and route navigation modules.
// - env_logger: Logging for debugging.
// - route_nav modules: Messages, channels, clock, and navigation operations.
use log::{error, info};
use route_nav::geometry::{quaternion_of, yaw_of};
use route_nav::msg::{GoToFeedback, ManeuverNavGoal, Pose, PoseArray};
use route_nav::{
    has_timed_out, is_waypoint_achieved, publish_waypoint_array, send_maneuver_nav_goal, Clock,
    LoopbackChannel, ManualClock, RouteNavConfig,
};
use std::error::Error;
use std::f64::consts::FRAC_PI_2;

/// Main function to simulate a robot following a waypoint route.
/// Dispatches goals over loopback channels and polls achievement per tick.
fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting route navigation demo...");

    // Load configuration from an optional YAML path argument
    let config = match std::env::args().nth(1) {
        Some(path) => RouteNavConfig::from_yaml_file(&path)?,
        None => RouteNavConfig::default(),
    };
    let tolerance = config.tolerance();

    // Loopback channels stand in for the real middleware bindings
    let goal_channel = LoopbackChannel::<ManeuverNavGoal>::new();
    let waypoint_channel = LoopbackChannel::<PoseArray>::new();
    let clock = ManualClock::starting_at(0.0);

    // A two-segment route through the map frame
    let route = vec![
        vec![
            Pose::planar(1.0, 0.0, 0.0),
            Pose::planar(2.0, 1.0, FRAC_PI_2),
        ],
        vec![Pose::planar(2.0, 3.0, FRAC_PI_2)],
    ];

    // Publish the flattened route for display
    publish_waypoint_array(&waypoint_channel, &clock, &route, &config.goal_frame)?;
    info!("Published waypoint array on {}", config.waypoints_topic);

    let waypoints: Vec<Pose> = route.iter().flatten().copied().collect();
    let mut robot = Pose::planar(0.0, 0.0, 0.0);
    let mut feedback = GoToFeedback::skeleton("route_demo", "GOTO");

    for (index, target) in waypoints.iter().enumerate() {
        // Dispatch the next leg of the route
        send_maneuver_nav_goal(&goal_channel, &clock, robot, *target, &config.goal_frame, None)?;
        let start_time = clock.seconds();

        // Step toward the target until it counts as achieved
        while !is_waypoint_achieved(&robot, target, &tolerance) {
            if has_timed_out(&clock, start_time, config.goal_timeout_s) {
                error!("Goal {} timed out after {}s", index, config.goal_timeout_s);
                return Ok(());
            }

            // Close 40% of the remaining gap per tick
            robot.position.x += 0.4 * (target.position.x - robot.position.x);
            robot.position.y += 0.4 * (target.position.y - robot.position.y);
            let yaw = yaw_of(&robot.orientation);
            let target_yaw = yaw_of(&target.orientation);
            robot.orientation = quaternion_of(yaw + 0.4 * (target_yaw - yaw));

            clock.advance(0.5);
        }

        feedback.status.status_code = (index + 1) as u16;
        info!(
            "Waypoint {} achieved at t={:.1}s, feedback: {:?}",
            index,
            clock.seconds(),
            feedback
        );
    }

    info!(
        "Route complete: {} goals dispatched, {} display arrays published",
        goal_channel.published().len(),
        waypoint_channel.published().len()
    );
    Ok(())
}
