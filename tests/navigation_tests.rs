#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use route_nav::geometry::{quaternion_of, yaw_of};
    use route_nav::msg::{ManeuverNavGoal, Pose, PoseArray};
    use route_nav::{
        has_timed_out, is_waypoint_achieved, publish_waypoint_array, send_maneuver_nav_goal,
        Clock, LoopbackChannel, ManualClock, RouteNavConfig,
    };

    // Closes 40% of the gap to the target per tick, in position and heading.
    fn step_toward(robot: &mut Pose, target: &Pose) {
        robot.position.x += 0.4 * (target.position.x - robot.position.x);
        robot.position.y += 0.4 * (target.position.y - robot.position.y);
        let yaw = yaw_of(&robot.orientation);
        let target_yaw = yaw_of(&target.orientation);
        robot.orientation = quaternion_of(yaw + 0.4 * (target_yaw - yaw));
    }

    // End to end test of a two segment route walked to completion
    #[test]
    fn route_walk_dispatches_each_leg_and_achieves_every_waypoint() {
        let config = RouteNavConfig::default();
        let tolerance = config.tolerance();
        let goal_channel = LoopbackChannel::<ManeuverNavGoal>::new();
        let clock = ManualClock::starting_at(0.0);

        let route = vec![
            vec![
                Pose::planar(1.0, 0.0, 0.0),
                Pose::planar(2.0, 1.0, FRAC_PI_2),
            ],
            vec![Pose::planar(2.0, 3.0, FRAC_PI_2)],
        ];
        let waypoints: Vec<Pose> = route.iter().flatten().copied().collect();

        let mut robot = Pose::planar(0.0, 0.0, 0.0);
        for target in &waypoints {
            send_maneuver_nav_goal(&goal_channel, &clock, robot, *target, "/map/", None).unwrap();

            let start_time = clock.seconds();
            while !is_waypoint_achieved(&robot, target, &tolerance) {
                assert!(
                    !has_timed_out(&clock, start_time, config.goal_timeout_s),
                    "walk should converge well inside the goal timeout"
                );
                step_toward(&mut robot, target);
                clock.advance(0.5);
            }
        }

        let sent = goal_channel.published();
        assert_eq!(sent.len(), waypoints.len());
        for (goal, waypoint) in sent.iter().zip(&waypoints) {
            assert_eq!(goal.goal.pose, *waypoint);
            assert_eq!(goal.start.header.frame_id, "map");
            assert_eq!(goal.goal.header.frame_id, "map");
            assert!(!goal.conf.append_maneuver);
            assert!(!goal.conf.precise_goal);
            assert!(!goal.conf.use_line_planner);
        }

        // Each leg starts from wherever the previous leg converged.
        assert_eq!(sent[0].start.pose, Pose::planar(0.0, 0.0, 0.0));
        for pair in sent.windows(2) {
            let settled = pair[1].start.pose;
            let previous_target = pair[0].goal.pose;
            assert!(is_waypoint_achieved(&settled, &previous_target, &tolerance));
        }
    }

    #[test]
    fn stalled_robot_times_out_instead_of_achieving() {
        let config = RouteNavConfig::default();
        let clock = ManualClock::starting_at(50.0);
        let robot = Pose::planar(0.0, 0.0, 0.0);
        let target = Pose::planar(5.0, 5.0, 0.0);

        let start_time = clock.seconds();
        assert!(!has_timed_out(&clock, start_time, config.goal_timeout_s));

        clock.advance(config.goal_timeout_s + 1.0);
        assert!(has_timed_out(&clock, start_time, config.goal_timeout_s));
        assert!(!is_waypoint_achieved(&robot, &target, &config.tolerance()));
    }

    #[test]
    fn published_waypoint_array_matches_the_flattened_route() {
        let waypoint_channel = LoopbackChannel::<PoseArray>::new();
        let clock = ManualClock::starting_at(3.5);

        let route = vec![
            vec![Pose::planar(1.0, 0.0, 0.0), Pose::planar(2.0, 1.0, 0.0)],
            vec![],
            vec![Pose::planar(2.0, 3.0, FRAC_PI_2)],
        ];
        publish_waypoint_array(&waypoint_channel, &clock, &route, "map").unwrap();

        let flattened: Vec<Pose> = route.iter().flatten().copied().collect();
        let sent = waypoint_channel.published();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].poses, flattened);
        assert_eq!(sent[0].header.frame_id, "map");
        assert_eq!(sent[0].header.stamp.sec, 3);
    }
}
