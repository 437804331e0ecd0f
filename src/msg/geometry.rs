//! Geometric message types shared with the maneuver navigation component.
//!
//! Positions are in meters, orientations are unit quaternions. The unit-norm
//! assumption holds at the boundary by convention and is not enforced here;
//! yaw is always derived from the quaternion rather than stored alongside it,
//! so the two representations cannot diverge.

use serde::{Deserialize, Serialize};

/// Message timestamp: whole seconds plus nanoseconds within the second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Time {
    /// Seconds since the clock epoch
    pub sec: i32,
    /// Nanoseconds within the current second
    pub nanosec: u32,
}

impl Time {
    /// Converts a seconds value into a stamp.
    pub fn from_seconds(seconds: f64) -> Self {
        let sec = seconds.floor();
        let mut nanosec = ((seconds - sec) * 1e9).round() as u32;
        let mut sec = sec as i32;
        if nanosec >= 1_000_000_000 {
            sec += 1;
            nanosec = 0;
        }
        Time { sec, nanosec }
    }

    /// The stamp as a seconds value.
    pub fn as_seconds(&self) -> f64 {
        self.sec as f64 + self.nanosec as f64 * 1e-9
    }
}

/// Metadata stamped onto every outgoing message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Time the message was assembled
    pub stamp: Time,
    /// Reference frame of the carried coordinates
    pub frame_id: String,
}

/// A point in space, in meters. Waypoint evaluation only reads x and y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate (meters)
    pub x: f64,
    /// Y coordinate (meters)
    pub y: f64,
    /// Z coordinate (meters), carried but ignored by this crate
    pub z: f64,
}

impl Point {
    /// Creates a point on the ground plane (z = 0).
    pub fn planar(x: f64, y: f64) -> Self {
        Point { x, y, z: 0.0 }
    }
}

/// An orientation quaternion, assumed unit-norm at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    /// X component of the vector part
    pub x: f64,
    /// Y component of the vector part
    pub y: f64,
    /// Z component of the vector part
    pub z: f64,
    /// Scalar part
    pub w: f64,
}

impl Default for Quaternion {
    /// Identity rotation (zero roll, pitch and yaw).
    fn default() -> Self {
        Quaternion {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }
}

/// A position paired with an orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Position in the enclosing frame
    pub position: Point,
    /// Orientation in the enclosing frame
    pub orientation: Quaternion,
}

impl Pose {
    /// Creates a planar pose at (x, y) heading `yaw` radians from the x axis.
    pub fn planar(x: f64, y: f64, yaw: f64) -> Self {
        Pose {
            position: Point::planar(x, y),
            orientation: crate::geometry::quaternion_of(yaw),
        }
    }
}

/// A pose tagged with its frame and assembly time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseStamped {
    /// Frame and stamp the pose is valid in
    pub header: Header,
    /// The pose itself
    pub pose: Pose,
}

/// An ordered pose list under a single header, used for waypoint
/// visualization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseArray {
    /// Frame and stamp shared by all poses
    pub header: Header,
    /// The poses, in publication order
    pub poses: Vec<Pose>,
}
