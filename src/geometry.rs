//! Planar geometry helpers: yaw extraction and construction, plus the pose
//! distance measures the waypoint evaluator runs on.
//!
//! Orientations cross the crate boundary as quaternions; every decision in
//! this crate is made on the derived yaw. The quaternion/Euler conversions
//! delegate to nalgebra under its fixed roll-pitch-yaw convention, which
//! keeps `yaw_of(quaternion_of(y))` equal to `y` on `(-π, π]` up to trig
//! precision.

use nalgebra::{Quaternion as NaQuaternion, UnitQuaternion};

use crate::msg::{Point, Quaternion};

/// Extracts the heading (rotation about the vertical axis) from a quaternion.
///
/// The caller supplies a unit quaternion; no validation happens here beyond
/// the normalization nalgebra applies on construction. Non-finite components
/// yield a NaN heading.
pub fn yaw_of(orientation: &Quaternion) -> f64 {
    let quat = UnitQuaternion::from_quaternion(NaQuaternion::new(
        orientation.w,
        orientation.x,
        orientation.y,
        orientation.z,
    ));
    // euler_angles() is (roll, pitch, yaw); only the heading matters here.
    quat.euler_angles().2
}

/// Builds the quaternion for a pure rotation of `yaw` radians about the
/// vertical axis, with zero roll and pitch.
pub fn quaternion_of(yaw: f64) -> Quaternion {
    let quat = UnitQuaternion::from_euler_angles(0.0, 0.0, yaw).into_inner();
    Quaternion {
        x: quat.i,
        y: quat.j,
        z: quat.k,
        w: quat.w,
    }
}

/// Squared planar distance between two points. The z components are ignored.
pub fn planar_distance_sq(a: &Point, b: &Point) -> f64 {
    (a.x - b.x).powi(2) + (a.y - b.y).powi(2)
}

/// Absolute yaw difference between two orientations.
///
/// No wraparound correction is applied: two headings just either side of ±π
/// measure as almost 2π apart, not almost equal. Waypoint evaluation relies
/// on this literal behavior.
pub fn yaw_distance(a: &Quaternion, b: &Quaternion) -> f64 {
    (yaw_of(a) - yaw_of(b)).abs()
}
