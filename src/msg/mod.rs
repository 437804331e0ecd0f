//! Message types exchanged with the route planner above and the maneuver
//! navigation component below.
//!
//! The upstream component treats these as loosely-typed field bags; here each
//! entity is an explicit struct so invariants (identity default orientation,
//! frame/stamp pairing in headers) live in one place.

mod feedback;
mod geometry;
mod nav;

pub use feedback::{GoToFeedback, Status};
pub use geometry::{Header, Point, Pose, PoseArray, PoseStamped, Quaternion, Time};
pub use nav::{ManeuverNavConfig, ManeuverNavGoal};
