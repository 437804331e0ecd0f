//! Progress feedback reported by the route executor while it walks a route.

use serde::{Deserialize, Serialize};

/// Status block attached to action feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Layer the status originates from; see the `DOMAIN_*` constants
    pub domain: u16,
    /// Module reporting within that domain
    pub module_code: u16,
    /// Progress or outcome code within that module
    pub status_code: u16,
}

impl Status {
    /// The status originates from the robot platform as a whole.
    pub const DOMAIN_ROBOT: u16 = 1;
    /// The status originates from an individual software component.
    pub const DOMAIN_COMPONENT: u16 = 2;
}

/// Feedback for a GOTO action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoToFeedback {
    /// ID of the action this feedback refers to
    pub action_id: String,
    /// Action type tag, e.g. "GOTO"
    pub action_type: String,
    /// Current progress status
    pub status: Status,
}

impl GoToFeedback {
    /// Returns feedback with the action id, action type and status domain
    /// prefilled; the module and status codes stay at their defaults until
    /// actual progress is known.
    pub fn skeleton(action_id: &str, action_type: &str) -> Self {
        GoToFeedback {
            action_id: action_id.to_string(),
            action_type: action_type.to_string(),
            status: Status {
                domain: Status::DOMAIN_COMPONENT,
                ..Status::default()
            },
        }
    }
}
