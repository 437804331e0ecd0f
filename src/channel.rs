//! Publish channels for outgoing navigation messages.
//!
//! The transport itself is out of scope: this crate assembles messages and
//! hands them to a [`Channel`], taking no position on QoS, serialization or
//! delivery. Failures surface as [`ChannelError`] values and propagate to
//! the caller untouched; there is no retry and no acknowledgment tracking.

use std::error::Error;
use std::fmt;
use std::sync::Mutex;

/// A named publish endpoint for messages of type `M`.
///
/// Implementations return once the message has been handed off to the
/// transport. Whether concurrent publishes are allowed is the
/// implementation's own contract; this crate adds no synchronization of its
/// own around the call.
#[cfg_attr(test, mockall::automock)]
pub trait Channel<M: 'static> {
    /// Publishes one message on the channel.
    fn publish(&self, message: M) -> Result<(), ChannelError>;
}

/// Errors surfaced by channel implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// The channel's transport is no longer reachable
    Disconnected(String),
    /// The transport rejected or failed to hand off the message
    PublishFailed(String),
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChannelError::Disconnected(msg) => write!(f, "channel disconnected: {}", msg),
            ChannelError::PublishFailed(msg) => write!(f, "publish failed: {}", msg),
        }
    }
}

impl Error for ChannelError {}

/// An in-memory channel that records published messages in order.
///
/// Stands in for a real transport in the demo binary and in tests. Publishing
/// takes `&self` and is internally synchronized, matching the concurrency
/// contract expected of transport clients.
#[derive(Debug)]
pub struct LoopbackChannel<M> {
    messages: Mutex<Vec<M>>,
}

impl<M> LoopbackChannel<M> {
    /// Creates an empty loopback channel.
    pub fn new() -> Self {
        LoopbackChannel {
            messages: Mutex::new(Vec::new()),
        }
    }
}

impl<M: Clone> LoopbackChannel<M> {
    /// Messages published so far, oldest first.
    pub fn published(&self) -> Vec<M> {
        self.messages.lock().unwrap().clone()
    }
}

impl<M> Default for LoopbackChannel<M> {
    fn default() -> Self {
        LoopbackChannel::new()
    }
}

impl<M: 'static> Channel<M> for LoopbackChannel<M> {
    fn publish(&self, message: M) -> Result<(), ChannelError> {
        self.messages.lock().unwrap().push(message);
        Ok(())
    }
}
