//! Transportation requests.

use crate::{Epoch, NodeId, RequestId};

/// One transportation request: "at `epoch`, somebody at `origin` wants to go
/// to `destination`".
///
/// Immutable once created; produced by a request stream and consumed exactly
/// once by a vehicle policy.  Origin and destination are distinct by
/// contract of the request stream.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    pub id: RequestId,
    /// Arrival epoch of the request (when it enters the system, not when it
    /// is served).
    pub epoch: Epoch,
    pub origin: NodeId,
    pub destination: NodeId,
}

impl Request {
    pub fn new(id: RequestId, epoch: Epoch, origin: NodeId, destination: NodeId) -> Self {
        debug_assert_ne!(origin, destination, "degenerate request {id}");
        debug_assert!(epoch >= 0.0, "request {id} has negative epoch {epoch}");
        Self { id, epoch, origin, destination }
    }
}
