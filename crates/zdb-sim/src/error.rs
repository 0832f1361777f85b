//! Simulation errors.

use zdb_core::{Epoch, NodeId, RequestId};
use zdb_network::Topology;

pub type SimResult<T> = Result<T, SimError>;

/// Fatal conditions that abort a simulation run.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A request arrived more than one hop behind the vehicle clock.  The
    /// clock may legitimately lead an arrival by up to one hop (it jumps to
    /// the next node while the vehicle is mid-edge); anything beyond that
    /// means the request stream is not time-ordered.
    #[error(
        "request {request} arrived at epoch {epoch} but the vehicle clock \
         is already at {clock}"
    )]
    ArrivalOutOfOrder { request: RequestId, epoch: Epoch, clock: Epoch },

    /// The reachability set claimed a node is en route, but no scheduled leg
    /// admits a zero-detour insertion for it.  Indicates an inconsistent
    /// routing view.
    #[error("node {0} is reachable on the stop-list but fits no scheduled leg")]
    OnRouteSearchFailed(NodeId),

    /// The head of the stop-list was not the sentinel that was pushed at the
    /// start of the insertion step.
    #[error("stop-list head is not the position sentinel")]
    SentinelMissing,

    /// Fixed-route service is only defined for line, cycle, star and grid.
    #[error("no fixed route is defined for the {0:?} topology")]
    UnsupportedFixedRoute(Topology),
}
