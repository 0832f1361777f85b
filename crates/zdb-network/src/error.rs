//! Network-subsystem error type.

use thiserror::Error;

use zdb_core::NodeId;

/// Errors produced by `zdb-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The input graph has no nodes.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// The input graph is not connected.  All accepted topologies are
    /// connected by construction, so this indicates a caller bug; catching
    /// it at construction makes every later distance/path lookup total.
    #[error("graph is not connected: node {0} is unreachable from node 0")]
    Disconnected(NodeId),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
