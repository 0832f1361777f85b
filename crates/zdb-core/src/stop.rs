//! Stop-list elements.

use crate::{Epoch, NodeId, RequestId};

/// What a scheduled stop is for.
///
/// The discriminants are part of the output format (insertion logs and any
/// downstream tabular analysis), so they are fixed explicitly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum StopKind {
    Dropoff = 0,
    Pickup = 1,
    /// Transient marker for the vehicle's current position.  Inserted at the
    /// head of the stop-list for the duration of one insertion step and
    /// removed afterwards; never persisted.
    Sentinel = -1,
}

/// One scheduled stop of the vehicle.
///
/// Immutable once created — the stop-list inserts and reorders stops but
/// never rewrites their fields.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub position: NodeId,
    /// Epoch at which the vehicle is scheduled to be at `position`.
    pub epoch: Epoch,
    pub kind: StopKind,
    /// The request served by this stop; `None` for the sentinel.
    pub request: Option<RequestId>,
}

impl Stop {
    pub fn pickup(position: NodeId, epoch: Epoch, request: RequestId) -> Self {
        Self { position, epoch, kind: StopKind::Pickup, request: Some(request) }
    }

    pub fn dropoff(position: NodeId, epoch: Epoch, request: RequestId) -> Self {
        Self { position, epoch, kind: StopKind::Dropoff, request: Some(request) }
    }

    pub fn sentinel(position: NodeId, epoch: Epoch) -> Self {
        Self { position, epoch, kind: StopKind::Sentinel, request: None }
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.kind == StopKind::Sentinel
    }
}
