//! Per-request and per-insertion output records.

use std::collections::BTreeMap;

use zdb_core::{Epoch, NodeId, RequestId};

// ── Request records ───────────────────────────────────────────────────────────

/// Service outcome of one request.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestRecord {
    pub origin:        NodeId,
    pub destination:   NodeId,
    /// Epoch at which the request was submitted.
    pub req_epoch:     Epoch,
    pub pickup_epoch:  Epoch,
    pub dropoff_epoch: Epoch,
}

impl RequestRecord {
    /// Submission-to-dropoff time.
    #[inline]
    pub fn service_time(&self) -> Epoch {
        self.dropoff_epoch - self.req_epoch
    }

    /// Submission-to-pickup time.
    #[inline]
    pub fn waiting_time(&self) -> Epoch {
        self.pickup_epoch - self.req_epoch
    }
}

// ── Insertion records ─────────────────────────────────────────────────────────

/// How a request's two stops were placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum InsertionKind {
    /// Pickup and dropoff both fit existing legs without detour.
    BothOnRoute = 1,
    /// Only the pickup fit; the dropoff was appended.
    PickupOnRoute = 2,
    /// Both stops were appended at the end of the route.
    NeitherOnRoute = 3,
}

impl InsertionKind {
    /// Numeric code used in tabular output.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// State of the scheduler at one insertion, as logged for analysis.
///
/// `stoplist_len` counts the stops scheduled when the request arrived
/// (including the position sentinel); the volume fields count reachable
/// nodes, `stoplist_volume` over the whole route after both insertions and
/// `rest_volume` over the suffix from the pickup on.  Stop indices are
/// relative to the first real stop, i.e. the sentinel is not counted.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InsertionRecord {
    /// Vehicle clock at insertion time (possibly ahead of the request epoch,
    /// see [`zdb_core::JUMP_TOLERANCE`]).
    pub epoch:           Epoch,
    pub stoplist_len:    usize,
    pub stoplist_volume: usize,
    pub rest_volume:     usize,
    pub pickup_index:    usize,
    pub dropoff_index:   usize,
    pub kind:            InsertionKind,
}

// ── Aggregate output ──────────────────────────────────────────────────────────

/// Everything a finished run produces.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimOutput {
    pub requests:   BTreeMap<RequestId, RequestRecord>,
    pub insertions: Vec<InsertionRecord>,
}

impl SimOutput {
    /// Mean service time over all served requests, `None` if none were.
    pub fn mean_service_time(&self) -> Option<Epoch> {
        if self.requests.is_empty() {
            return None;
        }
        let total: Epoch = self.requests.values().map(RequestRecord::service_time).sum();
        Some(total / self.requests.len() as Epoch)
    }
}
