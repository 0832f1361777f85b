//! Plain data row types written by output backends.

use zdb_core::RequestId;
use zdb_sim::{InsertionRecord, RequestRecord};

/// Service outcome of one request, flattened for tabular output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestRow {
    /// Normalized request rate of the run this row belongs to.
    pub rate:          f64,
    pub request_id:    u32,
    pub origin:        u32,
    pub destination:   u32,
    pub req_epoch:     f64,
    pub pickup_epoch:  f64,
    pub dropoff_epoch: f64,
}

impl RequestRow {
    pub fn from_record(rate: f64, id: RequestId, record: &RequestRecord) -> Self {
        Self {
            rate,
            request_id: id.0,
            origin: record.origin.0,
            destination: record.destination.0,
            req_epoch: record.req_epoch,
            pickup_epoch: record.pickup_epoch,
            dropoff_epoch: record.dropoff_epoch,
        }
    }
}

/// One insertion decision, flattened for tabular output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertionRow {
    pub rate:            f64,
    pub epoch:           f64,
    pub stoplist_length: u64,
    pub stoplist_volume: u64,
    pub rest_volume:     u64,
    pub pickup_index:    u64,
    pub dropoff_index:   u64,
    /// Numeric insertion kind, see [`zdb_sim::InsertionKind`].
    pub insertion_type:  u8,
}

impl InsertionRow {
    pub fn from_record(rate: f64, record: &InsertionRecord) -> Self {
        Self {
            rate,
            epoch: record.epoch,
            stoplist_length: record.stoplist_len as u64,
            stoplist_volume: record.stoplist_volume as u64,
            rest_volume: record.rest_volume as u64,
            pickup_index: record.pickup_index as u64,
            dropoff_index: record.dropoff_index as u64,
            insertion_type: record.kind.code(),
        }
    }
}
