//! Unit tests for zdb-requests.

use zdb_core::{RequestId, StreamRng};

use crate::UniformRequests;

fn stream(n_nodes: usize, rate: f64, n_reqs: usize, seed: u64) -> UniformRequests {
    UniformRequests::new(n_nodes, rate, n_reqs, StreamRng::new(seed))
}

#[test]
fn yields_exactly_num_requests() {
    let reqs: Vec<_> = stream(10, 1.0, 25, 42).collect();
    assert_eq!(reqs.len(), 25);
    assert_eq!(stream(10, 1.0, 0, 42).count(), 0);
}

#[test]
fn first_request_is_at_epoch_zero() {
    let first = stream(10, 0.5, 5, 7).next().unwrap();
    assert_eq!(first.epoch, 0.0);
    assert_eq!(first.id, RequestId(0));
}

#[test]
fn epochs_are_non_decreasing_and_ids_sequential() {
    let reqs: Vec<_> = stream(10, 2.0, 100, 3).collect();
    for (i, pair) in reqs.windows(2).enumerate() {
        assert!(pair[1].epoch >= pair[0].epoch);
        assert_eq!(pair[0].id, RequestId(i as u32));
    }
}

#[test]
fn origin_never_equals_destination() {
    for req in stream(3, 1.0, 500, 11) {
        assert_ne!(req.origin, req.destination);
        assert!(req.origin.index() < 3 && req.destination.index() < 3);
    }
}

#[test]
fn same_seed_same_stream() {
    let a: Vec<_> = stream(10, 1.5, 50, 99).collect();
    let b: Vec<_> = stream(10, 1.5, 50, 99).collect();
    assert_eq!(a, b);
}

#[test]
fn size_hint_is_exact() {
    let mut s = stream(10, 1.0, 4, 0);
    assert_eq!(s.len(), 4);
    s.next();
    assert_eq!(s.len(), 3);
}
