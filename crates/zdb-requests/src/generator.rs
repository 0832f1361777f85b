//! Uniform Poisson request generation.

use zdb_core::{Epoch, NodeId, Request, RequestId, StreamRng};

/// Lazy stream of uniformly random requests arriving as a Poisson process.
///
/// Origin and destination are drawn uniformly (and distinctly) from the node
/// set `0..node_count`; inter-arrival times are exponential with the given
/// rate.  The first request is pinned to epoch 0 so that, with unit hop
/// times, all pickup/dropoff epochs of an otherwise-idle vehicle stay
/// integral — which makes the output much easier to eyeball.
///
/// The stream is finite (`num_requests` items) and fully determined by its
/// seed.
pub struct UniformRequests {
    node_count: u32,
    rate: f64,
    remaining: usize,
    next_id: u32,
    clock: Epoch,
    rng: StreamRng,
}

impl UniformRequests {
    /// # Panics
    ///
    /// Debug-asserts `node_count >= 2` (a request needs two distinct nodes).
    pub fn new(node_count: usize, rate: f64, num_requests: usize, rng: StreamRng) -> Self {
        debug_assert!(node_count >= 2);
        Self {
            node_count: node_count as u32,
            rate,
            remaining: num_requests,
            next_id: 0,
            clock: 0.0,
            rng,
        }
    }
}

impl Iterator for UniformRequests {
    type Item = Request;

    fn next(&mut self) -> Option<Request> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // First request at t = 0; see struct docs.
        if self.next_id > 0 {
            self.clock += self.rng.exponential(self.rate);
        }
        let (origin, destination) = self.rng.distinct_pair(self.node_count);

        let id = RequestId(self.next_id);
        self.next_id += 1;
        Some(Request::new(id, self.clock, NodeId(origin), NodeId(destination)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for UniformRequests {}
