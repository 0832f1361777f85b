//! Fixed-route baseline service.
//!
//! The vehicle circulates forever on a fixed tour of the topology and never
//! deviates: a Hamiltonian-style loop on cycles and grids, a full
//! there-and-back sweep on lines, and a hub-leaf-hub tour on stars.  Pickup
//! and dropoff epochs then follow in closed form from the request epoch and
//! the vehicle's phase on the tour, so no stop-list is needed at all.
//!
//! The tour starts at node 0 at epoch 0.  Tour lengths: `N` on a cycle,
//! `2N − 2` on a line, `2(N − 1)` on a star, and `N` on a grid (`N + 1`
//! with an odd side, where the serpentine loop needs one extra closing
//! hop).

use std::collections::BTreeMap;

use zdb_core::{Epoch, Request, RequestId};
use zdb_network::Topology;

use crate::error::{SimError, SimResult};
use crate::policy::VehiclePolicy;
use crate::record::{RequestRecord, SimOutput};

pub struct FixedRouteBus {
    topology: Topology,
    node_count: usize,
    route_length: Epoch,
    requests: BTreeMap<RequestId, RequestRecord>,
}

impl FixedRouteBus {
    /// # Errors
    ///
    /// [`SimError::UnsupportedFixedRoute`] for topologies without a defined
    /// tour.
    pub fn new(topology: Topology, node_count: usize) -> SimResult<Self> {
        let route_length = match topology {
            Topology::Cycle => node_count,
            Topology::Line => 2 * node_count - 2,
            Topology::Star => 2 * (node_count - 1),
            Topology::Grid => node_count + node_count % 2,
            other => return Err(SimError::UnsupportedFixedRoute(other)),
        };
        if topology == Topology::Grid {
            let side = (node_count as f64).sqrt().round() as usize;
            debug_assert_eq!(side * side, node_count);
        }
        Ok(Self {
            topology,
            node_count,
            route_length: route_length as Epoch,
            requests: BTreeMap::new(),
        })
    }

    /// Pickup and dropoff epochs on a tour visiting nodes in id order: the
    /// cycle tour `0, 1, …, N−1, 0, …`, and likewise the serpentine grid
    /// loop (with row-major ids a grid node's tour position is its id).
    fn serve_on_loop(&self, req: &Request) -> (Epoch, Epoch) {
        let phase = req.epoch % self.route_length;
        let origin = req.origin.index() as Epoch;
        let destination = req.destination.index() as Epoch;

        let pickup = if origin >= phase {
            req.epoch + origin - phase
        } else {
            req.epoch + origin - phase + self.route_length
        };
        let dropoff = if destination >= origin {
            pickup + destination - origin
        } else {
            pickup + destination - origin + self.route_length
        };
        (pickup, dropoff)
    }

    /// Pickup and dropoff on the line sweep `0 → N−1 → 0`.  Whether the
    /// pickup happens on the outbound or the return leg decides which way
    /// the vehicle is heading at dropoff time.
    fn serve_on_line(&self, req: &Request) -> (Epoch, Epoch) {
        let end = (self.node_count - 1) as Epoch;
        let phase = req.epoch % self.route_length;
        // Positions of origin/destination on each leg of the sweep.
        let origin_out = req.origin.index() as Epoch;
        let origin_back = end - origin_out;
        let dest_out = req.destination.index() as Epoch;
        let dest_back = end - dest_out;

        let mut outbound = phase < end;
        let pickup = if outbound {
            if phase <= origin_out {
                req.epoch + origin_out - phase
            } else {
                outbound = false;
                req.epoch + origin_back + end - phase
            }
        } else {
            let back_phase = phase - end;
            if back_phase <= origin_back {
                req.epoch + origin_back - back_phase
            } else {
                outbound = true;
                req.epoch + origin_out + self.route_length - phase
            }
        };

        let dropoff = if outbound {
            if origin_out <= dest_out {
                pickup + dest_out - origin_out
            } else {
                pickup + dest_back + end - origin_out
            }
        } else if origin_back <= dest_back {
            pickup + dest_back - origin_back
        } else {
            pickup + dest_out + end - origin_back
        };
        (pickup, dropoff)
    }

    /// Pickup and dropoff on the star tour `0, 1, 0, 2, …, 0, N−1, 0`.
    /// Leaf `k` sits at tour position `2k − 1`; the hub occupies every even
    /// position.
    fn serve_on_star(&self, req: &Request) -> (Epoch, Epoch) {
        let phase = req.epoch % self.route_length;

        let pickup_position = if req.origin.index() == 0 {
            // Next hub visit strictly after the current phase.
            phase + 2.0 - phase % 2.0
        } else {
            2.0 * req.origin.index() as Epoch - 1.0
        };
        let pickup = if req.origin.index() == 0 || pickup_position >= phase {
            req.epoch + pickup_position - phase
        } else {
            req.epoch + pickup_position - phase + self.route_length
        };

        let dropoff = if req.destination.index() == 0 {
            // Any leaf is one hop from the hub.
            pickup + 1.0
        } else {
            let dropoff_position = 2.0 * req.destination.index() as Epoch - 1.0;
            if dropoff_position > pickup_position {
                pickup + dropoff_position - pickup_position
            } else {
                pickup + dropoff_position - pickup_position + self.route_length
            }
        };
        (pickup, dropoff)
    }
}

impl VehiclePolicy for FixedRouteBus {
    fn process_new_request(&mut self, req: Request) -> SimResult<()> {
        let (pickup_epoch, dropoff_epoch) = match self.topology {
            Topology::Cycle | Topology::Grid => self.serve_on_loop(&req),
            Topology::Line => self.serve_on_line(&req),
            Topology::Star => self.serve_on_star(&req),
            other => return Err(SimError::UnsupportedFixedRoute(other)),
        };
        self.requests.insert(
            req.id,
            RequestRecord {
                origin: req.origin,
                destination: req.destination,
                req_epoch: req.epoch,
                pickup_epoch,
                dropoff_epoch,
            },
        );
        Ok(())
    }

    /// Fixed-route service makes no insertion decisions, so the insertion
    /// log is empty.
    fn output(self) -> SimOutput {
        SimOutput { requests: self.requests, insertions: Vec::new() }
    }
}
