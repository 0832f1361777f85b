//! The zero-detour insertion vehicle.
//!
//! One vehicle with unbounded capacity serves a single stream of transport
//! requests.  Every new request is folded into the scheduled stop-list by
//! the insertion heuristic: a stop goes onto an existing leg only where it
//! causes *zero* detour (the leg's hop distance is unchanged), otherwise it
//! is appended at the end of the route.  The stop-list is therefore always
//! time-ordered, and consecutive stops are always exactly one shortest path
//! apart.
//!
//! Time is event-driven.  Between requests the vehicle's state is implicit
//! in the stop-list; on arrival of a request the clock fast-forwards to the
//! request epoch, serving every stop due until then.  If the vehicle ends up
//! mid-edge, the clock "jumps" ahead to its arrival at the next node — so
//! the clock may lead a later request's epoch by strictly less than one hop,
//! which [`ZeroDetourBus::process_new_request`] tolerates.

use std::collections::BTreeMap;

use zdb_core::{Epoch, JUMP_TOLERANCE, NodeId, Request, RequestId, Stop};
use zdb_network::NetworkView;

use crate::error::{SimError, SimResult};
use crate::policy::VehiclePolicy;
use crate::record::{InsertionKind, InsertionRecord, RequestRecord, SimOutput};
use crate::stoplist::StopList;

/// Single-vehicle scheduler over a shared routing view.
///
/// The view is borrowed so that parallel runs (one per request rate) can
/// share a single precomputed table.
pub struct ZeroDetourBus<'net> {
    view: &'net NetworkView,
    position: NodeId,
    clock: Epoch,
    /// Time until arrival at `position` when the clock has jumped mid-edge;
    /// transiently negative inside an insertion step, see
    /// [`ZeroDetourBus::process_new_request`].
    remaining: Epoch,
    stoplist: StopList,
    requests: BTreeMap<RequestId, RequestRecord>,
    insertions: Vec<InsertionRecord>,
}

impl<'net> ZeroDetourBus<'net> {
    pub fn new(view: &'net NetworkView, start: NodeId) -> Self {
        debug_assert!(start.index() < view.node_count());
        Self {
            view,
            position: start,
            clock: 0.0,
            remaining: 0.0,
            stoplist: StopList::new(),
            requests: BTreeMap::new(),
            insertions: Vec::new(),
        }
    }

    // ── State accessors ───────────────────────────────────────────────────

    #[inline]
    pub fn clock(&self) -> Epoch {
        self.clock
    }

    #[inline]
    pub fn position(&self) -> NodeId {
        self.position
    }

    #[inline]
    pub fn stoplist(&self) -> &[Stop] {
        self.stoplist.as_slice()
    }

    // ── Time advancement ──────────────────────────────────────────────────

    /// Serve every stop due by `t` and advance the clock.
    ///
    /// After the call `position` is a node (never mid-edge): if `t` falls
    /// inside a leg, `position` is the *next* node on it and the clock jumps
    /// to `t + remaining`, the arrival epoch at that node.  With no stop
    /// pending the vehicle idles in place and the clock is exactly `t`.
    fn fast_forward(&mut self, t: Epoch) {
        self.remaining = 0.0;

        let served = self.stoplist.as_slice().iter().take_while(|s| s.epoch <= t).count();
        for i in 0..served {
            let stop = self.stoplist.get(i);
            self.serve_stop(stop);
        }
        self.stoplist.drop_served(served);

        if let Some(next) = self.stoplist.first() {
            let (position, remaining) =
                self.interpolate(t, self.position, next.position, self.clock);
            self.position = position;
            self.remaining = remaining;
        }
        self.clock = t + self.remaining;
    }

    /// Arrive at a scheduled stop: the vehicle is at `stop.position` at
    /// exactly `stop.epoch`.
    fn serve_stop(&mut self, stop: Stop) {
        debug_assert!(stop.epoch >= self.clock);
        debug_assert!(!stop.is_sentinel());
        self.clock = stop.epoch;
        self.position = stop.position;
        self.remaining = 0.0;

        #[cfg(debug_assertions)]
        if let Some(id) = stop.request {
            use zdb_core::StopKind;
            let record = &self.requests[&id];
            match stop.kind {
                StopKind::Pickup => debug_assert_eq!(record.pickup_epoch, stop.epoch),
                StopKind::Dropoff => debug_assert_eq!(record.dropoff_epoch, stop.epoch),
                StopKind::Sentinel => {}
            }
        }
    }

    /// Where a vehicle that left `from` for `to` at `started_at` is at
    /// `current`, snapped forward to the next node.
    ///
    /// Returns the node and the time still needed to reach it (zero when
    /// `current` hits it exactly).  Since hops take unit time, the vehicle
    /// has fully traversed `⌈current − started_at⌉` hops' worth of path by
    /// the time the clock jumps.
    pub fn interpolate(
        &self,
        current: Epoch,
        from: NodeId,
        to: NodeId,
        started_at: Epoch,
    ) -> (NodeId, Epoch) {
        debug_assert!(current >= started_at);
        if current == started_at {
            return (from, 0.0);
        }
        let path = self.view.shortest_path(from, to, self.stoplist.as_slice());
        let hops = (path.len() - 1) as Epoch;
        if current >= started_at + hops {
            return (to, 0.0);
        }
        let elapsed = current - started_at;
        let traversed = elapsed.ceil() as usize;
        (path[traversed], traversed as Epoch - elapsed)
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    /// First leg at or after `from_index` onto which a stop at `position`
    /// fits without detour, together with the arrival epoch there.
    ///
    /// The zero-detour test is exact: with integral hop distances,
    /// `d(u, x) + d(x, v) == d(u, v)` holds iff `x` lies on some shortest
    /// path from `u` to `v`.
    fn on_route_insertion(
        &self,
        position: NodeId,
        from_index: usize,
    ) -> SimResult<(usize, Epoch)> {
        for (i, leg) in self.stoplist.suffix(from_index).windows(2).enumerate() {
            let (u, v) = (&leg[0], &leg[1]);
            let to_stop = self.view.distance(u.position, position);
            let through = to_stop + self.view.distance(position, v.position);
            if through == self.view.distance(u.position, v.position) {
                return Ok((from_index + i + 1, u.epoch + to_stop as Epoch));
            }
        }
        Err(SimError::OnRouteSearchFailed(position))
    }

    /// Appending position: after the last scheduled stop, arriving one
    /// shortest path later.
    fn appended_insertion(&self, position: NodeId) -> (usize, Epoch) {
        let last = self.stoplist.get(self.stoplist.len() - 1);
        let epoch = last.epoch + self.view.distance(last.position, position) as Epoch;
        (self.stoplist.len(), epoch)
    }

    /// Fold one request into the stop-list.  Expects the position sentinel
    /// at the head; never removes it.
    fn add_request(&mut self, req: &Request) -> SimResult<()> {
        debug_assert!(self.stoplist.first().is_some_and(Stop::is_sentinel));
        let len_at_entry = self.stoplist.len();

        // Pickup placement decides against the reachability of the route as
        // it stands, before any insertion.
        let full_volume = self.view.reachable_nodes_on_stoplist(self.stoplist.as_slice());
        let pickup_on_route = full_volume.contains(&req.origin);
        let (pickup_index, pickup_epoch) = if pickup_on_route {
            self.on_route_insertion(req.origin, 0)?
        } else {
            self.appended_insertion(req.origin)
        };
        self.stoplist.insert(pickup_index, Stop::pickup(req.origin, pickup_epoch, req.id));

        // The dropoff may only go after the pickup, so it decides against
        // the suffix starting there.
        let rest = self.stoplist.suffix(pickup_index);
        let rest_volume = self.view.reachable_nodes_on_stoplist(rest);
        let dropoff_on_route = rest_volume.contains(&req.destination);
        let (dropoff_index, dropoff_epoch) = if dropoff_on_route {
            self.on_route_insertion(req.destination, pickup_index)?
        } else {
            self.appended_insertion(req.destination)
        };
        self.stoplist
            .insert(dropoff_index, Stop::dropoff(req.destination, dropoff_epoch, req.id));

        let kind = match (pickup_on_route, dropoff_on_route) {
            (true, true) => InsertionKind::BothOnRoute,
            (true, false) => InsertionKind::PickupOnRoute,
            (false, _) => InsertionKind::NeitherOnRoute,
        };
        let stoplist_volume =
            self.view.reachable_nodes_on_stoplist(self.stoplist.as_slice()).len();
        self.insertions.push(InsertionRecord {
            epoch: self.clock,
            stoplist_len: len_at_entry,
            stoplist_volume,
            rest_volume: rest_volume.len(),
            // Indices are reported relative to the first real stop.
            pickup_index: pickup_index - 1,
            dropoff_index: dropoff_index - 1,
            kind,
        });
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

        tracing::trace!(
            request = %req.id,
            kind = kind.code(),
            pickup_epoch,
            dropoff_epoch,
            "request scheduled"
        );
        Ok(())
    }
}

impl VehiclePolicy for ZeroDetourBus<'_> {
    /// Advance the vehicle to the request's epoch and schedule its stops.
    ///
    /// If a previous fast-forward jumped the clock past `req.epoch`, the
    /// overshoot must stay below one hop; `remaining` is set negative for
    /// the duration of the step so the sentinel still marks the node the
    /// vehicle is heading to.
    fn process_new_request(&mut self, req: Request) -> SimResult<()> {
        if req.epoch < self.clock {
            if self.clock - req.epoch > JUMP_TOLERANCE {
                return Err(SimError::ArrivalOutOfOrder {
                    request: req.id,
                    epoch: req.epoch,
                    clock: self.clock,
                });
            }
            self.remaining = req.epoch - self.clock;
        } else {
            self.fast_forward(req.epoch);
        }

        self.stoplist.push_sentinel(self.position, self.clock);
        self.add_request(&req)?;
        self.stoplist.pop_sentinel()
    }

    fn output(self) -> SimOutput {
        SimOutput { requests: self.requests, insertions: self.insertions }
    }
}
