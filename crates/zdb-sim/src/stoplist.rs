//! The vehicle's scheduled stop-list.
//!
//! A thin wrapper around `Vec<Stop>` that owns all index surgery: sentinel
//! push/pop around an insertion step, mid-list insertion, and draining the
//! served prefix on fast-forward.  Stops are kept in non-decreasing epoch
//! order at all times.

use zdb_core::{Epoch, NodeId, Stop};

use crate::error::{SimError, SimResult};

#[derive(Clone, Debug, Default)]
pub struct StopList {
    stops: Vec<Stop>,
}

impl StopList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Stop] {
        &self.stops
    }

    #[inline]
    pub fn first(&self) -> Option<&Stop> {
        self.stops.first()
    }

    /// Copy of the stop at `index`.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Stop {
        self.stops[index]
    }

    /// The stops from `from` (inclusive) to the end.
    #[inline]
    pub fn suffix(&self, from: usize) -> &[Stop] {
        &self.stops[from..]
    }

    /// Insert `stop` at `index`, shifting later stops back.
    pub fn insert(&mut self, index: usize, stop: Stop) {
        debug_assert!(index <= self.stops.len());
        self.stops.insert(index, stop);
        debug_assert!(self.is_time_ordered());
    }

    /// Drop the first `count` stops (the prefix served by a fast-forward).
    pub fn drop_served(&mut self, count: usize) {
        self.stops.drain(..count);
    }

    /// Mark the vehicle's current position by a sentinel stop at the head.
    /// Must be paired with [`StopList::pop_sentinel`] within one insertion
    /// step.
    pub fn push_sentinel(&mut self, position: NodeId, epoch: Epoch) {
        debug_assert!(!self.stops.first().is_some_and(Stop::is_sentinel));
        self.stops.insert(0, Stop::sentinel(position, epoch));
    }

    /// Remove the sentinel pushed by [`StopList::push_sentinel`], verifying
    /// the head is still the sentinel.
    pub fn pop_sentinel(&mut self) -> SimResult<()> {
        if !self.stops.first().is_some_and(Stop::is_sentinel) {
            return Err(SimError::SentinelMissing);
        }
        self.stops.remove(0);
        Ok(())
    }

    /// Whether stop epochs are non-decreasing front to back.
    pub fn is_time_ordered(&self) -> bool {
        self.stops.windows(2).all(|pair| pair[0].epoch <= pair[1].epoch)
    }
}
