//! The vehicle-policy seam.
//!
//! A policy consumes a time-ordered request stream and produces service
//! records.  [`crate::ZeroDetourBus`] is the insertion heuristic;
//! [`crate::FixedRouteBus`] is the closed-form fixed-route baseline.

use zdb_core::Request;

use crate::error::SimResult;
use crate::record::SimOutput;

pub trait VehiclePolicy {
    /// Advance simulated time to the request's epoch and serve it.
    ///
    /// Requests must be fed in non-decreasing epoch order.
    fn process_new_request(&mut self, req: Request) -> SimResult<()>;

    /// Consume the policy and hand back everything it recorded.
    fn output(self) -> SimOutput;

    /// Drive the policy over a whole request stream.
    fn run<I>(mut self, requests: I) -> SimResult<SimOutput>
    where
        Self: Sized,
        I: IntoIterator<Item = Request>,
    {
        for req in requests {
            self.process_new_request(req)?;
        }
        Ok(self.output())
    }
}
