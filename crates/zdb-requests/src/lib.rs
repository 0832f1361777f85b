//! `zdb-requests` — lazy, time-ordered request streams.
//!
//! A request stream is any `Iterator<Item = Request>` that yields requests in
//! non-decreasing epoch order.  The one concrete stream here,
//! [`UniformRequests`], draws origin/destination pairs uniformly at random
//! and spaces arrivals as a Poisson process.  Tests and replays can use a
//! plain `Vec<Request>` instead.

pub mod generator;

#[cfg(test)]
mod tests;

pub use generator::UniformRequests;
