//! Simulation time model.
//!
//! # Design
//!
//! Time is a continuous, monotonically non-decreasing `Epoch` (an `f64`
//! number of time units since simulation start).  Traversing one graph edge
//! takes exactly [`HOP_TIME`] = 1 unit, so all *stop-to-stop* travel times
//! are exact integers and only the request arrival epochs carry fractional
//! parts.  This is what makes the scheduler's exact-equality bookkeeping
//! (`pickup_epoch == predecessor_epoch + hop_distance`) safe despite the
//! floating-point representation: sums of an integer and one fractional
//! offset are reproduced bit-identically.

/// A simulated timestamp, in time units since the run started.
pub type Epoch = f64;

/// Travel time per graph edge.  Uniform-speed, unweighted-hop model.
pub const HOP_TIME: Epoch = 1.0;

/// Maximum amount by which the vehicle clock may run *ahead* of a request's
/// arrival epoch.
///
/// The clock jumps to the arrival epoch at the vehicle's next node whenever
/// it is interpolated mid-edge, so it can lead the request stream by at most
/// one hop.  A larger gap means the request stream is out of order — a fatal
/// internal-consistency error.  Tied to [`HOP_TIME`]: if the hop cost ever
/// changes, this tolerance must be revisited.
pub const JUMP_TOLERANCE: Epoch = HOP_TIME;
