//! `zdb-sim` — the zero-detour bus simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`bus`]      | `ZeroDetourBus`, the insertion-heuristic vehicle          |
//! | [`fixed`]    | `FixedRouteBus`, the closed-form fixed-route baseline     |
//! | [`policy`]   | The `VehiclePolicy` trait both vehicles implement         |
//! | [`stoplist`] | `StopList`, the vehicle's time-ordered schedule           |
//! | [`record`]   | `RequestRecord`, `InsertionRecord`, `SimOutput`           |
//! | [`sweep`]    | Parallel request-rate sweeps over a shared `NetworkView`  |
//! | [`error`]    | `SimError`, `SimResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on output types.  |

pub mod bus;
pub mod error;
pub mod fixed;
pub mod policy;
pub mod record;
pub mod stoplist;
pub mod sweep;


pub use bus::ZeroDetourBus;
pub use error::{SimError, SimResult};
pub use fixed::FixedRouteBus;
pub use policy::VehiclePolicy;
pub use record::{InsertionKind, InsertionRecord, RequestRecord, SimOutput};
pub use sweep::{RateRun, SweepConfig, sweep_request_rates};
