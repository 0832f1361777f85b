//! `zdb-core` — foundational types for the zero-detour bus simulator.
//!
//! This crate is a dependency of every other `zdb-*` crate.  It intentionally
//! has no `zdb-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`ids`]     | `NodeId`, `RequestId`                           |
//! | [`time`]    | `Epoch`, `HOP_TIME`, `JUMP_TOLERANCE`           |
//! | [`request`] | `Request` — one transportation request          |
//! | [`stop`]    | `Stop`, `StopKind` — stop-list elements         |
//! | [`rng`]     | `StreamRng` — deterministic seeded RNG          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod request;
pub mod rng;
pub mod stop;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{NodeId, RequestId};
pub use request::Request;
pub use rng::StreamRng;
pub use stop::{Stop, StopKind};
pub use time::{Epoch, HOP_TIME, JUMP_TOLERANCE};
