//! `zdb-network` — base graph, shortest-path tables, and route-volume queries.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`graph`]    | `Graph` (CSR adjacency), `GraphBuilder`                    |
//! | [`topology`] | `Topology` tag, line/cycle/star/wheel/grid constructors    |
//! | [`paths`]    | All-pairs BFS distances, shortest-path enumeration, volumes|
//! | [`view`]     | `NetworkView`, `PathMode`                                  |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod error;
pub mod graph;
pub mod paths;
pub mod topology;
pub mod view;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use graph::{Graph, GraphBuilder};
pub use topology::Topology;
pub use view::{NetworkView, PathMode};
