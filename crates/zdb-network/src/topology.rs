//! Standard test topologies and the topology tag.
//!
//! All constructors produce connected graphs over `NodeId(0)..NodeId(n-1)`.
//! The [`Topology`] tag travels alongside the graph into the
//! [`NetworkView`](crate::NetworkView): line, cycle, and star graphs have a
//! unique shortest path between every node pair, which lets the view skip
//! all volume machinery for them.

use zdb_core::NodeId;

use crate::graph::{Graph, GraphBuilder};

/// The class of the base graph.
///
/// Used for two things: collapsing volume-aware path modes on unique-path
/// topologies, and selecting the fixed-route closed form of the
/// conventional-bus baseline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    Line,
    Cycle,
    Star,
    Wheel,
    /// Square grid; the side length is implied by the node count.
    Grid,
    /// Anything else (imported or ad-hoc graphs).
    Other,
}

impl Topology {
    /// `true` if every node pair has exactly one shortest path, making any
    /// path-selection mode equivalent to plain lookup.
    ///
    /// Even cycles have antipodal pairs with two shortest paths; they are
    /// still treated as unique-path here, matching the route-structure
    /// analysis this simulator feeds (either arc is volume-optimal).
    pub fn has_unique_shortest_paths(self) -> bool {
        matches!(self, Topology::Line | Topology::Cycle | Topology::Star)
    }
}

/// Path graph `0 — 1 — … — n-1`.
pub fn line_graph(n: usize) -> Graph {
    debug_assert!(n >= 2);
    let mut b = GraphBuilder::with_nodes(n);
    for i in 0..n - 1 {
        b.add_edge(NodeId(i as u32), NodeId(i as u32 + 1));
    }
    b.build()
}

/// Cycle graph on `n` nodes.
pub fn cycle_graph(n: usize) -> Graph {
    debug_assert!(n >= 3);
    let mut b = GraphBuilder::with_nodes(n);
    for i in 0..n {
        b.add_edge(NodeId(i as u32), NodeId(((i + 1) % n) as u32));
    }
    b.build()
}

/// Star graph: hub `0` connected to leaves `1..n-1`.
pub fn star_graph(n: usize) -> Graph {
    debug_assert!(n >= 2);
    let mut b = GraphBuilder::with_nodes(n);
    for i in 1..n {
        b.add_edge(NodeId(0), NodeId(i as u32));
    }
    b.build()
}

/// Wheel graph: hub `0` plus a cycle over `1..n-1`, with spokes to the hub.
pub fn wheel_graph(n: usize) -> Graph {
    debug_assert!(n >= 4);
    let rim = n - 1;
    let mut b = GraphBuilder::with_nodes(n);
    for i in 1..n {
        b.add_edge(NodeId(0), NodeId(i as u32));
    }
    for i in 0..rim {
        b.add_edge(NodeId(1 + i as u32), NodeId(1 + ((i + 1) % rim) as u32));
    }
    b.build()
}

/// `side × side` square grid.  Node `(row, col)` has id `row * side + col`.
pub fn grid_graph(side: usize) -> Graph {
    debug_assert!(side >= 2);
    let id = |r: usize, c: usize| NodeId((r * side + c) as u32);
    let mut b = GraphBuilder::with_nodes(side * side);
    for r in 0..side {
        for c in 0..side {
            if c + 1 < side {
                b.add_edge(id(r, c), id(r, c + 1));
            }
            if r + 1 < side {
                b.add_edge(id(r, c), id(r + 1, c));
            }
        }
    }
    b.build()
}
