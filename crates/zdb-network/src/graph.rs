//! Base graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for adjacency.
//! Given a `NodeId n`, its neighbours occupy the slice:
//!
//! ```text
//! adjacency[ out_start[n] .. out_start[n+1] ]
//! ```
//!
//! Edges are undirected and unweighted (every hop costs one time unit), so
//! each edge is stored as two directed arcs.  Within a node's slice the
//! neighbours are sorted ascending — path enumeration over this layout
//! yields candidate shortest paths in lexicographic order, which the
//! dynamic-volume tie-break relies on.

use zdb_core::NodeId;

/// Simple, connected, undirected graph in CSR form.
///
/// Do not construct directly; use [`GraphBuilder`].
pub struct Graph {
    /// CSR row pointer.  Neighbours of node `n` are at
    /// `adjacency[out_start[n] .. out_start[n+1]]`.  Length = `node_count + 1`.
    out_start: Vec<u32>,
    /// Flat neighbour array, sorted ascending within each node's slice.
    adjacency: Vec<NodeId>,
}

impl Graph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.out_start.len() - 1
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// All node identities, in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count()).map(|i| NodeId(i as u32))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// The neighbours of `node`, sorted ascending.
    ///
    /// This is a contiguous slice — no heap allocation.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let start = self.out_start[node.index()] as usize;
        let end = self.out_start[node.index() + 1] as usize;
        &self.adjacency[start..end]
    }

    /// Degree of `node`.
    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts undirected edges in any order and deduplicates them;
/// `build()` sorts the arcs and constructs the CSR arrays.
///
/// # Example
///
/// ```
/// use zdb_network::GraphBuilder;
/// use zdb_core::NodeId;
///
/// let mut b = GraphBuilder::with_nodes(3);
/// b.add_edge(NodeId(0), NodeId(1));
/// b.add_edge(NodeId(1), NodeId(2));
/// let g = b.build();
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.edge_count(), 2);
/// assert_eq!(g.neighbors(NodeId(1)), &[NodeId(0), NodeId(2)]);
/// ```
pub struct GraphBuilder {
    node_count: usize,
    arcs: Vec<(NodeId, NodeId)>,
}

impl GraphBuilder {
    /// A builder over the fixed node set `0..n`.
    pub fn with_nodes(n: usize) -> Self {
        Self { node_count: n, arcs: Vec::new() }
    }

    /// Add an **undirected** edge between `a` and `b`.  Self-loops are
    /// ignored (they never lie on a shortest path).
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        debug_assert!(a.index() < self.node_count && b.index() < self.node_count);
        if a == b {
            return;
        }
        self.arcs.push((a, b));
        self.arcs.push((b, a));
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Consume the builder and produce a [`Graph`].
    ///
    /// Time complexity: O(E log E) for the arc sort.
    pub fn build(self) -> Graph {
        let node_count = self.node_count;

        let mut arcs = self.arcs;
        arcs.sort_unstable();
        arcs.dedup();

        let mut out_start = vec![0u32; node_count + 1];
        for &(from, _) in &arcs {
            out_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            out_start[i] += out_start[i - 1];
        }
        let adjacency: Vec<NodeId> = arcs.into_iter().map(|(_, to)| to).collect();
        debug_assert_eq!(out_start[node_count] as usize, adjacency.len());

        Graph { out_start, adjacency }
    }
}
