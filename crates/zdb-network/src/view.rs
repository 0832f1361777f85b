//! `NetworkView` — the read-only routing facade the scheduler queries.
//!
//! Wraps a [`Graph`] together with its precomputed [`PathTable`] and answers
//! three kinds of questions:
//!
//! - `distance(u, v)` — exact hop count,
//! - `shortest_path(u, v, stoplist)` — one shortest path, chosen per the
//!   active [`PathMode`] (the stop-list context matters only in dynamic
//!   mode),
//! - `nodes_enroute(u, v)` / `reachable_nodes_on_stoplist(..)` — the
//!   route-volume queries backing the zero-detour insertion test.
//!
//! Construction is the expensive part (all-pairs BFS, and exhaustive path
//! enumeration for the volume-aware modes); build once per (graph, mode)
//! pair and share by reference across simulation runs.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;

use zdb_core::{NodeId, Stop};

use crate::error::{NetworkError, NetworkResult};
use crate::graph::Graph;
use crate::paths::{PathStore, PathTable, StaticRank};
use crate::topology::Topology;

// ── PathMode ──────────────────────────────────────────────────────────────────

/// How a shortest path is selected when a node pair has several.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathMode {
    /// Per pair, the path with the largest static volume score.
    StaticMax,
    /// Per pair, the path with the smallest static volume score.
    StaticMin,
    /// Query-time selection: the path contributing the most nodes not yet
    /// covered by the scheduled route.  Ties go to the lexicographically
    /// smallest path.
    Dynamic,
    /// One fixed shortest path per pair, no volume ranking (the choice of
    /// the original paper).
    OriginalPaper,
    /// Volume computation disabled: `nodes_enroute` is always empty, so
    /// every pickup/dropoff is treated as off-route.
    NoVolume,
}

impl PathMode {
    pub fn as_str(self) -> &'static str {
        match self {
            PathMode::StaticMax => "static-max",
            PathMode::StaticMin => "static-min",
            PathMode::Dynamic => "dynamic",
            PathMode::OriginalPaper => "original-paper",
            PathMode::NoVolume => "no-volume",
        }
    }
}

impl fmt::Display for PathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static-max" => Ok(PathMode::StaticMax),
            "static-min" => Ok(PathMode::StaticMin),
            "dynamic" => Ok(PathMode::Dynamic),
            "original-paper" => Ok(PathMode::OriginalPaper),
            "no-volume" => Ok(PathMode::NoVolume),
            other => Err(format!("unknown path mode {other:?}")),
        }
    }
}

/// Where `nodes_enroute` takes its answer from.
#[derive(Copy, Clone, PartialEq, Eq)]
enum EnrouteSource {
    /// Nodes of the (unique) stored path.
    Path,
    /// Always empty (no-volume mode).
    Empty,
    /// The pair's precomputed volume set.
    Volume,
}

// ── NetworkView ───────────────────────────────────────────────────────────────

/// Read-only routing and volume oracle over a fixed connected graph.
pub struct NetworkView {
    graph: Graph,
    topology: Topology,
    /// The mode the caller asked for.
    requested: PathMode,
    /// The mode actually in effect after topology fallback.
    mode: PathMode,
    enroute: EnrouteSource,
    table: PathTable,
}

impl NetworkView {
    /// Build the view, precomputing everything the mode needs.
    ///
    /// An unsupported mode × topology combination is *not* an error: on
    /// line/cycle/star topologies every shortest path is unique, so any
    /// volume-aware mode collapses to plain lookup with a warning.  A
    /// disconnected or empty graph is a hard error.
    pub fn new(graph: Graph, topology: Topology, mode: PathMode) -> NetworkResult<Self> {
        if graph.is_empty() {
            return Err(NetworkError::EmptyGraph);
        }

        let unique = topology.has_unique_shortest_paths();
        let (effective, enroute) = match mode {
            PathMode::NoVolume => (PathMode::NoVolume, EnrouteSource::Empty),
            _ if unique => {
                if mode != PathMode::OriginalPaper {
                    tracing::warn!(
                        topology = ?topology,
                        requested = %mode,
                        "every shortest path on this topology is volume-optimal; \
                         falling back to plain shortest-path lookup"
                    );
                }
                (PathMode::OriginalPaper, EnrouteSource::Path)
            }
            m => (m, EnrouteSource::Volume),
        };

        let table = match (effective, enroute) {
            (_, EnrouteSource::Empty) | (_, EnrouteSource::Path) => {
                PathTable::build_path_only(&graph)
            }
            (PathMode::StaticMax, _) => PathTable::build_static(&graph, StaticRank::MaxVolume),
            (PathMode::StaticMin, _) => PathTable::build_static(&graph, StaticRank::MinVolume),
            (PathMode::OriginalPaper, _) => PathTable::build_static(&graph, StaticRank::First),
            (PathMode::Dynamic, _) => PathTable::build_dynamic(&graph),
            (PathMode::NoVolume, _) => unreachable!("handled by enroute source"),
        };

        if let Some(node) = table.dist.unreachable_from_origin() {
            return Err(NetworkError::Disconnected(node));
        }

        Ok(Self { graph, topology, requested: mode, mode: effective, enroute, table })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// The mode in effect (after any topology fallback).
    pub fn mode(&self) -> PathMode {
        self.mode
    }

    pub fn requested_mode(&self) -> PathMode {
        self.requested
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Exact hop distance between `u` and `v`.  Total for connected graphs
    /// (checked at construction); symmetric.
    #[inline]
    pub fn distance(&self, u: NodeId, v: NodeId) -> u32 {
        self.table.dist.get(u, v)
    }

    /// Mean hop distance over all ordered node pairs.  Used to convert
    /// normalized request rates into absolute ones.
    pub fn mean_shortest_path_length(&self) -> f64 {
        self.table.dist.mean()
    }

    /// One shortest path from `u` to `v` as a node sequence (endpoints
    /// included).  In dynamic mode the choice depends on `stoplist`: among
    /// the pair's shortest paths, the one contributing the most nodes not
    /// already covered by the scheduled legs wins, first (lexicographically
    /// smallest) on ties.
    pub fn shortest_path(&self, u: NodeId, v: NodeId, stoplist: &[Stop]) -> &[NodeId] {
        let idx = self.table.pair_index(u, v);
        match &self.table.store {
            PathStore::PathOnly(chosen) => &chosen[idx],
            PathStore::WithVolume { chosen, .. } => &chosen[idx],
            PathStore::AllPaths(pairs) => {
                let covered = self.covered_volume(stoplist);
                let candidates = &pairs[idx].paths;
                let mut best = &candidates[0];
                let mut best_gain = usize::MIN;
                for path in candidates {
                    let gain = path.iter().filter(|n| !covered.contains(n)).count();
                    if gain > best_gain {
                        best = path;
                        best_gain = gain;
                    }
                }
                best
            }
        }
    }

    /// All nodes lying on *some* shortest path between `u` and `v`
    /// (endpoints included) — the pair's volume set under the active mode.
    pub fn nodes_enroute(&self, u: NodeId, v: NodeId) -> FxHashSet<NodeId> {
        match self.enroute {
            EnrouteSource::Empty => FxHashSet::default(),
            EnrouteSource::Path => {
                let idx = self.table.pair_index(u, v);
                let path = match &self.table.store {
                    PathStore::PathOnly(chosen) => &chosen[idx],
                    _ => unreachable!("path enroute source implies path-only store"),
                };
                path.iter().copied().collect()
            }
            EnrouteSource::Volume => self.pair_volume(u, v).clone(),
        }
    }

    /// Union of `nodes_enroute` over every consecutive stop pair.
    ///
    /// Node pairs already covered — either checked directly or known to lie
    /// on an earlier leg's route — are skipped within one call.  Purely a
    /// memoization; the result is the same without it.
    pub fn reachable_nodes_on_stoplist(&self, stoplist: &[Stop]) -> FxHashSet<NodeId> {
        let mut checked: FxHashSet<(NodeId, NodeId)> = FxHashSet::default();
        let mut nodes: FxHashSet<NodeId> = FxHashSet::default();
        for leg in stoplist.windows(2) {
            // Shortest paths are symmetric, so each unordered pair needs one check.
            let (a, b) = ordered(leg[0].position, leg[1].position);
            if checked.insert((a, b)) {
                let on_route = self.nodes_enroute(a, b);
                // Any pair of `a` with a node on this route is covered too.
                for &w in &on_route {
                    checked.insert(ordered(a, w));
                }
                nodes.extend(on_route);
            }
        }
        nodes
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// The stored volume set of a pair.  Only callable in modes that keep one.
    fn pair_volume(&self, u: NodeId, v: NodeId) -> &FxHashSet<NodeId> {
        let idx = self.table.pair_index(u, v);
        match &self.table.store {
            PathStore::WithVolume { volume, .. } => &volume[idx],
            PathStore::AllPaths(pairs) => &pairs[idx].volume,
            PathStore::PathOnly(_) => {
                unreachable!("volume enroute source implies a volume-carrying store")
            }
        }
    }

    /// Union of volume sets over the currently scheduled legs — what the
    /// dynamic mode diffs candidate paths against.
    fn covered_volume(&self, stoplist: &[Stop]) -> FxHashSet<NodeId> {
        let mut covered = FxHashSet::default();
        for leg in stoplist.windows(2) {
            covered.extend(self.pair_volume(leg[0].position, leg[1].position).iter().copied());
        }
        covered
    }
}

#[inline]
fn ordered(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b { (a, b) } else { (b, a) }
}
