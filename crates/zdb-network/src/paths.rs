//! All-pairs shortest-path and route-volume tables.
//!
//! Everything here is computed once at [`NetworkView`](crate::NetworkView)
//! construction and read-only thereafter.  Distances are unweighted hop
//! counts; shortest paths between a pair are enumerated exhaustively where a
//! mode needs them.
//!
//! # Enumeration order
//!
//! Candidate paths for a pair are produced by a depth-first walk that always
//! tries the smallest admissible neighbour first (CSR slices are sorted
//! ascending), so the path list is in lexicographic node order.  "First path
//! achieving the best score" is therefore the lexicographically smallest —
//! the deterministic tie-break the dynamic mode documents.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use zdb_core::NodeId;

use crate::graph::Graph;

/// Hop count marking a node pair with no connecting path.
pub(crate) const UNREACHABLE: u32 = u32::MAX;

// ── DistanceTable ─────────────────────────────────────────────────────────────

/// Flat `n × n` matrix of hop distances, filled by one BFS per source node.
pub(crate) struct DistanceTable {
    n: usize,
    dist: Vec<u32>,
}

impl DistanceTable {
    pub fn build(graph: &Graph) -> Self {
        let n = graph.node_count();
        let mut dist = vec![UNREACHABLE; n * n];
        for src in graph.nodes() {
            bfs(graph, src, &mut dist[src.index() * n..(src.index() + 1) * n]);
        }
        Self { n, dist }
    }

    #[inline]
    pub fn get(&self, u: NodeId, v: NodeId) -> u32 {
        self.dist[u.index() * self.n + v.index()]
    }

    /// A node unreachable from `NodeId(0)`, if any.  Connectivity probe for
    /// construction-time validation.
    pub fn unreachable_from_origin(&self) -> Option<NodeId> {
        self.dist[..self.n]
            .iter()
            .position(|&d| d == UNREACHABLE)
            .map(|i| NodeId(i as u32))
    }

    /// Mean hop distance over all ordered pairs `u ≠ v`.
    pub fn mean(&self) -> f64 {
        if self.n < 2 {
            return 0.0;
        }
        let sum: u64 = self.dist.iter().map(|&d| d as u64).sum();
        sum as f64 / (self.n * (self.n - 1)) as f64
    }
}

fn bfs(graph: &Graph, src: NodeId, out: &mut [u32]) {
    out[src.index()] = 0;
    let mut queue = VecDeque::new();
    queue.push_back(src);
    while let Some(node) = queue.pop_front() {
        let d = out[node.index()];
        for &next in graph.neighbors(node) {
            if out[next.index()] == UNREACHABLE {
                out[next.index()] = d + 1;
                queue.push_back(next);
            }
        }
    }
}

// ── Shortest-path enumeration ─────────────────────────────────────────────────

/// All shortest paths from `u` to `v`, in lexicographic node order.
///
/// For `u == v` the single trivial path `[u]` is returned.
pub(crate) fn enumerate_shortest_paths(
    graph: &Graph,
    dist: &DistanceTable,
    u: NodeId,
    v: NodeId,
) -> Vec<Vec<NodeId>> {
    if u == v {
        return vec![vec![u]];
    }
    if dist.get(u, v) == UNREACHABLE {
        // Disconnected pair; the view rejects such graphs right after the
        // table build, so nothing ever reads this.
        return Vec::new();
    }
    let mut paths = Vec::new();
    let mut prefix = vec![u];
    walk(graph, dist, v, u, &mut prefix, &mut paths);
    paths
}

/// Depth-first extension of `prefix` towards `target`, descending the BFS
/// distance field by exactly one hop per step.  `here` is the last node of
/// `prefix`.
fn walk(
    graph: &Graph,
    dist: &DistanceTable,
    target: NodeId,
    here: NodeId,
    prefix: &mut Vec<NodeId>,
    paths: &mut Vec<Vec<NodeId>>,
) {
    if here == target {
        paths.push(prefix.clone());
        return;
    }
    let remaining = dist.get(here, target);
    for &next in graph.neighbors(here) {
        if dist.get(next, target) + 1 == remaining {
            prefix.push(next);
            walk(graph, dist, target, next, prefix, paths);
            prefix.pop();
        }
    }
}

/// Union of all nodes (endpoints included) across a pair's shortest paths.
fn volume_set(paths: &[Vec<NodeId>]) -> FxHashSet<NodeId> {
    let mut set = FxHashSet::default();
    for path in paths {
        set.extend(path.iter().copied());
    }
    set
}

/// Intermediate-node count of a pair's volume set (endpoints discounted).
#[inline]
fn volume_count(set: &FxHashSet<NodeId>) -> usize {
    set.len().saturating_sub(2)
}

// ── PathStore ─────────────────────────────────────────────────────────────────

/// All enumerated shortest paths of one ordered pair plus the pair's volume
/// set.  Only materialized in dynamic mode.
pub(crate) struct PairPaths {
    pub paths: Vec<Vec<NodeId>>,
    pub volume: FxHashSet<NodeId>,
}

/// Mode-dependent per-pair path data, indexed by `u * n + v`.
pub(crate) enum PathStore {
    /// One path per pair, no volume data.  Unique-path topologies (any path
    /// equals the volume-optimal one) and no-volume mode.
    PathOnly(Vec<Vec<NodeId>>),
    /// One chosen path per pair plus the pair's volume set.  Static modes
    /// and the original-paper mode.
    WithVolume {
        chosen: Vec<Vec<NodeId>>,
        volume: Vec<FxHashSet<NodeId>>,
    },
    /// Every shortest path per pair.  Dynamic mode selects at query time.
    AllPaths(Vec<PairPaths>),
}

/// How the static modes rank a pair's candidate paths.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) enum StaticRank {
    MaxVolume,
    MinVolume,
    /// Take the first enumerated path without scoring (original-paper mode).
    First,
}

// ── PathTable ─────────────────────────────────────────────────────────────────

/// The complete precomputed cache: distances plus mode-dependent paths.
pub(crate) struct PathTable {
    pub n: usize,
    pub dist: DistanceTable,
    pub store: PathStore,
}

impl PathTable {
    #[inline]
    pub fn pair_index(&self, u: NodeId, v: NodeId) -> usize {
        u.index() * self.n + v.index()
    }

    /// One path per pair, volume machinery skipped entirely.
    pub fn build_path_only(graph: &Graph) -> Self {
        let dist = DistanceTable::build(graph);
        let n = graph.node_count();
        let mut chosen = Vec::with_capacity(n * n);
        for u in graph.nodes() {
            for v in graph.nodes() {
                chosen.push(first_shortest_path(graph, &dist, u, v));
            }
        }
        Self { n, dist, store: PathStore::PathOnly(chosen) }
    }

    /// One chosen path per pair (ranked per `rank`) plus per-pair volume sets.
    pub fn build_static(graph: &Graph, rank: StaticRank) -> Self {
        let dist = DistanceTable::build(graph);
        let n = graph.node_count();

        let mut all: Vec<Vec<Vec<NodeId>>> = Vec::with_capacity(n * n);
        let mut volume: Vec<FxHashSet<NodeId>> = Vec::with_capacity(n * n);
        for u in graph.nodes() {
            for v in graph.nodes() {
                let paths = enumerate_shortest_paths(graph, &dist, u, v);
                volume.push(volume_set(&paths));
                all.push(paths);
            }
        }

        let chosen: Vec<Vec<NodeId>> = all
            .iter()
            .enumerate()
            .map(|(idx, paths)| {
                if paths.is_empty() {
                    return Vec::new();
                }
                let v = NodeId((idx % n) as u32);
                let best = match rank {
                    StaticRank::First => 0,
                    _ => best_static_index(paths, v, n, &volume, rank),
                };
                paths[best].clone()
            })
            .collect();

        Self { n, dist, store: PathStore::WithVolume { chosen, volume } }
    }

    /// Every shortest path per pair, for query-time selection.
    pub fn build_dynamic(graph: &Graph) -> Self {
        let dist = DistanceTable::build(graph);
        let n = graph.node_count();
        let mut pairs = Vec::with_capacity(n * n);
        for u in graph.nodes() {
            for v in graph.nodes() {
                let paths = enumerate_shortest_paths(graph, &dist, u, v);
                let volume = volume_set(&paths);
                pairs.push(PairPaths { paths, volume });
            }
        }
        Self { n, dist, store: PathStore::AllPaths(pairs) }
    }
}

/// The lexicographically smallest shortest path from `u` to `v` — a greedy
/// descent of the BFS distance field, no enumeration needed.
fn first_shortest_path(graph: &Graph, dist: &DistanceTable, u: NodeId, v: NodeId) -> Vec<NodeId> {
    let mut path = vec![u];
    if dist.get(u, v) == UNREACHABLE {
        // See `enumerate_shortest_paths`: never observed past construction.
        return path;
    }
    let mut here = u;
    while here != v {
        let remaining = dist.get(here, v);
        // Connected graph: an admissible neighbour always exists.
        for &next in graph.neighbors(here) {
            if dist.get(next, v) + 1 == remaining {
                path.push(next);
                here = next;
                break;
            }
        }
    }
    path
}

/// Index of the path with the extremal static volume score.
///
/// A path's score is the summed intermediate-node volume of each interior
/// node paired with the destination — a proxy for how much free insertion
/// capacity the leg keeps downstream.  First extremum wins (ties resolve to
/// the lexicographically smallest path).
fn best_static_index(
    paths: &[Vec<NodeId>],
    v: NodeId,
    n: usize,
    volume: &[FxHashSet<NodeId>],
    rank: StaticRank,
) -> usize {
    let score = |path: &Vec<NodeId>| -> usize {
        path.get(1..path.len().saturating_sub(1))
            .unwrap_or(&[])
            .iter()
            .map(|w| volume_count(&volume[w.index() * n + v.index()]))
            .sum()
    };
    let mut best = 0;
    let mut best_score = score(&paths[0]);
    for (i, path) in paths.iter().enumerate().skip(1) {
        let s = score(path);
        let better = match rank {
            StaticRank::MaxVolume => s > best_score,
            StaticRank::MinVolume => s < best_score,
            StaticRank::First => false,
        };
        if better {
            best = i;
            best_score = s;
        }
    }
    best
}
