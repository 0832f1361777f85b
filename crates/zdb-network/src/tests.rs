//! Unit tests for zdb-network.

use zdb_core::{NodeId, RequestId, Stop};

use crate::graph::GraphBuilder;
use crate::topology::{cycle_graph, grid_graph, line_graph, star_graph, wheel_graph, Topology};
use crate::view::{NetworkView, PathMode};
use crate::NetworkError;

fn n(i: u32) -> NodeId {
    NodeId(i)
}

/// 7-node graph with three shortest paths from 0 to 3 and asymmetric
/// volume scores:
///
/// ```text
/// 0 — 1 — 2 — 3      paths 0→3: 0-1-2-3, 0-1-6-3, 0-4-5-3
///  \   \     /|
///   \   6 — / |
///    4 — 5 —— +
/// ```
fn three_path_graph() -> crate::Graph {
    let mut b = GraphBuilder::with_nodes(7);
    for (a, c) in [(0, 1), (1, 2), (2, 3), (0, 4), (4, 5), (5, 3), (1, 6), (6, 3)] {
        b.add_edge(n(a), n(c));
    }
    b.build()
}

#[cfg(test)]
mod graph {
    use super::*;

    #[test]
    fn builder_sorts_and_dedups() {
        let mut b = GraphBuilder::with_nodes(3);
        b.add_edge(n(2), n(0));
        b.add_edge(n(0), n(1));
        b.add_edge(n(1), n(0)); // duplicate, reversed
        let g = b.build();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(n(0)), &[n(1), n(2)]);
        assert_eq!(g.degree(n(1)), 1);
    }

    #[test]
    fn self_loops_are_dropped() {
        let mut b = GraphBuilder::with_nodes(2);
        b.add_edge(n(0), n(0));
        b.add_edge(n(0), n(1));
        assert_eq!(b.build().edge_count(), 1);
    }
}

#[cfg(test)]
mod topology {
    use super::*;

    #[test]
    fn constructors_have_expected_shape() {
        assert_eq!(line_graph(5).edge_count(), 4);
        assert_eq!(cycle_graph(10).edge_count(), 10);
        let star = star_graph(6);
        assert_eq!(star.edge_count(), 5);
        assert_eq!(star.degree(n(0)), 5);
        // wheel: hub degree n-1, rim nodes degree 3
        let wheel = wheel_graph(7);
        assert_eq!(wheel.degree(n(0)), 6);
        assert_eq!(wheel.degree(n(1)), 3);
        // 3x3 grid: corner degree 2, center degree 4
        let grid = grid_graph(3);
        assert_eq!(grid.node_count(), 9);
        assert_eq!(grid.degree(n(0)), 2);
        assert_eq!(grid.degree(n(4)), 4);
    }

    #[test]
    fn unique_path_classes() {
        assert!(Topology::Cycle.has_unique_shortest_paths());
        assert!(Topology::Line.has_unique_shortest_paths());
        assert!(Topology::Star.has_unique_shortest_paths());
        assert!(!Topology::Grid.has_unique_shortest_paths());
        assert!(!Topology::Wheel.has_unique_shortest_paths());
    }
}

#[cfg(test)]
mod distances {
    use super::*;

    #[test]
    fn cycle_distances_wrap() {
        let view =
            NetworkView::new(cycle_graph(10), Topology::Cycle, PathMode::OriginalPaper).unwrap();
        assert_eq!(view.distance(n(0), n(5)), 5);
        assert_eq!(view.distance(n(1), n(3)), 2);
        assert_eq!(view.distance(n(0), n(9)), 1);
        assert_eq!(view.distance(n(4), n(4)), 0);
        // symmetry
        assert_eq!(view.distance(n(2), n(8)), view.distance(n(8), n(2)));
    }

    #[test]
    fn mean_length_of_line() {
        // line of 3: distances 1,2,1 each way → mean = 8/6
        let view = NetworkView::new(line_graph(3), Topology::Line, PathMode::OriginalPaper).unwrap();
        assert!((view.mean_shortest_path_length() - 8.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn disconnected_graph_is_rejected() {
        let mut b = GraphBuilder::with_nodes(4);
        b.add_edge(n(0), n(1));
        b.add_edge(n(2), n(3));
        let err = NetworkView::new(b.build(), Topology::Other, PathMode::OriginalPaper);
        assert!(matches!(err, Err(NetworkError::Disconnected(_))));
    }

    #[test]
    fn empty_graph_is_rejected() {
        let err = NetworkView::new(
            GraphBuilder::with_nodes(0).build(),
            Topology::Other,
            PathMode::OriginalPaper,
        );
        assert!(matches!(err, Err(NetworkError::EmptyGraph)));
    }
}

#[cfg(test)]
mod modes {
    use super::*;

    #[test]
    fn mode_strings_roundtrip() {
        for mode in [
            PathMode::StaticMax,
            PathMode::StaticMin,
            PathMode::Dynamic,
            PathMode::OriginalPaper,
            PathMode::NoVolume,
        ] {
            assert_eq!(mode.as_str().parse::<PathMode>().unwrap(), mode);
        }
        assert!("detour-max".parse::<PathMode>().is_err());
    }

    #[test]
    fn unique_topology_collapses_volume_modes() {
        let view = NetworkView::new(cycle_graph(10), Topology::Cycle, PathMode::Dynamic).unwrap();
        assert_eq!(view.requested_mode(), PathMode::Dynamic);
        assert_eq!(view.mode(), PathMode::OriginalPaper);
        // enroute comes from the unique path
        let enroute = view.nodes_enroute(n(1), n(3));
        assert_eq!(enroute.len(), 3);
        assert!(enroute.contains(&n(2)));
    }

    #[test]
    fn no_volume_mode_reports_nothing_enroute() {
        let view = NetworkView::new(cycle_graph(10), Topology::Cycle, PathMode::NoVolume).unwrap();
        assert!(view.nodes_enroute(n(1), n(3)).is_empty());
        let stops =
            vec![Stop::sentinel(n(0), 0.0), Stop::pickup(n(1), 1.0, RequestId(0))];
        assert!(view.reachable_nodes_on_stoplist(&stops).is_empty());
    }

    #[test]
    fn static_max_and_min_rank_candidate_paths() {
        let max_view =
            NetworkView::new(three_path_graph(), Topology::Other, PathMode::StaticMax).unwrap();
        let min_view =
            NetworkView::new(three_path_graph(), Topology::Other, PathMode::StaticMin).unwrap();
        // scores: 0-1-2-3 → 2, 0-1-6-3 → 2, 0-4-5-3 → 1
        assert_eq!(max_view.shortest_path(n(0), n(3), &[]), &[n(0), n(1), n(2), n(3)]);
        assert_eq!(min_view.shortest_path(n(0), n(3), &[]), &[n(0), n(4), n(5), n(3)]);
        // the volume set spans the whole graph either way
        assert_eq!(max_view.nodes_enroute(n(0), n(3)).len(), 7);
    }

    #[test]
    fn dynamic_mode_prefers_uncovered_paths() {
        let view = NetworkView::new(grid_graph(2), Topology::Grid, PathMode::Dynamic).unwrap();
        // no scheduled legs: lexicographically smallest path wins
        assert_eq!(view.shortest_path(n(0), n(3), &[]), &[n(0), n(1), n(3)]);
        // a leg (0,1) covers nodes {0,1}; 0-2-3 now contributes two fresh nodes
        let stops = vec![
            Stop::sentinel(n(0), 0.0),
            Stop::pickup(n(1), 1.0, RequestId(0)),
        ];
        assert_eq!(view.shortest_path(n(0), n(3), &stops), &[n(0), n(2), n(3)]);
    }
}

#[cfg(test)]
mod volumes {
    use super::*;

    #[test]
    fn reachable_nodes_over_stoplist_legs() {
        let view =
            NetworkView::new(cycle_graph(10), Topology::Cycle, PathMode::OriginalPaper).unwrap();
        let stops = vec![
            Stop::sentinel(n(0), 0.2),
            Stop::pickup(n(1), 1.2, RequestId(0)),
            Stop::dropoff(n(3), 3.2, RequestId(0)),
        ];
        let reachable = view.reachable_nodes_on_stoplist(&stops);
        assert_eq!(reachable.len(), 4); // {0, 1, 2, 3}
        for i in 0..4 {
            assert!(reachable.contains(&n(i)));
        }
    }

    #[test]
    fn single_stop_has_no_legs() {
        let view =
            NetworkView::new(cycle_graph(10), Topology::Cycle, PathMode::OriginalPaper).unwrap();
        let stops = vec![Stop::sentinel(n(0), 0.0)];
        assert!(view.reachable_nodes_on_stoplist(&stops).is_empty());
    }

    #[test]
    fn degenerate_leg_contributes_its_node() {
        let view =
            NetworkView::new(cycle_graph(10), Topology::Cycle, PathMode::OriginalPaper).unwrap();
        let stops = vec![
            Stop::sentinel(n(7), 8.0),
            Stop::dropoff(n(7), 8.0, RequestId(2)),
        ];
        let reachable = view.reachable_nodes_on_stoplist(&stops);
        assert_eq!(reachable.len(), 1);
        assert!(reachable.contains(&n(7)));
    }

    #[test]
    fn volume_set_spans_all_shortest_paths() {
        let view = NetworkView::new(grid_graph(2), Topology::Grid, PathMode::StaticMax).unwrap();
        // both 0-1-3 and 0-2-3 are shortest → volume is all four nodes
        assert_eq!(view.nodes_enroute(n(0), n(3)).len(), 4);
    }
}
