//! Property tests over random interval graphs and random graphs.

use std::collections::BTreeSet;

use proptest::prelude::*;

use benzer_map::{maximal_cliques, reconstruct, transitively_orient, Graph, NodeId, PhysicalMap};

/// Overlap graph of closed intervals `[start, start + len]`.
fn interval_graph(intervals: &[(u32, u32)]) -> Graph {
    let labels: Vec<String> = (0..intervals.len()).map(|i| format!("m{:02}", i)).collect();
    let mut graph = Graph::with_nodes(labels.iter().map(String::as_str));
    for i in 0..intervals.len() {
        for j in (i + 1)..intervals.len() {
            let (a_start, a_len) = intervals[i];
            let (b_start, b_len) = intervals[j];
            if a_start <= b_start + b_len && b_start <= a_start + a_len {
                graph.add_undirected_edge(&labels[i], &labels[j]);
            }
        }
    }
    graph
}

fn random_graph(n: usize, bits: &[bool]) -> Graph {
    let labels: Vec<String> = (0..n).map(|i| format!("v{}", i)).collect();
    let mut graph = Graph::with_nodes(labels.iter().map(String::as_str));
    let mut bit = bits.iter();
    for i in 0..n {
        for j in (i + 1)..n {
            if bit.next().copied().unwrap_or(false) {
                graph.add_undirected_edge(&labels[i], &labels[j]);
            }
        }
    }
    graph
}

fn intervals() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec((0u32..20, 0u32..8), 1..12)
}

/// Every marker occupies a contiguous run of positions in the order.
fn assert_consecutive(map: &PhysicalMap) {
    let markers: BTreeSet<&NodeId> = map.cliques.iter().flat_map(|(_, c)| c.iter()).collect();
    for node in markers {
        let positions: Vec<usize> = map
            .order
            .iter()
            .enumerate()
            .filter(|(_, label)| map.cliques.get(label).is_some_and(|c| c.contains(node)))
            .map(|(i, _)| i)
            .collect();
        let first = positions[0];
        let last = positions[positions.len() - 1];
        assert_eq!(positions.len(), last - first + 1, "{} is not contiguous", node);
    }
}

/// Fewest marker spans covering every position, by dynamic programming.
fn minimum_cover(map: &PhysicalMap) -> usize {
    let positions = map.windows.len();
    let mut spans = Vec::new();
    for (start, starting) in map.windows.starts.iter().enumerate() {
        for marker in starting {
            let end = map.windows.ends.iter().position(|e| e.contains(marker)).unwrap();
            spans.push((start, end));
        }
    }

    // fewest[k]: spans needed to cover positions 0..k.
    let mut fewest = vec![usize::MAX; positions + 1];
    fewest[0] = 0;
    for k in 0..positions {
        if fewest[k] == usize::MAX {
            continue;
        }
        for &(start, end) in &spans {
            if start <= k && k <= end {
                fewest[end + 1] = fewest[end + 1].min(fewest[k] + 1);
            }
        }
    }
    fewest[positions]
}

proptest! {
    #[test]
    fn prop_interval_graphs_reconstruct(intervals in intervals()) {
        let overlap = interval_graph(&intervals);
        let map = reconstruct(&overlap).unwrap();

        prop_assert_eq!(map.order.len(), map.cliques.len());
        assert_consecutive(&map);
    }

    #[test]
    fn prop_orientation_is_a_transitive_dag(intervals in intervals()) {
        let complement = interval_graph(&intervals).complement();
        let oriented = transitively_orient(&complement).unwrap();

        prop_assert_eq!(oriented.edge_count(), complement.edge_count());
        for (a, b) in oriented.edges() {
            prop_assert!(complement.has_edge(a, b));
            prop_assert!(!oriented.has_edge(b, a), "2-cycle between {} and {}", a, b);
            for c in oriented.successors(b) {
                prop_assert!(oriented.has_edge(a, &c), "{} → {} → {} without {} → {}", a, b, c, a, c);
            }
        }
    }

    #[test]
    fn prop_windows_start_and_end_each_marker_once(intervals in intervals()) {
        let map = reconstruct(&interval_graph(&intervals)).unwrap();

        let starts: usize = map.windows.starts.iter().map(|s| s.len()).sum();
        let ends: usize = map.windows.ends.iter().map(|s| s.len()).sum();
        prop_assert_eq!(starts, intervals.len());
        prop_assert_eq!(ends, intervals.len());

        for (i, starting) in map.windows.starts.iter().enumerate() {
            for marker in starting {
                let end = map.windows.ends.iter().position(|e| e.contains(marker)).unwrap();
                prop_assert!(end >= i);
            }
        }
    }

    #[test]
    fn prop_tiling_path_covers_every_position(intervals in intervals()) {
        let map = reconstruct(&interval_graph(&intervals)).unwrap();
        let spans = &map.tiling_path.spans;

        prop_assert!(!spans.is_empty());
        prop_assert_eq!(spans[0].0, 0);
        prop_assert_eq!(spans[spans.len() - 1].1, map.order.len() - 1);
        for pair in spans.windows(2) {
            prop_assert!(pair[1].0 <= pair[0].1 + 1);
            prop_assert!(pair[1].1 > pair[0].1);
        }
        prop_assert_eq!(map.genome_label.chars().count(), 3 * spans.len());
    }

    #[test]
    fn prop_tiling_path_is_minimal(intervals in intervals()) {
        let map = reconstruct(&interval_graph(&intervals)).unwrap();
        prop_assert_eq!(map.tiling_path.len(), minimum_cover(&map));
    }

    #[test]
    fn prop_reconstruction_is_deterministic(intervals in intervals()) {
        let overlap = interval_graph(&intervals);
        let first = reconstruct(&overlap).unwrap();
        let second = reconstruct(&overlap.clone()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_complement_is_an_involution(
        n in 0usize..10,
        bits in prop::collection::vec(any::<bool>(), 45)
    ) {
        let graph = random_graph(n, &bits);
        let complement = graph.complement();

        prop_assert_eq!(complement.complement(), graph.clone());
        prop_assert_eq!(graph.edge_count() + complement.edge_count(), n * n.saturating_sub(1) / 2);
    }

    #[test]
    fn prop_cliques_are_maximal_and_sorted(
        n in 1usize..10,
        bits in prop::collection::vec(any::<bool>(), 45)
    ) {
        let graph = random_graph(n, &bits);
        let cliques = maximal_cliques(&graph);

        for pair in cliques.windows(2) {
            prop_assert!(pair[0].len() >= pair[1].len());
        }
        for clique in &cliques {
            let members: Vec<_> = clique.iter().collect();
            for (i, a) in members.iter().enumerate() {
                for b in &members[i + 1..] {
                    prop_assert!(graph.is_adjacent(a, b));
                }
            }
            for outside in graph.nodes().filter(|v| !clique.contains(v)) {
                prop_assert!(!clique.iter().all(|m| graph.is_adjacent(m, outside)));
            }
        }
        for node in graph.nodes() {
            prop_assert!(cliques.iter().any(|c| c.contains(node)));
        }
    }

    #[test]
    fn prop_edge_count_matches_adjacent_pairs(
        n in 0usize..10,
        bits in prop::collection::vec(any::<bool>(), 45)
    ) {
        let graph = random_graph(n, &bits);
        let nodes: Vec<_> = graph.nodes().collect();
        let mut pairs = 0;
        for (i, a) in nodes.iter().enumerate() {
            for b in &nodes[i + 1..] {
                if graph.is_adjacent(a, b) {
                    pairs += 1;
                }
            }
        }
        prop_assert_eq!(graph.edge_count(), pairs);
    }

    #[test]
    fn prop_accepted_graphs_have_consecutive_cliques(
        n in 1usize..8,
        bits in prop::collection::vec(any::<bool>(), 28)
    ) {
        if let Ok(map) = reconstruct(&random_graph(n, &bits)) {
            assert_consecutive(&map);
        }
    }
}
