//! Linear order extraction from the clique graph.

use std::collections::BTreeMap;

use crate::clique_path::CliquePathError;
use crate::graph::Graph;
use crate::policy::OrderStrategy;
use crate::types::CliqueLabel;

/// Turn the clique graph into a sequence of clique labels.
pub fn linear_order(
    clique_graph: &Graph,
    strategy: OrderStrategy,
) -> Result<Vec<CliqueLabel>, CliquePathError> {
    match strategy {
        OrderStrategy::OutDegree => out_degree_order(clique_graph),
        OrderStrategy::Topological => topological_order(clique_graph),
    }
}

/// Sort labels by ascending out-degree.
///
/// Only valid on a complete tournament: there the out-degrees are exactly
/// `0..n`, and out-degree is the distance from the end of the order. Any
/// other graph is rejected with [`CliquePathError::NotTotalOrder`].
pub fn out_degree_order(clique_graph: &Graph) -> Result<Vec<CliqueLabel>, CliquePathError> {
    let n = clique_graph.node_count();
    let not_total = || CliquePathError::NotTotalOrder {
        cliques: n,
        edges: clique_graph.edge_count(),
    };

    if clique_graph.edge_count() != n * n.saturating_sub(1) / 2 {
        return Err(not_total());
    }

    let mut by_degree: Vec<Option<CliqueLabel>> = vec![None; n];
    for node in clique_graph.nodes() {
        let degree = clique_graph.out_degree(node);
        let slot = by_degree.get_mut(degree).ok_or_else(not_total)?;
        if slot.is_some() {
            return Err(not_total());
        }
        *slot = Some(CliqueLabel::from(node));
    }

    by_degree
        .into_iter()
        .map(|slot| slot.ok_or_else(not_total))
        .collect()
}

/// Sink-first topological sort, ties broken by label.
///
/// Repeatedly emits the smallest label whose remaining out-degree is zero,
/// so on a total order it matches [`out_degree_order`].
pub fn topological_order(clique_graph: &Graph) -> Result<Vec<CliqueLabel>, CliquePathError> {
    let mut remaining: BTreeMap<CliqueLabel, usize> = clique_graph
        .nodes()
        .map(|node| (CliqueLabel::from(node), clique_graph.out_degree(node)))
        .collect();
    let mut order = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let sink = remaining
            .iter()
            .find(|(_, &degree)| degree == 0)
            .map(|(label, _)| label.clone());
        let Some(sink) = sink else {
            let stuck = remaining.keys().next().cloned().unwrap_or_default();
            return Err(CliquePathError::Cyclic(stuck));
        };

        remaining.remove(&sink);
        for pred in clique_graph.predecessors(sink.as_str()) {
            if let Some(degree) = remaining.get_mut(pred.as_str()) {
                *degree -= 1;
            }
        }
        order.push(sink);
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(order: &[CliqueLabel]) -> Vec<&str> {
        order.iter().map(CliqueLabel::as_str).collect()
    }

    /// Tournament encoding the order E, C, B, A, D read last to first.
    fn five_clique_tournament() -> Graph {
        let sequence = ["D", "A", "B", "C", "E"];
        let mut graph = Graph::with_nodes(sequence);
        for (i, earlier) in sequence.iter().enumerate() {
            for later in &sequence[i + 1..] {
                graph.add_edge(earlier, later);
            }
        }
        graph
    }

    #[test]
    fn test_out_degree_order() {
        let order = out_degree_order(&five_clique_tournament()).unwrap();
        assert_eq!(labels(&order), vec!["E", "C", "B", "A", "D"]);
    }

    #[test]
    fn test_topological_matches_out_degree_on_total_orders() {
        let graph = five_clique_tournament();
        assert_eq!(
            topological_order(&graph).unwrap(),
            out_degree_order(&graph).unwrap()
        );
    }

    #[test]
    fn test_out_degree_rejects_partial_orders() {
        // A → B, A → C with B, C incomparable.
        let mut graph = Graph::with_nodes(["A", "B", "C"]);
        graph.add_edge("A", "B");
        graph.add_edge("A", "C");

        let err = out_degree_order(&graph).unwrap_err();
        assert_eq!(err, CliquePathError::NotTotalOrder { cliques: 3, edges: 2 });

        let order = topological_order(&graph).unwrap();
        assert_eq!(labels(&order), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_out_degree_rejects_cyclic_tournament() {
        let mut graph = Graph::with_nodes(["A", "B", "C"]);
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("C", "A");

        assert!(matches!(
            out_degree_order(&graph),
            Err(CliquePathError::NotTotalOrder { .. })
        ));
        assert!(matches!(topological_order(&graph), Err(CliquePathError::Cyclic(_))));
    }

    #[test]
    fn test_single_and_empty() {
        let order = out_degree_order(&Graph::with_nodes(["A"])).unwrap();
        assert_eq!(labels(&order), vec!["A"]);
        assert!(out_degree_order(&Graph::new()).unwrap().is_empty());
        assert!(topological_order(&Graph::new()).unwrap().is_empty());
    }
}
