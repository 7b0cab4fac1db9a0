//! Maximal clique enumeration (Bron–Kerbosch, no pivoting).

use std::collections::BTreeSet;

use crate::graph::Graph;
use crate::types::{Clique, NodeId};

/// Enumerate maximal cliques, largest first.
///
/// The sort is stable, so cliques of equal size keep the order in which the
/// search produced them.
pub fn maximal_cliques(graph: &Graph) -> Vec<Clique> {
    let mut cliques = bron_kerbosch(graph);
    cliques.sort_by(|a, b| b.len().cmp(&a.len()));
    cliques
}

/// Enumerate maximal cliques in generation order.
///
/// Two nodes count as adjacent only when joined in both directions. An
/// empty graph has no maximal cliques.
pub fn bron_kerbosch(graph: &Graph) -> Vec<Clique> {
    let mut cliques = Vec::new();
    let pending: BTreeSet<NodeId> = graph.nodes().cloned().collect();
    extend(graph, BTreeSet::new(), pending, BTreeSet::new(), &mut cliques);
    cliques
}

/// One level of the search.
///
/// * `current` - the clique being grown (R)
/// * `pending` - nodes that may still extend it (P)
/// * `excluded` - nodes already tried at this level (X)
fn extend(
    graph: &Graph,
    current: BTreeSet<NodeId>,
    mut pending: BTreeSet<NodeId>,
    mut excluded: BTreeSet<NodeId>,
    cliques: &mut Vec<Clique>,
) {
    if pending.is_empty() && excluded.is_empty() {
        if !current.is_empty() {
            cliques.push(Clique::from(current));
        }
        return;
    }

    // P shrinks as we go; iterate the snapshot taken on entry.
    let snapshot: Vec<NodeId> = pending.iter().cloned().collect();
    for v in snapshot {
        let neighbors = graph.mutual_neighbors(&v);

        let mut next = current.clone();
        next.insert(v.clone());
        let next_pending = pending.intersection(&neighbors).cloned().collect();
        let next_excluded = excluded.intersection(&neighbors).cloned().collect();
        extend(graph, next, next_pending, next_excluded, cliques);

        pending.remove(&v);
        excluded.insert(v);
    }
}
