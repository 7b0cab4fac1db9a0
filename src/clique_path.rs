//! Clique path construction.
//!
//! Maximal cliques of an interval graph admit a total order in which every
//! marker occupies a contiguous run (the clique path). The oriented
//! complement tells, for two non-overlapping markers, which one lies first;
//! two cliques inherit that direction from any non-overlapping cross pair.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::graph::Graph;
use crate::types::{Clique, CliqueLabel, Direction, LabelStyle, NodeId};

/// Error type for clique path construction and ordering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CliquePathError {
    /// Two cliques have cross pairs disagreeing in direction: not an
    /// interval graph.
    #[error("Cliques {first} {first_members} and {second} {second_members} disagree on orientation")]
    OrientationConflict {
        /// Label of the earlier clique.
        first: CliqueLabel,
        /// Members of the earlier clique.
        first_members: Clique,
        /// Label of the later clique.
        second: CliqueLabel,
        /// Members of the later clique.
        second_members: Clique,
    },
    /// More maximal cliques than the policy allows.
    #[error("Found {count} maximal cliques, policy allows {max}")]
    TooManyCliques {
        /// Cliques found.
        count: usize,
        /// Policy budget.
        max: usize,
    },
    /// The clique DAG is not a complete tournament.
    #[error("Clique graph is not a total order: {cliques} cliques, {edges} edges")]
    NotTotalOrder {
        /// Number of cliques.
        cliques: usize,
        /// Number of clique-graph edges.
        edges: usize,
    },
    /// The clique graph has a directed cycle.
    #[error("Clique graph has a cycle through {0}")]
    Cyclic(CliqueLabel),
}

/// Maximal cliques with their synthetic labels.
///
/// Labels are assigned in the order the cliques were supplied (largest
/// first when they come from [`crate::maximal_cliques`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliqueCatalog {
    /// Labels in assignment order.
    labels: Vec<CliqueLabel>,
    /// Label -> members.
    by_label: BTreeMap<CliqueLabel, Clique>,
}

impl CliqueCatalog {
    /// Label `cliques` in order, refusing more than `max_cliques`.
    pub fn new(
        cliques: Vec<Clique>,
        style: LabelStyle,
        max_cliques: usize,
    ) -> Result<Self, CliquePathError> {
        if cliques.len() > max_cliques {
            return Err(CliquePathError::TooManyCliques {
                count: cliques.len(),
                max: max_cliques,
            });
        }

        let mut catalog = Self::default();
        for (index, clique) in cliques.into_iter().enumerate() {
            let label = CliqueLabel::from_index(index, style);
            catalog.labels.push(label.clone());
            catalog.by_label.insert(label, clique);
        }
        Ok(catalog)
    }

    /// Number of cliques.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if there are no cliques.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in assignment order.
    pub fn labels(&self) -> &[CliqueLabel] {
        &self.labels
    }

    /// Members of a labelled clique.
    pub fn get(&self, label: &CliqueLabel) -> Option<&Clique> {
        self.by_label.get(label)
    }

    /// `(label, clique)` pairs in assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (&CliqueLabel, &Clique)> {
        self.labels
            .iter()
            .filter_map(|label| self.by_label.get(label).map(|clique| (label, clique)))
    }

    /// Label -> members map.
    pub fn as_map(&self) -> &BTreeMap<CliqueLabel, Clique> {
        &self.by_label
    }
}

/// Build the clique graph: one directed edge per pair of cliques.
///
/// * `overlap` - the overlap graph the cliques come from
/// * `oriented` - the transitively oriented complement of `overlap`
/// * `catalog` - the labelled maximal cliques of `overlap`
///
/// An edge `X → Y` means the non-overlapping markers of `X` point at those
/// of `Y` in `oriented`.
pub fn build_clique_graph(
    overlap: &Graph,
    oriented: &Graph,
    catalog: &CliqueCatalog,
) -> Result<Graph, CliquePathError> {
    let mut clique_graph = Graph::with_nodes(catalog.labels().iter().map(NodeId::from));
    let entries: Vec<_> = catalog.iter().collect();

    for (i, (first, first_members)) in entries.iter().enumerate() {
        for (second, second_members) in &entries[i + 1..] {
            let mut agreed: Option<Direction> = None;

            for a in first_members.iter() {
                for b in second_members.iter() {
                    if a == b || overlap.is_adjacent(a, b) {
                        continue;
                    }
                    let dir = if oriented.has_edge(a, b) {
                        Direction::Forward
                    } else if oriented.has_edge(b, a) {
                        Direction::Backward
                    } else {
                        continue;
                    };
                    match agreed {
                        None => agreed = Some(dir),
                        Some(prev) if prev != dir => {
                            tracing::warn!(
                                first = %first,
                                second = %second,
                                "Clique orientation conflict: not an interval graph"
                            );
                            return Err(CliquePathError::OrientationConflict {
                                first: (*first).clone(),
                                first_members: (*first_members).clone(),
                                second: (*second).clone(),
                                second_members: (*second_members).clone(),
                            });
                        }
                        Some(_) => {}
                    }
                }
            }

            match agreed {
                Some(Direction::Forward) => {
                    clique_graph.add_edge(first.as_str(), second.as_str());
                }
                Some(Direction::Backward) => {
                    clique_graph.add_edge(second.as_str(), first.as_str());
                }
                _ => {}
            }
        }
    }

    tracing::debug!(
        cliques = clique_graph.node_count(),
        edges = clique_graph.edge_count(),
        "Built clique graph"
    );
    Ok(clique_graph)
}
