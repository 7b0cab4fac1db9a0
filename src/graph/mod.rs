//! Directed adjacency-set graph store.
//!
//! Every graph in the pipeline (overlap graph, complement, oriented DAG,
//! clique graph) is a [`Graph`]. Undirected edges are stored as the pair of
//! directed edges.

pub mod complement;
pub mod matrix;

use std::collections::{BTreeMap, BTreeSet};

use crate::types::NodeId;

pub use matrix::{MatrixError, MatrixFixture};

/// Directed graph over [`NodeId`]s with successor and predecessor sets.
///
/// Uses BTreeMap/BTreeSet for deterministic iteration order.
///
/// ## Invariants
///
/// - `edges_in[v]` contains `u` iff `edges_out[u]` contains `v`
/// - `edge_count` is the number of unordered pairs `{u, v}` joined by at
///   least one directed edge, so an undirected edge counts once however its
///   two directed halves were inserted
/// - both counters are maintained incrementally
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// Node -> successors.
    edges_out: BTreeMap<NodeId, BTreeSet<NodeId>>,
    /// Node -> predecessors.
    edges_in: BTreeMap<NodeId, BTreeSet<NodeId>>,
    node_count: usize,
    edge_count: usize,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with the given nodes and no edges.
    pub fn with_nodes<I, N>(nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeId>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        graph
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of adjacent unordered node pairs.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Add a node. Returns false if it is already present.
    pub fn add_node(&mut self, node: impl Into<NodeId>) -> bool {
        let node = node.into();
        if self.edges_out.contains_key(&node) {
            return false;
        }

        self.edges_in.insert(node.clone(), BTreeSet::new());
        self.edges_out.insert(node, BTreeSet::new());
        self.node_count += 1;
        true
    }

    /// Check whether a node is present.
    pub fn contains_node(&self, node: &str) -> bool {
        self.edges_out.contains_key(node)
    }

    /// Iterate nodes in order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.edges_out.keys()
    }

    /// Add the directed edge `head → tail`.
    ///
    /// Returns false for a self-loop, if either endpoint is missing, or if the
    /// edge already exists.
    pub fn add_edge(&mut self, head: &str, tail: &str) -> bool {
        if head == tail {
            return false;
        }
        let (Some(head_id), Some(tail_id)) = (self.node_id(head), self.node_id(tail)) else {
            return false;
        };
        if self.has_edge(head, tail) {
            return false;
        }
        let reverse_exists = self.has_edge(tail, head);

        if let Some(out) = self.edges_out.get_mut(head) {
            out.insert(tail_id);
        }
        if let Some(incoming) = self.edges_in.get_mut(tail) {
            incoming.insert(head_id);
        }

        if !reverse_exists {
            self.edge_count += 1;
        }
        true
    }

    /// Add both `a → b` and `b → a`, counted as a single edge.
    ///
    /// Returns true if at least one direction was added.
    pub fn add_undirected_edge(&mut self, a: &str, b: &str) -> bool {
        let forward = self.add_edge(a, b);
        let backward = self.add_edge(b, a);
        forward || backward
    }

    /// Check whether `head → tail` exists.
    pub fn has_edge(&self, head: &str, tail: &str) -> bool {
        self.edges_out
            .get(head)
            .map(|out| out.contains(tail))
            .unwrap_or(false)
    }

    /// Check whether `a` and `b` are joined in either direction.
    pub fn is_adjacent(&self, a: &str, b: &str) -> bool {
        self.has_edge(a, b) || self.has_edge(b, a)
    }

    /// Remove the directed edge `head → tail`. Returns false if it was absent.
    pub fn remove_edge(&mut self, head: &str, tail: &str) -> bool {
        let removed = self
            .edges_out
            .get_mut(head)
            .map(|out| out.remove(tail))
            .unwrap_or(false);
        if !removed {
            return false;
        }
        if let Some(incoming) = self.edges_in.get_mut(tail) {
            incoming.remove(head);
        }

        if !self.has_edge(tail, head) {
            self.edge_count -= 1;
        }
        true
    }

    /// Successors of a node, copied. Empty if the node is absent.
    pub fn successors(&self, node: &str) -> BTreeSet<NodeId> {
        self.edges_out.get(node).cloned().unwrap_or_default()
    }

    /// Predecessors of a node, copied. Empty if the node is absent.
    pub fn predecessors(&self, node: &str) -> BTreeSet<NodeId> {
        self.edges_in.get(node).cloned().unwrap_or_default()
    }

    /// Number of successors of a node.
    pub fn out_degree(&self, node: &str) -> usize {
        self.edges_out.get(node).map(BTreeSet::len).unwrap_or(0)
    }

    /// Number of predecessors of a node.
    pub fn in_degree(&self, node: &str) -> usize {
        self.edges_in.get(node).map(BTreeSet::len).unwrap_or(0)
    }

    /// Nodes joined to `node` in both directions.
    pub fn mutual_neighbors(&self, node: &str) -> BTreeSet<NodeId> {
        match (self.edges_out.get(node), self.edges_in.get(node)) {
            (Some(out), Some(incoming)) => out.intersection(incoming).cloned().collect(),
            _ => BTreeSet::new(),
        }
    }

    /// Borrowed successor set, for the algorithms in this crate.
    pub(crate) fn out_set(&self, node: &str) -> Option<&BTreeSet<NodeId>> {
        self.edges_out.get(node)
    }

    /// Iterate directed edges `(head, tail)` in order.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.edges_out
            .iter()
            .flat_map(|(head, out)| out.iter().map(move |tail| (head, tail)))
    }

    /// Owned copy of the stored identity for `node`.
    fn node_id(&self, node: &str) -> Option<NodeId> {
        self.edges_out.get_key_value(node).map(|(id, _)| id.clone())
    }
}
