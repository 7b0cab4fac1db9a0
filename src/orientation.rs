//! Transitive orientation of the non-overlap relation.
//!
//! A graph is an interval graph iff it is chordal and its complement admits
//! a transitive orientation. This module builds that orientation, or returns
//! a triple of nodes proving none exists.
//!
//! ## Algorithm
//!
//! 1. Seed: the node with the largest out-degree (first in node order on
//!    ties) has its first edge oriented outward
//! 2. Pass: for every source edge `a → b` whose direction is resolved, and
//!    every `c` adjacent to `b` (`c ≠ a`):
//!    - if `a`, `c` are not adjacent, `b–c` must mirror `a–b` about `b`
//!      (`a → b` forces `c → b`, `b → a` forces `b → c`)
//!    - if `a`, `c` are adjacent and `b–c` continues `a–b`
//!      (`a → b → c` or `a ← b ← c`), `a–c` must follow transitively
//!
//!    An undetermined edge is oriented as required; one resolved the other
//!    way is a [`OrientationError::TransitivityViolation`]
//! 3. Repeat passes until every source edge is oriented and a full pass adds
//!    nothing. A pass that adds nothing while edges remain opens a new
//!    implication class by orienting the first undetermined edge forward
//!
//! Nodes and neighbours are visited in node order, so the orientation and
//! any violation triple are deterministic.

use crate::graph::Graph;
use crate::types::{Direction, NodeId};

/// Error type for transitive orientation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrientationError {
    /// No transitive orientation exists: the overlap graph whose complement
    /// was being oriented is not an interval graph.
    #[error("Transitivity violation among ({a}, {b}, {c}): not an interval graph")]
    TransitivityViolation {
        /// First node of the offending triple.
        a: NodeId,
        /// Shared node of the two forcing edges.
        b: NodeId,
        /// Third node of the offending triple.
        c: NodeId,
    },
    /// The fixpoint loop hit its pass bound without converging.
    #[error("Orientation did not converge after {passes} passes")]
    DidNotConverge {
        /// Passes run.
        passes: usize,
    },
}

/// Direction of the pair `(a, b)` in `dag`, relative to `source`.
///
/// `Absent` if `a → b` is not a source edge, otherwise `Forward`/`Backward`
/// if the DAG already orients the pair, else `Undetermined`.
pub fn direction(source: &Graph, dag: &Graph, a: &str, b: &str) -> Direction {
    if !source.has_edge(a, b) {
        Direction::Absent
    } else if dag.has_edge(a, b) {
        Direction::Forward
    } else if dag.has_edge(b, a) {
        Direction::Backward
    } else {
        Direction::Undetermined
    }
}

/// Transitively orient `source`.
///
/// Returns a DAG over the same nodes with one directed edge per adjacent
/// pair of `source`. `source` is expected to be symmetric, as the
/// complement of an overlap graph is.
pub fn transitively_orient(source: &Graph) -> Result<Graph, OrientationError> {
    let mut orienter = Orienter::new(source);
    orienter.seed();

    let max_passes = source.edge_count() + 2;
    for pass in 1..=max_passes {
        let added = orienter.pass()?;
        let oriented = orienter.dag.edge_count();
        tracing::trace!(pass, added, oriented, total = source.edge_count(), "Orientation pass");

        if oriented == source.edge_count() && added == 0 {
            tracing::debug!(passes = pass, edges = oriented, "Transitive orientation complete");
            return Ok(orienter.dag);
        }
        if added == 0 {
            orienter.open_next_class();
        }
    }

    Err(OrientationError::DidNotConverge { passes: max_passes })
}

/// Orientation state: the source graph and the DAG built so far.
struct Orienter<'g> {
    source: &'g Graph,
    dag: Graph,
}

impl<'g> Orienter<'g> {
    fn new(source: &'g Graph) -> Self {
        Self {
            source,
            dag: Graph::with_nodes(source.nodes().cloned()),
        }
    }

    fn direction(&self, a: &str, b: &str) -> Direction {
        direction(self.source, &self.dag, a, b)
    }

    /// Orient `x–y` so that `direction(x, y) == dir`.
    fn orient(&mut self, x: &str, y: &str, dir: Direction) {
        match dir {
            Direction::Forward => self.dag.add_edge(x, y),
            Direction::Backward => self.dag.add_edge(y, x),
            Direction::Undetermined | Direction::Absent => false,
        };
    }

    /// Orient the first edge of the highest out-degree node outward.
    fn seed(&mut self) {
        let source = self.source;
        let mut seed: Option<(&NodeId, usize)> = None;
        for node in source.nodes() {
            let degree = source.out_degree(node);
            if seed.map_or(true, |(_, best)| degree > best) {
                seed = Some((node, degree));
            }
        }

        let Some((seed, _)) = seed else { return };
        let first = source.out_set(seed).and_then(|out| out.iter().next());
        if let Some(first) = first {
            tracing::trace!(seed = %seed, first = %first, "Seeding orientation");
            self.orient(seed, first, Direction::Forward);
        }
    }

    /// Orient the first undetermined edge forward.
    fn open_next_class(&mut self) {
        let source = self.source;
        let next = source
            .edges()
            .find(|(a, b)| self.direction(a, b) == Direction::Undetermined);
        if let Some((a, b)) = next {
            tracing::trace!(a = %a, b = %b, "Opening new implication class");
            self.orient(a, b, Direction::Forward);
        }
    }

    /// One propagation pass over every source edge. Returns edges added.
    fn pass(&mut self) -> Result<usize, OrientationError> {
        let source = self.source;
        let mut added = 0;

        for (a, b) in source.edges() {
            let ab = self.direction(a, b);
            if !ab.is_resolved() {
                continue;
            }

            let Some(b_neighbors) = source.out_set(b) else { continue };
            for c in b_neighbors {
                if c == a {
                    continue;
                }
                let bc = self.direction(b, c);
                let ac = self.direction(a, c);

                if ac == Direction::Absent {
                    let required = ab.reversed();
                    if bc == Direction::Undetermined {
                        self.orient(b, c, required);
                        added += 1;
                    } else if bc != required {
                        return Err(violation(a, b, c));
                    }
                } else if bc == ab {
                    if ac == Direction::Undetermined {
                        self.orient(a, c, ab);
                        added += 1;
                    } else if ac != ab {
                        return Err(violation(a, b, c));
                    }
                }
            }
        }

        Ok(added)
    }
}

fn violation(a: &NodeId, b: &NodeId, c: &NodeId) -> OrientationError {
    tracing::warn!(a = %a, b = %b, c = %c, "Transitivity violation: not an interval graph");
    OrientationError::TransitivityViolation {
        a: a.clone(),
        b: b.clone(),
        c: c.clone(),
    }
}
