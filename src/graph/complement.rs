//! Graph complement.

use super::Graph;

impl Graph {
    /// Build the complement: same nodes, `u → v` iff `u ≠ v` and `v` is not
    /// a successor of `u` here.
    ///
    /// Turns the overlap relation into the non-overlap relation, which is
    /// the one that gets transitively oriented.
    pub fn complement(&self) -> Graph {
        let mut complement = Graph::with_nodes(self.nodes().cloned());

        for head in self.nodes() {
            for tail in self.nodes() {
                if head != tail && !self.has_edge(head, tail) {
                    complement.add_edge(head, tail);
                }
            }
        }

        complement
    }
}
