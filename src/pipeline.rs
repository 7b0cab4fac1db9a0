//! End-to-end map reconstruction.
//!
//! ```text
//! overlap → complement → transitive orientation ┐
//!        └→ maximal cliques → labels ───────────┴→ clique graph → order
//!                                                   → read windows → tiling path
//! ```

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_hash_hex;
use crate::clique_path::{build_clique_graph, CliqueCatalog, CliquePathError};
use crate::cliques::maximal_cliques;
use crate::graph::Graph;
use crate::linear_order::linear_order;
use crate::orientation::{transitively_orient, OrientationError};
use crate::physical_map::{ReadWindows, TilingError, TilingPath};
use crate::policy::ReconstructionPolicyV1;
use crate::types::CliqueLabel;
use crate::MAP_SCHEMA_VERSION;

/// Error type for map reconstruction.
#[derive(Debug, thiserror::Error)]
pub enum ReconstructionError {
    /// The complement of the overlap graph cannot be transitively oriented.
    #[error(transparent)]
    Orientation(#[from] OrientationError),
    /// The maximal cliques cannot be put on a path.
    #[error(transparent)]
    CliquePath(#[from] CliquePathError),
    /// The read windows do not admit a tiling path.
    #[error(transparent)]
    Tiling(#[from] TilingError),
    /// Fingerprint serialization failed.
    #[error("Fingerprint error: {0}")]
    Fingerprint(#[from] serde_json::Error),
}

impl ReconstructionError {
    /// True if the error is a verdict that the input is not an interval
    /// graph, as opposed to a policy limit or malformed data.
    pub fn is_not_interval_graph(&self) -> bool {
        matches!(
            self,
            Self::Orientation(OrientationError::TransitivityViolation { .. })
                | Self::CliquePath(CliquePathError::OrientationConflict { .. })
                | Self::CliquePath(CliquePathError::NotTotalOrder { .. })
                | Self::CliquePath(CliquePathError::Cyclic(_))
        )
    }
}

/// A reconstructed physical map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalMap {
    /// Schema version of this structure.
    pub schema_version: String,
    /// Policy used for the reconstruction.
    pub policy_id: String,
    /// Hash of the policy parameters.
    pub params_hash: String,
    /// Labelled maximal cliques, largest first.
    pub cliques: CliqueCatalog,
    /// Clique labels along the map.
    pub order: Vec<CliqueLabel>,
    /// Start/end markers per position.
    pub windows: ReadWindows,
    /// Minimum tiling path.
    pub tiling_path: TilingPath,
    /// Concatenated labels of the tiling path.
    pub genome_label: String,
    /// Canonical hash of order, windows, tiling path and params hash.
    pub fingerprint: String,
}

/// A physical map together with the intermediate graphs it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    /// Non-overlap graph of the input.
    pub complement: Graph,
    /// Transitive orientation of `complement`.
    pub oriented: Graph,
    /// Clique graph the order was read from.
    pub clique_graph: Graph,
    /// The reconstructed map.
    pub map: PhysicalMap,
}

#[derive(Serialize)]
struct FingerprintInput<'a> {
    schema_version: &'a str,
    params_hash: &'a str,
    order: &'a [CliqueLabel],
    windows: &'a ReadWindows,
    tiling_path: &'a TilingPath,
}

/// Runs the reconstruction pipeline under a policy.
#[derive(Debug, Clone, Default)]
pub struct MapReconstructor {
    policy: ReconstructionPolicyV1,
}

impl MapReconstructor {
    /// Create a reconstructor with the given policy.
    pub fn new(policy: ReconstructionPolicyV1) -> Self {
        Self { policy }
    }

    /// Get the policy.
    pub fn policy(&self) -> &ReconstructionPolicyV1 {
        &self.policy
    }

    /// Reconstruct the physical map of an overlap graph.
    ///
    /// `overlap` is not modified; every intermediate graph is built fresh.
    pub fn reconstruct(&self, overlap: &Graph) -> Result<PhysicalMap, ReconstructionError> {
        self.reconstruct_with_graphs(overlap).map(|reconstruction| reconstruction.map)
    }

    /// Like [`MapReconstructor::reconstruct`], but also hands back the
    /// complement, its orientation and the clique graph.
    pub fn reconstruct_with_graphs(
        &self,
        overlap: &Graph,
    ) -> Result<Reconstruction, ReconstructionError> {
        tracing::debug!(
            nodes = overlap.node_count(),
            edges = overlap.edge_count(),
            policy = %self.policy.policy_id(),
            "Reconstructing physical map"
        );

        let complement = overlap.complement();
        let oriented = transitively_orient(&complement)?;

        let cliques = maximal_cliques(overlap);
        tracing::debug!(count = cliques.len(), "Enumerated maximal cliques");
        let catalog = CliqueCatalog::new(cliques, self.policy.label_style, self.policy.max_cliques)?;

        let clique_graph = build_clique_graph(overlap, &oriented, &catalog)?;
        let order = linear_order(&clique_graph, self.policy.order_strategy)?;

        let windows = ReadWindows::new(catalog.as_map(), &order)?;
        let tiling_path = windows.tiling_path()?;
        let genome_label = tiling_path.label();

        let params_hash = self.policy.params_hash()?;
        let fingerprint = canonical_hash_hex(&FingerprintInput {
            schema_version: MAP_SCHEMA_VERSION,
            params_hash: &params_hash,
            order: &order,
            windows: &windows,
            tiling_path: &tiling_path,
        })?;

        tracing::debug!(
            positions = order.len(),
            tiles = tiling_path.len(),
            genome_label = %genome_label,
            fingerprint = %fingerprint,
            "Physical map reconstructed"
        );

        let map = PhysicalMap {
            schema_version: MAP_SCHEMA_VERSION.to_string(),
            policy_id: self.policy.policy_id().to_string(),
            params_hash,
            cliques: catalog,
            order,
            windows,
            tiling_path,
            genome_label,
            fingerprint,
        };

        Ok(Reconstruction {
            complement,
            oriented,
            clique_graph,
            map,
        })
    }
}

/// Reconstruct under the default policy.
pub fn reconstruct(overlap: &Graph) -> Result<PhysicalMap, ReconstructionError> {
    MapReconstructor::default().reconstruct(overlap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::OrderStrategy;
    use crate::types::LabelStyle;

    fn path_overlap(labels: &[&str]) -> Graph {
        let mut graph = Graph::with_nodes(labels.iter().copied());
        for pair in labels.windows(2) {
            graph.add_undirected_edge(pair[0], pair[1]);
        }
        graph
    }

    #[test]
    fn test_reconstruct_path() {
        let map = reconstruct(&path_overlap(&["a", "b", "c"])).unwrap();

        // A = {a, b}, B = {b, c}, A → B in the clique graph.
        assert_eq!(map.order, vec![CliqueLabel::from("B"), CliqueLabel::from("A")]);
        assert_eq!(map.genome_label, "b");
        assert_eq!(map.schema_version, MAP_SCHEMA_VERSION);
    }

    #[test]
    fn test_reconstruct_empty_graph() {
        let map = reconstruct(&Graph::new()).unwrap();
        assert!(map.cliques.is_empty());
        assert!(map.order.is_empty());
        assert_eq!(map.genome_label, "");
    }

    #[test]
    fn test_fingerprint_determinism() {
        let overlap = path_overlap(&["a", "b", "c", "d"]);
        let first = reconstruct(&overlap).unwrap();
        let second = reconstruct(&overlap).unwrap();
        assert_eq!(first.fingerprint, second.fingerprint);
    }

    #[test]
    fn test_fingerprint_depends_on_policy() {
        let overlap = path_overlap(&["a", "b", "c", "d"]);
        let default_map = reconstruct(&overlap).unwrap();
        let topo = MapReconstructor::new(ReconstructionPolicyV1::new(
            LabelStyle::Alphabetic,
            10_000,
            OrderStrategy::Topological,
        ))
        .reconstruct(&overlap)
        .unwrap();

        assert_eq!(default_map.order, topo.order);
        assert_ne!(default_map.fingerprint, topo.fingerprint);
    }

    #[test]
    fn test_numeric_labels() {
        let policy = ReconstructionPolicyV1::new(LabelStyle::Numeric, 10, OrderStrategy::OutDegree);
        let map = MapReconstructor::new(policy)
            .reconstruct(&path_overlap(&["a", "b", "c"]))
            .unwrap();
        assert_eq!(map.cliques.labels(), &[CliqueLabel::from("C1"), CliqueLabel::from("C2")]);
    }

    #[test]
    fn test_clique_budget_is_enforced() {
        let policy = ReconstructionPolicyV1::new(LabelStyle::Alphabetic, 1, OrderStrategy::OutDegree);
        let err = MapReconstructor::new(policy)
            .reconstruct(&path_overlap(&["a", "b", "c"]))
            .unwrap_err();
        assert!(matches!(
            err,
            ReconstructionError::CliquePath(CliquePathError::TooManyCliques { count: 2, max: 1 })
        ));
        assert!(!err.is_not_interval_graph());
    }

    #[test]
    fn test_reconstruct_with_graphs_exposes_stages() {
        let overlap = path_overlap(&["a", "b", "c"]);
        let reconstruction = MapReconstructor::default()
            .reconstruct_with_graphs(&overlap)
            .unwrap();

        assert_eq!(reconstruction.complement, overlap.complement());
        assert_eq!(reconstruction.oriented.edge_count(), 1);
        assert!(reconstruction.oriented.has_edge("a", "c"));
        assert!(reconstruction.clique_graph.has_edge("A", "B"));
        assert_eq!(reconstruction.map, reconstruct(&overlap).unwrap());
    }

    #[test]
    fn test_map_serializes_to_json() {
        let map = reconstruct(&path_overlap(&["a", "b", "c"])).unwrap();
        let json = serde_json::to_string(&map).unwrap();
        let back: PhysicalMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
