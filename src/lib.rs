//! # benzer-map
//!
//! Physical map reconstruction from marker overlaps.
//!
//! The crate answers one question:
//!
//! > Given which markers overlap, in what order do they lie along the
//! > chromosome, and which few of them tile it end to end?
//!
//! Consistent overlap data forms an **interval graph**. Recognising one
//! yields the map.
//!
//! ## Core Contract
//!
//! 1. Prove the overlap graph is an interval graph, or return the triple of
//!    markers (or pair of cliques) that shows it is not
//! 2. Order its maximal cliques along a path (the clique path)
//! 3. Pick a minimum tiling path of markers covering every position
//!
//! ## Architecture
//!
//! ```text
//! Overlap Graph → Complement → Transitive Orientation ┐
//!       └→ Maximal Cliques → Clique Labels ──────────┴→ Clique Graph
//!                → Linear Order → Read Windows → Tiling Path → PhysicalMap
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Every set and map is ordered, so iteration follows node labels
//! - Same overlap graph + same policy → identical map and fingerprint
//! - Verdict errors carry the same nodes on every run

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod graph;
pub mod cliques;
pub mod orientation;
pub mod clique_path;
pub mod linear_order;
pub mod physical_map;
pub mod policy;
pub mod pipeline;
pub mod canonical;

// Re-exports
pub use types::{NodeId, Clique, CliqueLabel, LabelStyle, Direction};
pub use graph::{Graph, MatrixError, MatrixFixture};
pub use cliques::{maximal_cliques, bron_kerbosch};
pub use orientation::{transitively_orient, direction, OrientationError};
pub use clique_path::{build_clique_graph, CliqueCatalog, CliquePathError};
pub use linear_order::{linear_order, out_degree_order, topological_order};
pub use physical_map::{ReadWindows, TilingPath, TilingError};
pub use policy::{ReconstructionPolicyV1, OrderStrategy};
pub use pipeline::{MapReconstructor, PhysicalMap, Reconstruction, ReconstructionError, reconstruct};
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex};

/// Schema version for [`PhysicalMap`].
/// Increment on breaking changes to any serialized type.
pub const MAP_SCHEMA_VERSION: &str = "1.0.0";

/// Default policy version identifier.
pub const DEFAULT_POLICY_VERSION: &str = "reconstruction_policy_v1";
