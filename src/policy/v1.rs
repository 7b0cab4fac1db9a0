//! ReconstructionPolicy v1: clique labelling and clique ordering knobs.
//!
//! The policy is part of every [`crate::PhysicalMap`]: its `params_hash`
//! feeds the map fingerprint, so two maps only share a fingerprint when
//! they were built under the same parameters.

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_hash_hex;
use crate::types::LabelStyle;
use crate::DEFAULT_POLICY_VERSION;

/// Number of letters in the single-letter clique alphabet.
const LEGACY_ALPHABET_SIZE: usize = 26;

/// How the clique DAG is turned into a sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStrategy {
    /// Sort by ascending out-degree. Requires the clique DAG to be a
    /// complete tournament and checks that it is.
    #[default]
    OutDegree,
    /// Sink-first topological sort, ties broken by label. Accepts partial
    /// orders; agrees with `OutDegree` on total orders.
    Topological,
}

/// Reconstruction policy version 1.
///
/// ## Parameters
///
/// - `label_style`: how maximal cliques are named
/// - `max_cliques`: budget cap on the number of maximal cliques
/// - `order_strategy`: how the clique DAG becomes a linear order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructionPolicyV1 {
    /// Policy version identifier.
    pub version: String,
    /// Clique label style.
    pub label_style: LabelStyle,
    /// Maximum number of maximal cliques accepted.
    pub max_cliques: usize,
    /// Clique ordering strategy.
    pub order_strategy: OrderStrategy,
}

impl ReconstructionPolicyV1 {
    /// Create a new policy with custom parameters.
    pub fn new(label_style: LabelStyle, max_cliques: usize, order_strategy: OrderStrategy) -> Self {
        Self {
            version: DEFAULT_POLICY_VERSION.to_string(),
            label_style,
            max_cliques,
            order_strategy,
        }
    }

    /// Single-letter alphabet (`A`..`Z`) and the out-degree ordering.
    pub fn legacy() -> Self {
        Self::new(LabelStyle::Alphabetic, LEGACY_ALPHABET_SIZE, OrderStrategy::OutDegree)
    }

    /// Get the policy ID.
    pub fn policy_id(&self) -> &str {
        &self.version
    }

    /// Compute a hash of the policy parameters.
    pub fn params_hash(&self) -> Result<String, serde_json::Error> {
        canonical_hash_hex(self)
    }

    /// Parse a policy from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for ReconstructionPolicyV1 {
    fn default() -> Self {
        Self::new(LabelStyle::Alphabetic, 10_000, OrderStrategy::OutDegree)
    }
}
