//! Pairwise direction judgments used while orienting a graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a node pair `(a, b)` relative to a partially oriented DAG.
///
/// Always derived from the source graph and the DAG built so far, never
/// stored: the DAG grows during orientation and a cached value would go
/// stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `a → b` is in the DAG.
    Forward,
    /// `b → a` is in the DAG.
    Backward,
    /// `a` and `b` are adjacent in the source graph but not yet oriented.
    Undetermined,
    /// `a` and `b` are not adjacent in the source graph.
    Absent,
}

impl Direction {
    /// True for `Forward` and `Backward`.
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Forward | Self::Backward)
    }

    /// Swap `Forward` and `Backward`; other variants are unchanged.
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
            other => other,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Backward => write!(f, "backward"),
            Self::Undetermined => write!(f, "undetermined"),
            Self::Absent => write!(f, "absent"),
        }
    }
}
