//! Physical map reconstruction: read windows and the minimum tiling path.
//!
//! Along a clique path every marker occupies a contiguous run of positions,
//! so it starts exactly once and ends exactly once. The start/end sets per
//! position are enough to pick a minimum set of markers covering the whole
//! map (greedy interval cover).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Clique, CliqueLabel, NodeId};

/// Error type for physical map reconstruction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TilingError {
    /// The order names a clique that has no members on record.
    #[error("Unknown clique in order: {0}")]
    UnknownClique(CliqueLabel),
    /// No marker extends coverage past `position - 1`.
    #[error("No marker covers position {position}")]
    CoverageGap {
        /// First uncovered position.
        position: usize,
    },
    /// A marker starts but never ends.
    #[error("Marker {0} starts but never ends")]
    UnterminatedMarker(NodeId),
}

/// Per-position start and end sets along a clique order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadWindows {
    /// Markers whose interval begins at each position.
    pub starts: Vec<BTreeSet<NodeId>>,
    /// Markers whose interval ends at each position.
    pub ends: Vec<BTreeSet<NodeId>>,
}

impl ReadWindows {
    /// Derive start/end sets from labelled cliques and their order.
    ///
    /// `starts[i] = C(i) \ C(i-1)` and `ends[i] = C(i) \ C(i+1)`, with the
    /// cliques beyond either end treated as empty.
    pub fn new(
        cliques: &BTreeMap<CliqueLabel, Clique>,
        order: &[CliqueLabel],
    ) -> Result<Self, TilingError> {
        let sequence = order
            .iter()
            .map(|label| {
                cliques
                    .get(label)
                    .ok_or_else(|| TilingError::UnknownClique(label.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let empty = Clique::new();
        let mut windows = Self::default();
        for (i, current) in sequence.iter().enumerate() {
            let previous = if i == 0 { &empty } else { sequence[i - 1] };
            let next = sequence.get(i + 1).copied().unwrap_or(&empty);
            windows.starts.push(current.difference(previous));
            windows.ends.push(current.difference(next));
        }

        Ok(windows)
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// True if there are no positions.
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Greedy minimum tiling path.
    ///
    /// Coverage starts at nothing (`-1`). Each step takes, among markers
    /// starting at or before the first uncovered position, the one reaching
    /// furthest; ties go to the earliest start, then to encounter order
    /// (position, then label). Stops once the last position is covered.
    pub fn tiling_path(&self) -> Result<TilingPath, TilingError> {
        let mut ends_at: BTreeMap<&NodeId, usize> = BTreeMap::new();
        for (position, ends) in self.ends.iter().enumerate() {
            for marker in ends {
                ends_at.insert(marker, position);
            }
        }

        // (marker, start, end) in encounter order.
        let mut spans: Vec<(&NodeId, usize, usize)> = Vec::new();
        for (position, starts) in self.starts.iter().enumerate() {
            for marker in starts {
                let end = ends_at
                    .get(marker)
                    .copied()
                    .ok_or_else(|| TilingError::UnterminatedMarker(marker.clone()))?;
                spans.push((marker, position, end));
            }
        }

        let mut path = TilingPath::default();
        // Number of positions covered so far (covered-through + 1).
        let mut covered = 0;
        while covered < self.len() {
            let mut best: Option<(&NodeId, usize, usize)> = None;
            for &(marker, start, end) in &spans {
                if start > covered {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some((_, best_start, best_end)) => {
                        end > best_end || (end == best_end && start < best_start)
                    }
                };
                if better {
                    best = Some((marker, start, end));
                }
            }

            match best {
                Some((marker, start, end)) if end >= covered => {
                    path.markers.push(marker.clone());
                    path.spans.push((start, end));
                    covered = end + 1;
                }
                _ => return Err(TilingError::CoverageGap { position: covered }),
            }
        }

        Ok(path)
    }
}

/// Minimum ordered set of markers covering every position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilingPath {
    /// Selected markers, in selection order.
    pub markers: Vec<NodeId>,
    /// `(start, end)` positions of each selected marker.
    pub spans: Vec<(usize, usize)>,
}

impl TilingPath {
    /// Concatenation of the selected marker labels (the genome label).
    pub fn label(&self) -> String {
        self.markers.iter().map(NodeId::as_str).collect()
    }

    /// Number of selected markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// True if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
