//! Adjacency-matrix boundary: construction from 0/1 matrices and text
//! rendering for diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use super::Graph;

/// Error type for matrix construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// Number of rows differs from the number of labels.
    #[error("Matrix has {found} rows, expected {expected}")]
    RowCount {
        /// Number of labels.
        expected: usize,
        /// Number of rows supplied.
        found: usize,
    },
    /// A row has the wrong number of columns.
    #[error("Matrix row {row} has {found} columns, expected {expected}")]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of labels.
        expected: usize,
        /// Number of columns supplied.
        found: usize,
    },
    /// The same label appears twice.
    #[error("Duplicate node label: {0}")]
    DuplicateLabel(String),
}

/// Labelled 0/1 adjacency matrix, as loaded from a JSON fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixFixture {
    /// Node labels, in row/column order.
    pub labels: Vec<String>,
    /// `matrix[row][col] != 0` means an edge `labels[row] → labels[col]`.
    pub matrix: Vec<Vec<u8>>,
}

impl MatrixFixture {
    /// Parse a fixture from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Build the graph described by this fixture.
    pub fn to_graph(&self) -> Result<Graph, MatrixError> {
        Graph::from_matrix(&self.labels, &self.matrix)
    }
}

impl Graph {
    /// Build a graph from node labels and a square 0/1 matrix.
    ///
    /// Row = source, column = target. The diagonal is ignored.
    pub fn from_matrix<L: AsRef<str>>(labels: &[L], matrix: &[Vec<u8>]) -> Result<Graph, MatrixError> {
        let size = labels.len();
        if matrix.len() != size {
            return Err(MatrixError::RowCount { expected: size, found: matrix.len() });
        }

        let mut graph = Graph::new();
        for label in labels {
            if !graph.add_node(label.as_ref()) {
                return Err(MatrixError::DuplicateLabel(label.as_ref().to_string()));
            }
        }

        for (y, row) in matrix.iter().enumerate() {
            if row.len() != size {
                return Err(MatrixError::RowLength { row: y, expected: size, found: row.len() });
            }
            for (x, &cell) in row.iter().enumerate() {
                if x == y || cell == 0 {
                    continue;
                }
                graph.add_edge(labels[y].as_ref(), labels[x].as_ref());
            }
        }

        Ok(graph)
    }

    /// Render the graph as a labelled matrix.
    ///
    /// Header row of node labels, then one row per node with `*` on the
    /// diagonal and `0`/`1` elsewhere. Columns are padded to the widest
    /// label.
    pub fn render_matrix(&self) -> String {
        let width = self.nodes().map(|n| n.chars().count()).max().unwrap_or(1);
        let mut out = String::new();

        let _ = write!(out, "{:width$}", "");
        for node in self.nodes() {
            let _ = write!(out, " {:>width$}", node.as_str());
        }

        for head in self.nodes() {
            out.push('\n');
            let _ = write!(out, "{:>width$}", head.as_str());
            for tail in self.nodes() {
                let cell = if head == tail {
                    "*"
                } else if self.has_edge(head, tail) {
                    "1"
                } else {
                    "0"
                };
                let _ = write!(out, " {:>width$}", cell);
            }
        }

        out
    }
}
