//! Clique types: member sets and their synthetic labels.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use super::node::NodeId;

/// A set of mutually adjacent nodes.
///
/// Members are kept in a `BTreeSet`, so iteration is in node order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Clique(BTreeSet<NodeId>);

impl Clique {
    /// Create an empty clique.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the clique has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check membership.
    pub fn contains(&self, node: &str) -> bool {
        self.0.contains(node)
    }

    /// Iterate members in node order.
    pub fn iter(&self) -> impl Iterator<Item = &NodeId> {
        self.0.iter()
    }

    /// Borrow the member set.
    pub fn members(&self) -> &BTreeSet<NodeId> {
        &self.0
    }

    /// Members of `self` that are not in `other`.
    pub fn difference(&self, other: &Clique) -> BTreeSet<NodeId> {
        self.0.difference(&other.0).cloned().collect()
    }
}

impl From<BTreeSet<NodeId>> for Clique {
    fn from(members: BTreeSet<NodeId>) -> Self {
        Self(members)
    }
}

impl<N: Into<NodeId>> FromIterator<N> for Clique {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Clique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, "}}")
    }
}

/// How synthetic clique labels are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// Spreadsheet-style letters: `A`..`Z`, then `AA`, `AB`, ...
    #[default]
    Alphabetic,
    /// `C1`, `C2`, ...
    Numeric,
}

/// Synthetic name of a maximal clique (`A`, `B`, ... in size order).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CliqueLabel(String);

impl CliqueLabel {
    /// Create a label from an arbitrary string.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Label for the clique at `index` (0-based) in the given style.
    ///
    /// The mapping is injective for every style.
    pub fn from_index(index: usize, style: LabelStyle) -> Self {
        match style {
            LabelStyle::Alphabetic => {
                let mut letters = Vec::new();
                let mut n = index + 1;
                while n > 0 {
                    n -= 1;
                    letters.push(b'A' + (n % 26) as u8);
                    n /= 26;
                }
                letters.reverse();
                Self(letters.into_iter().map(char::from).collect())
            }
            LabelStyle::Numeric => Self(format!("C{}", index + 1)),
        }
    }

    /// Get the label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CliqueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for CliqueLabel {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CliqueLabel {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<&NodeId> for CliqueLabel {
    fn from(node: &NodeId) -> Self {
        Self(node.as_str().to_string())
    }
}

impl From<&CliqueLabel> for NodeId {
    fn from(label: &CliqueLabel) -> Self {
        NodeId::new(label.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabetic_labels() {
        let label = |i| CliqueLabel::from_index(i, LabelStyle::Alphabetic).0;
        assert_eq!(label(0), "A");
        assert_eq!(label(4), "E");
        assert_eq!(label(25), "Z");
        assert_eq!(label(26), "AA");
        assert_eq!(label(27), "AB");
        assert_eq!(label(51), "AZ");
        assert_eq!(label(52), "BA");
        assert_eq!(label(701), "ZZ");
        assert_eq!(label(702), "AAA");
    }

    #[test]
    fn test_alphabetic_labels_are_injective() {
        let labels: BTreeSet<_> = (0..2000)
            .map(|i| CliqueLabel::from_index(i, LabelStyle::Alphabetic))
            .collect();
        assert_eq!(labels.len(), 2000);
    }

    #[test]
    fn test_numeric_labels() {
        assert_eq!(CliqueLabel::from_index(0, LabelStyle::Numeric).as_str(), "C1");
        assert_eq!(CliqueLabel::from_index(41, LabelStyle::Numeric).as_str(), "C42");
    }

    #[test]
    fn test_clique_difference_and_display() {
        let a: Clique = ["α", "β", "δ"].into_iter().collect();
        let b: Clique = ["α", "β", "θ"].into_iter().collect();
        let diff: Vec<_> = a.difference(&b).into_iter().map(NodeId::into_string).collect();
        assert_eq!(diff, vec!["δ".to_string()]);
        assert_eq!(a.to_string(), "{α, β, δ}");
    }
}
