//! Value types shared by the accumulator and its callers.

use serde::{Deserialize, Serialize};

/// Node payload stored in the petgraph backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub data: String,
}

/// One adjacency entry: the node on the other end and the edge weight.
///
/// A missing weight is its own value and is never coerced to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub id: String,
    pub weight: Option<f64>,
}

impl Neighbor {
    pub fn new(id: impl Into<String>, weight: Option<f64>) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }
}

/// A relationship to wire up in a batch insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Relationship {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: Option<f64>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B)> for Relationship {
    fn from((source, target): (A, B)) -> Self {
        Self::new(source, target, None)
    }
}

impl<A: Into<String>, B: Into<String>> From<(A, B, f64)> for Relationship {
    fn from((source, target, weight): (A, B, f64)) -> Self {
        Self::new(source, target, Some(weight))
    }
}

/// What a batch insert actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub nodes_added: usize,
    pub edges_added: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStats {
    pub node_count: usize,
    /// Undirected edges, parallel edges counted individually.
    pub edge_count: usize,
}
