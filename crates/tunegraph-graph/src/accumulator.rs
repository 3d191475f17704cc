//! Graph accumulator backed by petgraph.

use std::collections::HashMap;

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use tracing::trace;

use crate::types::{BatchSummary, GraphNode, GraphStats, Neighbor, Relationship};

/// In-memory undirected multigraph keyed by external catalog identifiers.
///
/// The accumulator grows monotonically: nodes and edges are only ever added.
/// It holds no locks of its own; share it behind a lock if needed.
pub struct GraphAccumulator {
    graph: UnGraph<GraphNode, Option<f64>>,
    node_index: HashMap<String, NodeIndex>,
}

impl GraphAccumulator {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            node_index: HashMap::new(),
        }
    }

    /// Insert a node unless `id` is already present.
    ///
    /// An existing node keeps its original payload. Returns whether a node
    /// was inserted.
    pub fn add_node(&mut self, id: impl Into<String>, data: impl Into<String>) -> bool {
        let id = id.into();
        if self.node_index.contains_key(&id) {
            return false;
        }

        let idx = self.graph.add_node(GraphNode {
            id: id.clone(),
            data: data.into(),
        });
        self.node_index.insert(id, idx);
        true
    }

    /// Connect two existing nodes with an undirected edge.
    ///
    /// If either endpoint is unknown nothing happens. Repeating the same pair
    /// adds a parallel edge. Returns whether an edge was created.
    pub fn add_edge(&mut self, id1: &str, id2: &str, weight: Option<f64>) -> bool {
        let (Some(&a), Some(&b)) = (self.node_index.get(id1), self.node_index.get(id2)) else {
            trace!("Skipping edge {} -- {}: endpoint not present", id1, id2);
            return false;
        };

        self.graph.add_edge(a, b, weight);
        true
    }

    /// Insert every node, then wire every relationship in order.
    ///
    /// Nodes go through [`add_node`](Self::add_node) and relationships through
    /// [`add_edge`](Self::add_edge), so children listed in `nodes` are present
    /// by the time their relationships are processed.
    pub fn add_data_with_relationships<K, V, R>(
        &mut self,
        nodes: impl IntoIterator<Item = (K, V)>,
        relationships: impl IntoIterator<Item = R>,
    ) -> BatchSummary
    where
        K: Into<String>,
        V: Into<String>,
        R: Into<Relationship>,
    {
        let mut summary = BatchSummary::default();

        for (id, data) in nodes {
            if self.add_node(id, data) {
                summary.nodes_added += 1;
            }
        }

        for rel in relationships {
            let rel = rel.into();
            if self.add_edge(&rel.source, &rel.target, rel.weight) {
                summary.edges_added += 1;
            }
        }

        summary
    }

    /// Adjacency list of `id` in edge insertion order.
    ///
    /// Unknown identifiers yield an empty list. A self-loop contributes two
    /// entries pointing back at `id`.
    pub fn get_neighbors(&self, id: &str) -> Vec<Neighbor> {
        match self.node_index.get(id) {
            Some(&idx) => self.adjacency(idx),
            None => Vec::new(),
        }
    }

    /// Stored payload for `id`, or `None` if the node is unknown.
    pub fn get_node_data(&self, id: &str) -> Option<&str> {
        self.node_index
            .get(id)
            .map(|&idx| self.graph[idx].data.as_str())
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Get graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            node_count: self.graph.node_count(),
            edge_count: self.graph.edge_count(),
        }
    }

    /// Nodes in insertion order.
    pub(crate) fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &GraphNode)> + '_ {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    /// Build the adjacency list for a node from the petgraph edge lists.
    ///
    /// Edge indices are assigned sequentially and never reused, so sorting by
    /// index restores insertion order.
    pub(crate) fn adjacency(&self, idx: NodeIndex) -> Vec<Neighbor> {
        let mut incident: Vec<(EdgeIndex, NodeIndex, Option<f64>)> = self
            .graph
            .edges(idx)
            .map(|e| {
                let other = if e.source() == idx { e.target() } else { e.source() };
                (e.id(), other, *e.weight())
            })
            .collect();
        incident.sort_by_key(|(edge, _, _)| *edge);
        incident.dedup_by_key(|(edge, _, _)| *edge);

        let mut neighbors = Vec::with_capacity(incident.len());
        for (_, other, weight) in incident {
            let neighbor = Neighbor::new(self.graph[other].id.clone(), weight);
            if other == idx {
                neighbors.push(neighbor.clone());
            }
            neighbors.push(neighbor);
        }
        neighbors
    }
}

impl Default for GraphAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
