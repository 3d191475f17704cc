//! Flat node/edge export for the front end.

use serde::{Deserialize, Serialize};

use crate::accumulator::GraphAccumulator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportNode {
    pub id: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportEdge {
    pub source: String,
    pub target: String,
}

/// Snapshot of the whole graph.
///
/// Edges are emitted from every node's adjacency list, so each undirected
/// edge shows up twice, once from each endpoint. Consumers wanting an
/// undirected view must deduplicate themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
    pub nodes: Vec<ExportNode>,
    pub edges: Vec<ExportEdge>,
}

impl GraphAccumulator {
    /// Walk all nodes in insertion order and all of their adjacency entries.
    pub fn export(&self) -> GraphExport {
        let mut export = GraphExport {
            nodes: Vec::with_capacity(self.node_count()),
            edges: Vec::with_capacity(self.edge_count() * 2),
        };

        for (idx, node) in self.nodes() {
            export.nodes.push(ExportNode {
                id: node.id.clone(),
                data: node.data.clone(),
            });
            for neighbor in self.adjacency(idx) {
                export.edges.push(ExportEdge {
                    source: node.id.clone(),
                    target: neighbor.id,
                });
            }
        }

        export
    }
}
